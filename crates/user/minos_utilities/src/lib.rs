#![no_std]

#[macro_export]
macro_rules! message {
    ($($msg:tt)*) => {
        {
            let prog = ::minos_user_lib::env::arg0();
            ::minos_user_lib::eprintln!("{prog}: {msg}", msg = ::core::format_args!($($msg)*));
        }
    }
}

#[macro_export]
macro_rules! usage_and_exit {
    ($($args:tt)*) => {
        {
            let prog = ::minos_user_lib::env::arg0();
            ::minos_user_lib::eprintln!("Usage: {prog} {args}", args = ::core::format_args!($($args)*));
            ::minos_user_lib::process::exit(1);
        }
    };
}

#[macro_export]
macro_rules! try_or_exit {
    ($res:expr, $e:ident => $($msg:tt)*) => {
        match $res {
            Ok(val) => val,
            Err($e) => {
                $crate::exit!($($msg)*);
            }
        }
    }
}

#[macro_export]
macro_rules! exit {
    ($($msg:tt)*) => {
        {
            $crate::message!($($msg)*);
            ::minos_user_lib::process::exit(1);
        }
    }
}
