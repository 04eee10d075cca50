//! `print!`-family macros over the console writers in [`crate::io`].

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {{
        #[expect(clippy::used_underscore_items)]
        $crate::io::_print(core::format_args!($($arg)*));
    }};
}

/// Prints to the console, with a newline. Output is unbuffered: the line
/// reaches the kernel before the macro returns.
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::print!("{}\n", core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => {{
        #[expect(clippy::used_underscore_items)]
        $crate::io::_eprint(core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::eprint!("\n")
    };
    ($($arg:tt)*) => {
        $crate::eprint!("{}\n", core::format_args!($($arg)*))
    };
}
