use core::{convert::Infallible, marker::PhantomData};

use minos_types::process::ProcId;

use crate::{Register, RegisterDecodeError, RegisterValue, UserRef, error::SyscallError};

impl<T, const N: usize> Register<T, N> {
    pub fn new(a: [usize; N]) -> Self {
        Self {
            a,
            _phantom: PhantomData,
        }
    }

    fn map_type<U>(self) -> Register<U, N> {
        Register {
            a: self.a,
            _phantom: PhantomData,
        }
    }

    pub fn try_decode(self) -> Result<T, T::DecodeError>
    where
        T: RegisterValue<Repr = Self>,
    {
        T::try_decode(self)
    }
}

impl RegisterValue for Infallible {
    type DecodeError = Self;
    type Repr = Register<Self, 0>;

    fn encode(self) -> Self::Repr {
        unreachable!()
    }

    fn try_decode(_repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        unreachable!()
    }
}

impl RegisterValue for () {
    type DecodeError = Infallible;
    type Repr = Register<(), 0>;

    fn encode(self) -> Self::Repr {
        Register::new([])
    }

    fn try_decode(_: Self::Repr) -> Result<Self, Self::DecodeError> {
        Ok(())
    }
}

impl RegisterValue for usize {
    type DecodeError = Infallible;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        Register::new([self])
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        Ok(repr.a[0])
    }
}

impl RegisterValue for isize {
    type DecodeError = Infallible;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        Register::new([self.cast_unsigned()])
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let [a0] = repr.a;
        Ok(a0.cast_signed())
    }
}

impl RegisterValue for u64 {
    type DecodeError = Infallible;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        usize::from_ne_bytes(self.to_ne_bytes()).encode().map_type()
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let [a0] = repr.a;
        Ok(Self::from_ne_bytes(a0.to_ne_bytes()))
    }
}

macro_rules! impl_number {
    ($base_ty:ty, $ty:ty) => {
        impl RegisterValue for $ty {
            type DecodeError = RegisterDecodeError;
            type Repr = Register<Self, 1>;

            fn encode(self) -> Self::Repr {
                // widening into a full register cannot fail
                let n: $base_ty = self.try_into().unwrap();
                n.encode().map_type()
            }

            fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
                let n: $base_ty = repr.map_type().try_decode()?;
                Ok(n.try_into()?)
            }
        }
    };
}

impl_number!(usize, u8);
impl_number!(usize, u16);
impl_number!(usize, u32);
impl_number!(isize, i32);

impl RegisterValue for ProcId {
    type DecodeError = RegisterDecodeError;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        self.get().encode().map_type()
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let pid: u16 = repr.map_type().try_decode()?;
        Ok(Self::new(pid))
    }
}

impl<T> RegisterValue for UserRef<T>
where
    T: ?Sized,
{
    type DecodeError = Infallible;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        self.addr.encode().map_type()
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let addr = repr.map_type().try_decode()?;
        Ok(Self {
            addr,
            _phantom: PhantomData,
        })
    }
}

impl<A> RegisterValue for (A,)
where
    A: RegisterValue<Repr = Register<A, 1>>,
    RegisterDecodeError: From<A::DecodeError>,
{
    type DecodeError = RegisterDecodeError;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        let [a0] = self.0.encode().a;
        Register::new([a0])
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let [a0] = repr.a;
        Ok((Register::new([a0]).try_decode()?,))
    }
}

impl<A, B> RegisterValue for (A, B)
where
    A: RegisterValue<Repr = Register<A, 1>>,
    B: RegisterValue<Repr = Register<B, 1>>,
    RegisterDecodeError: From<A::DecodeError> + From<B::DecodeError>,
{
    type DecodeError = RegisterDecodeError;
    type Repr = Register<Self, 2>;

    fn encode(self) -> Self::Repr {
        let [a0] = self.0.encode().a;
        let [a1] = self.1.encode().a;
        Register::new([a0, a1])
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let [a0, a1] = repr.a;
        Ok((
            Register::new([a0]).try_decode()?,
            Register::new([a1]).try_decode()?,
        ))
    }
}

// The kernel's result convention: `usize::MAX` in `a0` means failure. The
// only fallible call in the ABI, `Execv`, never returns on success, so no
// other designator is valid.
impl RegisterValue for Result<Infallible, SyscallError> {
    type DecodeError = RegisterDecodeError;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        match self {
            Ok(never) => match never {},
            Err(SyscallError::Failed) => Register::new([usize::MAX]),
        }
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let [a0] = repr.a;
        if a0 == usize::MAX {
            return Ok(Err(SyscallError::Failed));
        }
        Err(RegisterDecodeError::InvalidResultDesignator(a0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_round_trips() {
        assert_eq!(usize::try_decode(0xdead_beef_usize.encode()), Ok(0xdead_beef));
        assert_eq!(u64::try_decode(0x1234_5678_u64.encode()), Ok(0x1234_5678));
        assert_eq!(u8::try_decode(b'x'.encode()).unwrap(), b'x');
        assert_eq!(i32::try_decode((-7_i32).encode()).unwrap(), -7);
        assert_eq!(isize::try_decode((-1_isize).encode()), Ok(-1));
    }

    #[test]
    fn narrow_decode_rejects_oversized_values() {
        let repr = Register::<u8, 1>::new([300]);
        assert!(matches!(
            u8::try_decode(repr),
            Err(RegisterDecodeError::IntConversion(_))
        ));
    }

    #[test]
    fn proc_id_round_trips() {
        let repr = ProcId::new(417).encode();
        assert_eq!(repr.a, [417]);
        assert_eq!(ProcId::try_decode(repr).unwrap(), ProcId::new(417));
    }

    #[test]
    fn proc_id_decode_rejects_wide_values() {
        let repr = Register::<ProcId, 1>::new([0x1_0000]);
        assert!(ProcId::try_decode(repr).is_err());
    }

    #[test]
    fn tuples_lay_out_in_argument_order() {
        let repr = (UserRef::new(&0_u8).cast::<u8>(), 7_usize).encode();
        assert_eq!(repr.a[1], 7);

        let repr = (b'A',).encode();
        assert_eq!(repr.a, [b'A' as usize]);
    }

    #[test]
    fn diverging_result_rejects_a_success_value() {
        let repr = Register::<Result<Infallible, SyscallError>, 1>::new([0]);
        assert!(matches!(
            repr.try_decode(),
            Err(RegisterDecodeError::InvalidResultDesignator(0))
        ));

        let repr = Register::<Result<Infallible, SyscallError>, 1>::new([usize::MAX]);
        assert_eq!(repr.try_decode().unwrap(), Err(SyscallError::Failed));
    }
}
