use {
    super::{BigInteger, LIMB_BITS},
    crate::{Error, Result},
    cow_limbs::Limb,
};

/// Number of limbs in an `i128`.
const WIDE_LIMBS: usize = (i128::BITS / LIMB_BITS) as usize;

macro_rules! integer_from_machine
{
    { $($type:ty;)* } => {
        $(
            impl From<$type> for BigInteger
            {
                fn from(value: $type) -> Self
                {
                    Self::from_wide(value as i128)
                }
            }

            impl TryFrom<&BigInteger> for $type
            {
                type Error = Error;

                fn try_from(value: &BigInteger) -> Result<Self>
                {
                    let wide = value.to_wide().ok_or(Error::OutOfRange)?;
                    <$type>::try_from(wide).map_err(|_| Error::OutOfRange)
                }
            }

            impl TryFrom<BigInteger> for $type
            {
                type Error = Error;

                fn try_from(value: BigInteger) -> Result<Self>
                {
                    <$type>::try_from(&value)
                }
            }
        )*
    };
}

integer_from_machine! {
    i8; i16; i32; i64; isize;
    u8; u16; u32; u64; usize;
}

/// Conversions through `i128`, which holds every machine integer.
impl BigInteger
{
    fn from_wide(value: i128) -> Self
    {
        let bits = value as u128;
        let limbs: Vec<Limb> =
            (0 .. WIDE_LIMBS)
            .map(|i| (bits >> (i as u32 * LIMB_BITS)) as Limb)
            .collect();
        Self::from_limbs(value < 0, limbs)
    }

    /// The value as an `i128`, if it has few enough limbs
    /// that the extension limb ends up in the top limb.
    fn to_wide(&self) -> Option<i128>
    {
        if self.len() >= WIDE_LIMBS {
            return None;
        }
        let bits = (0 .. WIDE_LIMBS)
            .map(|i| u128::from(self.limb(i)) << (i as u32 * LIMB_BITS))
            .fold(0, |acc, limb| acc | limb);
        Some(bits as i128)
    }
}

#[cfg(test)]
mod tests
{
    use {super::*, crate::integer::strategy::*, proptest::proptest};

    #[test]
    fn machine_extremes()
    {
        assert_eq!(BigInteger::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInteger::from(u64::MAX).limbs(), [Limb::MAX, Limb::MAX]);
        assert_eq!(BigInteger::from(-1i8), BigInteger::minus_one());
        assert_eq!(BigInteger::from(0usize), BigInteger::zero());
    }

    #[test]
    fn out_of_range()
    {
        let big = BigInteger::from(u64::MAX) + BigInteger::one();
        assert_eq!(u64::try_from(&big), Err(Error::OutOfRange));
        assert_eq!(i64::try_from(&big), Err(Error::OutOfRange));
        assert_eq!(u64::try_from(BigInteger::from(-1)), Err(Error::OutOfRange));
        assert_eq!(i8::try_from(&BigInteger::from(128)), Err(Error::OutOfRange));
        assert_eq!(i8::try_from(&BigInteger::from(-128)), Ok(-128));

        let huge = BigInteger::from_limbs(false, vec![0, 0, 0, 0, 1]);
        assert_eq!(i64::try_from(&huge), Err(Error::OutOfRange));
    }

    proptest!
    {
        #[test]
        fn roundtrip_i64(a: i64)
        {
            assert_eq!(i64::try_from(&BigInteger::from(a)), Ok(a));
        }

        #[test]
        fn roundtrip_u64(a: u64)
        {
            assert_eq!(u64::try_from(BigInteger::from(a)), Ok(a));
        }

        #[test]
        fn try_from_agrees_with_reference(a in big_integer_up_to(4))
        {
            let expected = i64::try_from(to_reference(&a)).ok();
            assert_eq!(i64::try_from(&a).ok(), expected);
        }
    }
}
