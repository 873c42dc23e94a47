use {
    super::BigInteger,
    cow_limbs::Limb,
    smallvec::SmallVec,
    std::fmt::{self, Write},
};

/// The largest power of ten that fits in a limb.
pub(super) const DECIMAL_CHUNK: Limb = 1_000_000_000;

/// The number of decimal digits in a [`DECIMAL_CHUNK`], minus one.
pub(super) const DECIMAL_CHUNK_DIGITS: usize = 9;

impl fmt::Display for BigInteger
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        // Peel off nine digits at a time, least significant first.
        let mut chunks = SmallVec::<[Limb; 8]>::new();
        let mut magnitude = self.abs();
        while !magnitude.is_zero() {
            let (quotient, chunk) = magnitude.div_rem_limb(DECIMAL_CHUNK);
            chunks.push(chunk);
            magnitude = quotient;
        }

        let mut digits = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        match chunks.split_last() {
            None => digits.push('0'),
            Some((first, rest)) => {
                write!(digits, "{}", first)?;
                for chunk in rest.iter().rev() {
                    write!(digits, "{:09}", chunk)?;
                }
            },
        }

        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::Debug for BigInteger
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        fmt::Display::fmt(self, f)
    }
}
