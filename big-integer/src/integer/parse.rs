use {
    super::{BigInteger, display::{DECIMAL_CHUNK_DIGITS}},
    crate::ParseError,
    cow_limbs::Limb,
    std::str::FromStr,
};

impl FromStr for BigInteger
{
    type Err = ParseError;

    /// Parse a decimal integer matching `-?[0-9]+`.
    ///
    /// Leading zeros are allowed, and `-0` is zero.
    fn from_str(str: &str) -> Result<Self, Self::Err>
    {
        if str.is_empty() {
            return Err(ParseError::Empty);
        }

        let (negative, digits) = match str.strip_prefix('-') {
            Some(digits) => (true, digits),
            None         => (false, str),
        };

        if digits.is_empty() {
            return Err(ParseError::MissingDigits);
        }

        let sign_len = str.len() - digits.len();
        if let Some((offset, found)) =
            digits.char_indices().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(ParseError::InvalidDigit{offset: sign_len + offset, found});
        }

        // Accumulate nine digits at a time.
        let mut magnitude = BigInteger::zero();
        for chunk in digits.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
            let value = chunk.iter()
                .fold(0, |acc: Limb, &digit| acc * 10 + Limb::from(digit - b'0'));
            magnitude.mul_limb_assign(10u32.pow(chunk.len() as u32));
            magnitude.add_assign_impl(&BigInteger::from(value));
        }

        Ok(if negative { -magnitude } else { magnitude })
    }
}
