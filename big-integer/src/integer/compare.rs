use {super::BigInteger, std::cmp::Ordering};

impl Ord for BigInteger
{
    fn cmp(&self, other: &Self) -> Ordering
    {
        match (self.negative, other.negative) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => (),
        }

        // More stored limbs means a larger magnitude.
        let by_len = self.len().cmp(&other.len());
        let by_len = if self.negative { by_len.reverse() } else { by_len };

        // With equal signs and lengths, two's-complement limbs
        // order the same way as the integers they make up.
        by_len.then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigInteger
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    {
        Some(self.cmp(other))
    }
}
