use {
    super::{BigInteger, DoubleLimb, LIMB_BITS},
    crate::{Error, Result},
    cow_limbs::Limb,
};

/// Truncating division.
///
/// The quotient is rounded toward zero and the remainder has the sign
/// of the dividend, so that `(a / b) * b + a % b == a`.
impl BigInteger
{
    /// Compute the quotient and the remainder.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)>
    {
        let quotient = self.checked_div(rhs)?;
        let remainder = self - &quotient * rhs;
        Ok((quotient, remainder))
    }

    /// Compute the quotient.
    ///
    /// If `rhs` is zero, this method returns [`Error::DivisionByZero`].
    pub fn checked_div(&self, rhs: &Self) -> Result<Self>
    {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_nonzero(rhs))
    }

    /// Compute the remainder.
    ///
    /// If `rhs` is zero, this method returns [`Error::DivisionByZero`].
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self>
    {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    pub(super) fn div_assign_impl(&mut self, rhs: &Self)
    {
        match self.checked_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(err) => panic!("{}", err),
        }
    }

    pub(super) fn rem_assign_impl(&mut self, rhs: &Self)
    {
        match self.checked_rem(rhs) {
            Ok(remainder) => *self = remainder,
            Err(err) => panic!("{}", err),
        }
    }

    /// Divide by a divisor that is known not to be zero.
    pub(super) fn div_nonzero(&self, rhs: &Self) -> Self
    {
        debug_assert!(!rhs.is_zero());

        let negative = self.negative ^ rhs.negative;
        let dividend = self.abs();
        let divisor = rhs.abs();

        let quotient =
            if dividend < divisor {
                Self::zero()
            } else if let [limb] = *divisor.limbs() {
                dividend.div_rem_limb(limb).0
            } else {
                long_division(dividend, &divisor)
            };

        if negative { -quotient } else { quotient }
    }

    /// Divide a non-negative integer by a single non-zero limb.
    ///
    /// Returns the quotient and the remainder.
    pub(super) fn div_rem_limb(&self, divisor: Limb) -> (Self, Limb)
    {
        debug_assert!(!self.negative);
        debug_assert_ne!(divisor, 0);

        let divisor = DoubleLimb::from(divisor);
        let mut quotient = Self::zero();
        quotient.limbs.resize(self.len(), 0);

        let mut remainder: DoubleLimb = 0;
        let digits = quotient.limbs.as_mut_slice().iter_mut().zip(self.limbs.iter());
        for (digit, &limb) in digits.rev() {
            let window = remainder << LIMB_BITS | DoubleLimb::from(limb);
            *digit = (window / divisor) as Limb;
            remainder = window % divisor;
        }

        quotient.normalize();
        (quotient, remainder as Limb)
    }
}

/// Knuth's Algorithm D for divisors of at least two limbs.
///
/// Both operands must be non-negative,
/// and `remainder` must not be less than `divisor`.
/// On return, the remainder is discarded;
/// callers recover it from the quotient.
fn long_division(mut remainder: BigInteger, divisor: &BigInteger) -> BigInteger
{
    // Scale both operands so that the top limb of the divisor
    // has its high bit set. This bounds the error of the trial
    // digits so that a single correction step suffices.
    let top = DoubleLimb::from(divisor.limb(divisor.len() - 1));
    let scale = ((1 << LIMB_BITS) / (top + 1)) as Limb;
    let mut divisor = divisor.clone();
    divisor.mul_limb_assign(scale);
    remainder.mul_limb_assign(scale);
    remainder.limbs.push(0);

    let n = remainder.len();
    let m = divisor.len();
    debug_assert!(m >= 2 && n > m);

    let mut quotient = BigInteger::zero();
    quotient.limbs.resize(n - m, 0);

    let divisor_top = [divisor.limb(m - 1), divisor.limb(m - 2)];
    for k in (0 .. n - m).rev() {
        let window_top = [
            remainder.limb(m + k),
            remainder.limb(m + k - 1),
            remainder.limb(m + k - 2),
        ];
        let mut digit = trial_digit(window_top, divisor_top);

        let mut product = divisor.clone();
        product.mul_limb_assign(digit);
        if window_less_than(&remainder, &product, k, m) {
            digit -= 1;
            product.sub_assign_impl(&divisor);
        }

        *quotient.limbs.at_mut(k) = digit;
        subtract_from_window(&mut remainder, &product, k, m);
    }

    quotient.normalize();
    quotient
}

/// Estimate a quotient digit from the top three limbs of the window
/// and the top two limbs of the divisor.
///
/// The estimate is never too small and at most one too large.
fn trial_digit(window_top: [Limb; 3], divisor_top: [Limb; 2]) -> Limb
{
    let [a, b, c] = window_top.map(u128::from);
    let [d, e] = divisor_top.map(u128::from);
    let numerator = a << (2 * LIMB_BITS) | b << LIMB_BITS | c;
    let denominator = d << LIMB_BITS | e;
    (numerator / denominator).min(u128::from(Limb::MAX)) as Limb
}

/// Whether limbs `k ..= k + m` of `remainder` are less than `product`.
fn window_less_than(
    remainder: &BigInteger,
    product: &BigInteger,
    k: usize,
    m: usize,
) -> bool
{
    (0 ..= m).rev()
        .map(|i| (remainder.limb(k + i), product.limb(i)))
        .find(|(r, p)| r != p)
        .map_or(false, |(r, p)| r < p)
}

/// Subtract `product` from limbs `k ..= k + m` of `remainder`.
///
/// The window must not be less than `product`.
fn subtract_from_window(
    remainder: &mut BigInteger,
    product: &BigInteger,
    k: usize,
    m: usize,
)
{
    let window = &mut remainder.limbs.as_mut_slice()[k ..= k + m];
    let mut borrow = false;
    for (i, limb) in window.iter_mut().enumerate() {
        let (difference, b1) = limb.overflowing_sub(product.limb(i));
        let (difference, b2) = difference.overflowing_sub(Limb::from(borrow));
        *limb = difference;
        borrow = b1 || b2;
    }
    debug_assert!(!borrow);
}
