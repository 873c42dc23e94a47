use {super::BigInteger, crate::{Error, Result}};

/// Shifts.
///
/// Shifting left by `n` multiplies by `2^n`.
/// Shifting right by `n` divides by `2^n`, rounding toward negative
/// infinity, like an arithmetic shift of a two's-complement integer.
impl BigInteger
{
    /// Shift left by a signed amount.
    ///
    /// If `amount` is negative,
    /// this method returns [`Error::NegativeShift`].
    pub fn checked_shl(&self, amount: i64) -> Result<Self>
    {
        let amount = u64::try_from(amount)
            .map_err(|_| Error::NegativeShift(amount))?;
        let mut result = self.clone();
        result.shl_assign_impl(amount);
        Ok(result)
    }

    /// Shift right by a signed amount.
    ///
    /// If `amount` is negative,
    /// this method returns [`Error::NegativeShift`].
    pub fn checked_shr(&self, amount: i64) -> Result<Self>
    {
        let amount = u64::try_from(amount)
            .map_err(|_| Error::NegativeShift(amount))?;
        let mut result = self.clone();
        result.shr_assign_impl(amount);
        Ok(result)
    }

    pub(super) fn shl_assign_impl(&mut self, amount: u64)
    {
        self.mul_assign_impl(&pow2(amount));
    }

    pub(super) fn shr_assign_impl(&mut self, amount: u64)
    {
        let power = pow2(amount);
        let mut quotient = self.div_nonzero(&power);
        // Truncation rounded a negative quotient up; round it down instead.
        if self.negative && &quotient * &power != *self {
            quotient.decrement();
        }
        *self = quotient;
    }
}

/// Compute `2^exponent` by repeated squaring.
fn pow2(exponent: u64) -> BigInteger
{
    if exponent == 0 {
        BigInteger::one()
    } else if exponent % 2 == 0 {
        let half = pow2(exponent / 2);
        &half * &half
    } else {
        let mut power = pow2(exponent - 1);
        power.mul_limb_assign(2);
        power
    }
}
