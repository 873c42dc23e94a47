use {super::{BigInteger, DoubleLimb, LIMB_BITS}, cow_limbs::Limb};

/// Multiplication.
impl BigInteger
{
    /// Schoolbook multiplication of the magnitudes.
    ///
    /// Each step computes `limb * limb + limb + carry`,
    /// which never exceeds [`DoubleLimb::MAX`].
    pub(super) fn mul_assign_impl(&mut self, rhs: &Self)
    {
        if self.is_zero() || rhs.is_zero() {
            *self = Self::zero();
            return;
        }

        let negative = self.negative ^ rhs.negative;
        let a = self.abs();
        let b = rhs.abs();

        let mut product = Self::zero();
        product.limbs.resize(a.len() + b.len() + 1, 0);

        let out = product.limbs.as_mut_slice();
        for (i, &y) in b.limbs.iter().enumerate() {
            let mut carry: DoubleLimb = 0;
            for (j, &x) in a.limbs.iter().enumerate() {
                carry += DoubleLimb::from(x) * DoubleLimb::from(y)
                       + DoubleLimb::from(out[i + j]);
                out[i + j] = carry as Limb;
                carry >>= LIMB_BITS;
            }
            // Earlier rows have not reached this limb yet.
            out[i + a.len()] = carry as Limb;
        }

        product.normalize();
        *self = if negative { -product } else { product };
    }

    /// Multiply a non-negative integer by a single limb in place.
    pub(super) fn mul_limb_assign(&mut self, factor: Limb)
    {
        debug_assert!(!self.negative);

        let mut carry: DoubleLimb = 0;
        for limb in self.limbs.as_mut_slice() {
            carry += DoubleLimb::from(*limb) * DoubleLimb::from(factor);
            *limb = carry as Limb;
            carry >>= LIMB_BITS;
        }
        if carry != 0 {
            self.limbs.push(carry as Limb);
        }

        self.normalize();
    }
}
