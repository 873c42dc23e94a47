use {super::BigInteger, cow_limbs::Limb};

/// Bitwise operators.
///
/// Combining the signs with the same operator as the limbs
/// gives the extension limb of the result, because extension
/// limbs are all zeros or all ones.
impl BigInteger
{
    fn bitwise_assign<F, G>(&mut self, rhs: &Self, limb_op: F, sign_op: G)
        where F: Fn(Limb, Limb) -> Limb
            , G: Fn(bool, bool) -> bool
    {
        // Expand before changing the sign,
        // so that the new limbs are extension limbs of the old sign.
        self.expand(rhs.len());
        for (i, limb) in self.limbs.as_mut_slice().iter_mut().enumerate() {
            *limb = limb_op(*limb, rhs.limb(i));
        }
        self.negative = sign_op(self.negative, rhs.negative);
        self.normalize();
    }

    pub(super) fn bitand_assign_impl(&mut self, rhs: &Self)
    {
        self.bitwise_assign(rhs, |a, b| a & b, |a, b| a & b);
    }

    pub(super) fn bitor_assign_impl(&mut self, rhs: &Self)
    {
        self.bitwise_assign(rhs, |a, b| a | b, |a, b| a | b);
    }

    pub(super) fn bitxor_assign_impl(&mut self, rhs: &Self)
    {
        self.bitwise_assign(rhs, |a, b| a ^ b, |a, b| a ^ b);
    }
}
