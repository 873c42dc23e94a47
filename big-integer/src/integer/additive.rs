use {super::{BigInteger, DoubleLimb, LIMB_BITS}, cow_limbs::Limb};

/// Addition, subtraction, negation, and complement.
impl BigInteger
{
    /// Add `rhs` to `self` in place.
    ///
    /// One limb past the longer operand leaves room for the carry,
    /// so the sign can be read off the top limb afterwards.
    pub(super) fn add_assign_impl(&mut self, rhs: &Self)
    {
        let len = self.len().max(rhs.len()) + 1;
        self.expand(len);

        let mut carry: DoubleLimb = 0;
        for (i, limb) in self.limbs.as_mut_slice().iter_mut().enumerate() {
            carry += DoubleLimb::from(*limb) + DoubleLimb::from(rhs.limb(i));
            *limb = carry as Limb;
            carry >>= LIMB_BITS;
        }

        let top = self.limb(len - 1);
        self.negative = top >> (LIMB_BITS - 1) == 1;
        self.normalize();
    }

    pub(super) fn sub_assign_impl(&mut self, rhs: &Self)
    {
        self.add_assign_impl(&-rhs);
    }

    /// The bitwise complement, `-self - 1`.
    pub(super) fn not_impl(&self) -> Self
    {
        // Complementing a normalized integer yields a normalized integer,
        // because the extension limb is complemented along with the limbs.
        Self{
            negative: !self.negative,
            limbs: self.limbs.iter().map(|&limb| !limb).collect(),
        }
    }

    /// Two's-complement negation, `!self + 1`.
    pub(super) fn neg_impl(&self) -> Self
    {
        if self.is_zero() {
            return Self::zero();
        }
        let mut result = self.not_impl();
        result.increment();
        result
    }

    /// Add one; the prefix increment.
    pub fn increment(&mut self) -> &mut Self
    {
        self.add_assign_impl(&Self::one());
        self
    }

    /// Subtract one; the prefix decrement.
    pub fn decrement(&mut self) -> &mut Self
    {
        self.add_assign_impl(&Self::minus_one());
        self
    }

    /// Add one and return the previous value; the postfix increment.
    pub fn post_increment(&mut self) -> Self
    {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtract one and return the previous value; the postfix decrement.
    pub fn post_decrement(&mut self) -> Self
    {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

#[cfg(test)]
mod tests
{
    use {
        super::*,
        crate::integer::strategy::*,
        proptest::{prelude::any, proptest},
    };

    #[test]
    fn carry_into_new_limb()
    {
        let mut a = BigInteger::from(u32::MAX);
        a.increment();
        assert_eq!(a.limbs(), [0, 1]);
        assert!(!a.is_negative());
    }

    #[test]
    fn borrow_across_sign()
    {
        let mut a = BigInteger::zero();
        a.decrement();
        assert_eq!(a, BigInteger::minus_one());
        a.increment();
        assert!(a.is_zero());
    }

    #[test]
    fn zero_minus_zero()
    {
        let difference = BigInteger::zero() - BigInteger::zero();
        assert!(difference.is_zero());
        assert_eq!(difference.to_string(), "0");
    }

    #[test]
    fn negate_most_negative_limb()
    {
        // -2^31 fits in one limb, 2^31 does not fit in a signed limb.
        let a = BigInteger::from(i32::MIN);
        let b = -&a;
        assert_eq!(b.limbs(), [1 << 31]);
        assert!(!b.is_negative());
        assert_eq!(-b, a);
    }

    #[test]
    fn postfix_returns_previous_value()
    {
        let mut a = BigInteger::from(41);
        assert_eq!(a.post_increment(), BigInteger::from(41));
        assert_eq!(a, BigInteger::from(42));
        assert_eq!(a.post_decrement(), BigInteger::from(42));
        assert_eq!(a, BigInteger::from(41));
    }

    proptest!
    {
        #[test]
        fn add_agrees_with_reference(a in big_integer(), b in big_integer())
        {
            assert_eq!(to_reference(&(&a + &b)), to_reference(&a) + to_reference(&b));
        }

        #[test]
        fn sub_agrees_with_reference(a in big_integer(), b in big_integer())
        {
            assert_eq!(to_reference(&(&a - &b)), to_reference(&a) - to_reference(&b));
        }

        #[test]
        fn add_agrees_with_machine_integers(a: i64, b: i64)
        {
            let expected = i128::from(a) + i128::from(b);
            assert_eq!((BigInteger::from(a) + BigInteger::from(b)).to_string(), expected.to_string());
        }

        #[test]
        fn add_commutes(a in big_integer(), b in big_integer())
        {
            assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associates(a in big_integer(), b in big_integer(), c in big_integer())
        {
            assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn sub_self_is_zero(a in big_integer())
        {
            assert!((&a - &a).is_zero());
        }

        #[test]
        fn add_negation_is_zero(a in big_integer())
        {
            assert!((&a + -&a).is_zero());
        }

        #[test]
        fn double_complement(a in big_integer())
        {
            assert_eq!(!!a.clone(), a);
        }

        #[test]
        fn complement_is_negation_minus_one(a in big_integer())
        {
            assert_eq!(!&a, -&a - BigInteger::one());
        }

        #[test]
        fn increment_decrement_roundtrip(a in big_integer(), steps in 0usize .. 4, flag in any::<bool>())
        {
            let mut b = a.clone();
            for _ in 0 .. steps {
                if flag { b.increment(); } else { b.decrement(); }
            }
            for _ in 0 .. steps {
                if flag { b.decrement(); } else { b.increment(); }
            }
            assert_eq!(b, a);
        }
    }
}
