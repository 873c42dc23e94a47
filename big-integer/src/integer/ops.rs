//! Operator overloads.
//!
//! Every binary operator is implemented for each combination
//! of owned and borrowed operands, in terms of the compound
//! assignment methods of the arithmetic engine.
//! Operators that consume their left operand reuse its limbs.

use {
    super::BigInteger,
    std::{
        iter::{Product, Sum},
        ops::{
            Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign,
            BitXor, BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Not,
            Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
        },
    },
};

macro_rules! binary_operator
{
    { $($trait:ident $method:ident $assign_trait:ident $assign_method:ident $impl:ident;)* } => {
        $(
            impl $assign_trait<&BigInteger> for BigInteger
            {
                fn $assign_method(&mut self, rhs: &BigInteger)
                {
                    self.$impl(rhs);
                }
            }

            impl $assign_trait<BigInteger> for BigInteger
            {
                fn $assign_method(&mut self, rhs: BigInteger)
                {
                    self.$impl(&rhs);
                }
            }

            impl $trait<&BigInteger> for BigInteger
            {
                type Output = BigInteger;

                fn $method(mut self, rhs: &BigInteger) -> BigInteger
                {
                    self.$impl(rhs);
                    self
                }
            }

            impl $trait<BigInteger> for BigInteger
            {
                type Output = BigInteger;

                fn $method(mut self, rhs: BigInteger) -> BigInteger
                {
                    self.$impl(&rhs);
                    self
                }
            }

            impl $trait<&BigInteger> for &BigInteger
            {
                type Output = BigInteger;

                fn $method(self, rhs: &BigInteger) -> BigInteger
                {
                    let mut result = self.clone();
                    result.$impl(rhs);
                    result
                }
            }

            impl $trait<BigInteger> for &BigInteger
            {
                type Output = BigInteger;

                fn $method(self, rhs: BigInteger) -> BigInteger
                {
                    let mut result = self.clone();
                    result.$impl(&rhs);
                    result
                }
            }
        )*
    };
}

binary_operator! {
    Add    add    AddAssign    add_assign    add_assign_impl;
    Sub    sub    SubAssign    sub_assign    sub_assign_impl;
    Mul    mul    MulAssign    mul_assign    mul_assign_impl;
    Div    div    DivAssign    div_assign    div_assign_impl;
    Rem    rem    RemAssign    rem_assign    rem_assign_impl;
    BitAnd bitand BitAndAssign bitand_assign bitand_assign_impl;
    BitOr  bitor  BitOrAssign  bitor_assign  bitor_assign_impl;
    BitXor bitxor BitXorAssign bitxor_assign bitxor_assign_impl;
}

macro_rules! shift_operator
{
    { $($amount:ty;)* } => {
        $(
            impl ShlAssign<$amount> for BigInteger
            {
                fn shl_assign(&mut self, amount: $amount)
                {
                    self.shl_assign_impl(amount as u64);
                }
            }

            impl ShrAssign<$amount> for BigInteger
            {
                fn shr_assign(&mut self, amount: $amount)
                {
                    self.shr_assign_impl(amount as u64);
                }
            }

            impl Shl<$amount> for BigInteger
            {
                type Output = BigInteger;

                fn shl(mut self, amount: $amount) -> BigInteger
                {
                    self <<= amount;
                    self
                }
            }

            impl Shr<$amount> for BigInteger
            {
                type Output = BigInteger;

                fn shr(mut self, amount: $amount) -> BigInteger
                {
                    self >>= amount;
                    self
                }
            }

            impl Shl<$amount> for &BigInteger
            {
                type Output = BigInteger;

                fn shl(self, amount: $amount) -> BigInteger
                {
                    self.clone() << amount
                }
            }

            impl Shr<$amount> for &BigInteger
            {
                type Output = BigInteger;

                fn shr(self, amount: $amount) -> BigInteger
                {
                    self.clone() >> amount
                }
            }
        )*
    };
}

shift_operator! {
    u32;
    u64;
    usize;
}

impl Neg for BigInteger
{
    type Output = BigInteger;

    fn neg(self) -> BigInteger
    {
        self.neg_impl()
    }
}

impl Neg for &BigInteger
{
    type Output = BigInteger;

    fn neg(self) -> BigInteger
    {
        self.neg_impl()
    }
}

impl Not for BigInteger
{
    type Output = BigInteger;

    fn not(self) -> BigInteger
    {
        self.not_impl()
    }
}

impl Not for &BigInteger
{
    type Output = BigInteger;

    fn not(self) -> BigInteger
    {
        self.not_impl()
    }
}

impl Sum for BigInteger
{
    fn sum<I>(iter: I) -> Self
        where I: Iterator<Item=Self>
    {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger
{
    fn sum<I>(iter: I) -> Self
        where I: Iterator<Item=&'a Self>
    {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInteger
{
    fn product<I>(iter: I) -> Self
        where I: Iterator<Item=Self>
    {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger
{
    fn product<I>(iter: I) -> Self
        where I: Iterator<Item=&'a Self>
    {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests
{
    use {super::*, crate::integer::strategy::*, proptest::proptest};

    #[test]
    fn compound_assignment()
    {
        let mut a = BigInteger::from(10);
        a += BigInteger::from(5);
        a -= &BigInteger::from(3);
        a *= BigInteger::from(4);
        a /= &BigInteger::from(6);
        a %= BigInteger::from(5);
        a <<= 3u32;
        a >>= 1usize;
        a |= BigInteger::from(1);
        a &= BigInteger::from(0b111);
        a ^= BigInteger::from(0b10);
        assert_eq!(a, BigInteger::from(((((10 + 5 - 3) * 4 / 6 % 5) << 3 >> 1) | 1) & 0b111 ^ 0b10));
    }

    #[test]
    fn sum_and_product()
    {
        let values: Vec<BigInteger> = (1 ..= 20i32).map(BigInteger::from).collect();
        let sum: BigInteger = values.iter().sum();
        let product: BigInteger = values.into_iter().product();
        assert_eq!(sum, BigInteger::from(210));
        assert_eq!(product.to_string(), "2432902008176640000");
    }

    proptest!
    {
        #[test]
        fn owned_and_borrowed_operands_agree(a in big_integer(), b in big_integer())
        {
            let expected = &a * &b;
            assert_eq!(a.clone() * b.clone(), expected);
            assert_eq!(a.clone() * &b, expected);
            assert_eq!(&a * b.clone(), expected);
        }

        #[test]
        fn compound_assignment_leaves_copies_alone(
            a in big_integer(),
            b in big_integer(),
        )
        {
            let original = a.clone();
            let snapshot = to_reference(&original);

            let mut copy = original.clone();
            copy += &b;
            copy *= &b;
            copy ^= &b;
            copy <<= 5u32;
            copy >>= 3u32;
            copy.increment();
            if !b.is_zero() {
                copy %= &b;
            }
            assert_eq!(to_reference(&original), snapshot);

            // And the other way around.
            let mut original = original;
            let copy = original.clone();
            original -= &b;
            original.decrement();
            assert_eq!(to_reference(&copy), snapshot);
        }
    }
}
