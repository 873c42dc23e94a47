//! The integer type and the arithmetic engine behind it.
//!
//! Integers are stored as infinite two's-complement numbers.
//! The stored limbs are the least significant ones, and every limb
//! beyond them is the *extension limb*: all zeros for non-negative
//! integers and all ones for negative integers.
//! Addition, subtraction, bitwise operators, and comparison work
//! directly on this view, without splitting off the sign.
//! Multiplication and division work on magnitudes instead.

use cow_limbs::{Limb, LimbSequence};

mod additive;
mod bitwise;
mod compare;
mod convert;
mod display;
mod div;
mod mul;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod serde;
mod shift;

/// Unsigned integer wide enough to hold the product of two limbs
/// plus two more limbs, for carries and remainders.
type DoubleLimb = u64;

const LIMB_BITS: u32 = Limb::BITS;

/// Arbitrary-precision signed integer.
///
/// Cloning is cheap: limbs are shared between clones
/// until one of them is modified.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct BigInteger
{
    // INVARIANT: Normalized; the last limb is never the extension limb.
    //            Zero is represented as no limbs and non-negative.
    negative: bool,
    limbs: LimbSequence,
}

impl BigInteger
{
    /// The integer zero.
    pub const fn zero() -> Self
    {
        Self{negative: false, limbs: LimbSequence::new()}
    }

    /// The integer one.
    pub fn one() -> Self
    {
        Self::from(1u32)
    }

    /// The integer minus one.
    pub const fn minus_one() -> Self
    {
        Self{negative: true, limbs: LimbSequence::new()}
    }

    /// Create an integer from its two's-complement limbs
    /// and the sign that determines the extension limb.
    ///
    /// The limbs need not be normalized.
    pub fn from_limbs(negative: bool, limbs: impl Into<LimbSequence>) -> Self
    {
        let mut integer = Self{negative, limbs: limbs.into()};
        integer.normalize();
        integer
    }

    /// The stored two's-complement limbs, least significant first.
    ///
    /// Limbs beyond these are implicitly the extension limb:
    /// [`Limb::MAX`] if the integer is negative and zero otherwise.
    pub fn limbs(&self) -> &[Limb]
    {
        self.limbs.as_slice()
    }

    /// Whether the integer is zero.
    pub fn is_zero(&self) -> bool
    {
        !self.negative && self.limbs.is_empty()
    }

    /// Whether the integer is less than zero.
    pub fn is_negative(&self) -> bool
    {
        self.negative
    }

    /// -1, 0, or 1, depending on the sign of the integer.
    pub fn signum(&self) -> i32
    {
        if self.negative {
            -1
        } else if self.limbs.is_empty() {
            0
        } else {
            1
        }
    }

    /// The absolute value of the integer.
    pub fn abs(&self) -> Self
    {
        if self.negative { -self } else { self.clone() }
    }

    /// The integer itself; the unary plus operator.
    pub fn plus(&self) -> Self
    {
        self.clone()
    }

    fn len(&self) -> usize
    {
        self.limbs.len()
    }

    /// The limb that implicitly follows the stored limbs.
    fn extension(&self) -> Limb
    {
        if self.negative { Limb::MAX } else { 0 }
    }

    /// The limb at `index` of the infinite two's-complement view.
    fn limb(&self, index: usize) -> Limb
    {
        self.limbs.get(index).unwrap_or_else(|| self.extension())
    }

    /// Store at least `len` limbs, without changing the value.
    fn expand(&mut self, len: usize)
    {
        if self.len() < len {
            let extension = self.extension();
            self.limbs.resize(len, extension);
        }
    }

    /// Trim redundant high limbs.
    fn normalize(&mut self)
    {
        let extension = self.extension();
        let len = self.limbs.iter()
            .rposition(|&limb| limb != extension)
            .map_or(0, |i| i + 1);
        self.limbs.resize(len, extension);
    }
}

#[cfg(test)]
pub(crate) mod strategy
{
    use {
        super::*,
        num_bigint::BigInt,
        proptest::{
            collection::vec as pvec,
            prelude::{Just, Strategy, any},
            prop_oneof,
        },
    };

    /// Limbs biased towards the values that exercise carries,
    /// borrows, and trial digit corrections.
    pub fn limb() -> impl Strategy<Value=Limb>
    {
        prop_oneof![
            4 => any::<Limb>(),
            1 => Just(0),
            1 => Just(1),
            1 => Just(1 << 31),
            1 => Just(Limb::MAX),
        ]
    }

    /// Integers of up to `max_limbs` limbs.
    pub fn big_integer_up_to(max_limbs: usize)
        -> impl Strategy<Value=BigInteger>
    {
        (any::<bool>(), pvec(limb(), 0 ..= max_limbs))
            .prop_map(|(negative, limbs)| BigInteger::from_limbs(negative, limbs))
    }

    /// Integers of up to six limbs.
    pub fn big_integer() -> impl Strategy<Value=BigInteger>
    {
        big_integer_up_to(6)
    }

    /// Convert to the reference implementation,
    /// going through the two's-complement bytes.
    pub fn to_reference(integer: &BigInteger) -> BigInt
    {
        let bytes: Vec<u8> =
            integer.limbs().iter()
            .chain(Some(&integer.extension()))
            .flat_map(|limb| limb.to_le_bytes())
            .collect();
        BigInt::from_signed_bytes_le(&bytes)
    }
}
