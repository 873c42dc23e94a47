//! Arbitrary-precision signed integers.
//!
//! [`BigInteger`] behaves like a machine integer of unbounded width.
//! Values that fit in one limb are stored without heap allocation,
//! and cloning a larger value shares its limbs until either copy
//! is modified; see the `cow-limbs` crate for the storage layer.
//!
//! # Examples
//!
//! ```
//! use big_integer::BigInteger;
//! let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
//! let b = &a * &BigInteger::from(2);
//! assert_eq!(b.to_string(), "246913578024691357802469135780");
//! assert_eq!(-BigInteger::from(7) >> 1u32, BigInteger::from(-4));
//! ```

#![warn(missing_docs)]

pub use {
    self::{error::*, integer::*},
    cow_limbs::Limb,
};

mod error;
mod integer;
