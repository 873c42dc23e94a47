//! Copy-on-write storage for the limbs of arbitrary-precision integers.
//!
//! A [`LimbSequence`] stores zero or one limbs inline and moves to a
//! reference-counted [`SharedLimbBlock`] once it holds more.
//! Cloning a sequence never copies limbs; the copy is deferred
//! until one of the sequences sharing a block is mutated.
//!
//! # Sharing
//!
//! Any number of sequences may point at the same block.
//! Every mutating method first makes sure the block is
//! uniquely owned by the sequence being mutated,
//! forking a private copy if it is not.
//! Hence mutating one sequence is never observable through another.
//!
//! Reference counts are not atomic, so sequences are neither
//! [`Send`] nor [`Sync`].

#![warn(missing_docs)]

pub use self::{block::*, sequence::*};

mod block;
mod sequence;

/// One word of a multi-word integer.
///
/// Sequences of limbs are little-endian: the limb at index zero
/// is the least significant one.
pub type Limb = u32;
