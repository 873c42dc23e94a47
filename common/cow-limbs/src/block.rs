use {crate::Limb, std::rc::Rc, tracing::trace};

/// Heap-allocated limbs shared between sequences.
///
/// Blocks are always handled through [`Rc`].
/// The strong count of the [`Rc`] is the number of sequences
/// that currently point at the block; the block is freed
/// when the last of them lets go of it.
#[derive(Clone)]
pub struct SharedLimbBlock
{
    limbs: Vec<Limb>,
}

impl SharedLimbBlock
{
    /// Move limbs into a new block with a reference count of one.
    pub fn new(limbs: Vec<Limb>) -> Rc<Self>
    {
        Rc::new(Self{limbs})
    }

    /// The limbs in the block.
    pub fn limbs(&self) -> &[Limb]
    {
        &self.limbs
    }

    /// The number of limbs in the block.
    pub fn len(&self) -> usize
    {
        self.limbs.len()
    }

    /// Whether the block holds no limbs.
    pub fn is_empty(&self) -> bool
    {
        self.limbs.is_empty()
    }

    /// The number of owners of the block.
    pub fn ref_count(this: &Rc<Self>) -> usize
    {
        Rc::strong_count(this)
    }

    /// Whether the caller is the only owner of the block.
    pub fn is_unique(this: &Rc<Self>) -> bool
    {
        Self::ref_count(this) == 1
    }

    /// Obtain mutable access to the limbs of the block.
    ///
    /// If the block has other owners, its limbs are first copied
    /// into a new block owned only by `this`, and `this` lets go
    /// of the old block. The copy is complete before `this` is
    /// updated, so a failed allocation leaves `this` untouched.
    pub fn make_unique(this: &mut Rc<Self>) -> &mut Vec<Limb>
    {
        if !Self::is_unique(this) {
            trace!(
                len = this.len(),
                ref_count = Self::ref_count(this),
                "forking shared limb block"
            );
        }
        &mut Rc::make_mut(this).limbs
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn new_block_is_unique()
    {
        let block = SharedLimbBlock::new(vec![1, 2, 3]);
        assert!(SharedLimbBlock::is_unique(&block));
        assert_eq!(block.limbs(), [1, 2, 3]);
    }

    #[test]
    fn make_unique_in_place_when_unique()
    {
        let mut block = SharedLimbBlock::new(vec![1, 2]);
        let before = Rc::as_ptr(&block);
        SharedLimbBlock::make_unique(&mut block).push(3);
        assert_eq!(Rc::as_ptr(&block), before);
        assert_eq!(block.limbs(), [1, 2, 3]);
    }

    #[test]
    fn make_unique_forks_when_shared()
    {
        let mut block = SharedLimbBlock::new(vec![1, 2]);
        let other = Rc::clone(&block);
        assert_eq!(SharedLimbBlock::ref_count(&block), 2);

        SharedLimbBlock::make_unique(&mut block)[0] = 7;

        assert!(!Rc::ptr_eq(&block, &other));
        assert_eq!(SharedLimbBlock::ref_count(&block), 1);
        assert_eq!(SharedLimbBlock::ref_count(&other), 1);
        assert_eq!(block.limbs(), [7, 2]);
        assert_eq!(other.limbs(), [1, 2]);
    }
}
