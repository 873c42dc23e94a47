use {
    crate::{Limb, SharedLimbBlock},
    std::{
        fmt,
        hash::{Hash, Hasher},
        iter::FromIterator,
        ops::Index,
        rc::Rc,
        slice,
    },
    tracing::trace,
};

/// Copy-on-write sequence of limbs.
///
/// Sequences of at most one limb are stored inline.
/// Longer sequences point at a [`SharedLimbBlock`],
/// which cloning the sequence shares rather than copies.
#[derive(Clone, Default)]
pub struct LimbSequence
{
    inner: Inner,
}

#[derive(Clone, Default)]
enum Inner
{
    #[default]
    Empty,

    Inline(Limb),

    // INVARIANT: The block holds at least two limbs.
    Shared(Rc<SharedLimbBlock>),
}

impl LimbSequence
{
    /// Create an empty sequence.
    ///
    /// This does not allocate.
    pub const fn new() -> Self
    {
        Self{inner: Inner::Empty}
    }

    /// The number of limbs in the sequence.
    pub fn len(&self) -> usize
    {
        match &self.inner {
            Inner::Empty         => 0,
            Inner::Inline(_)     => 1,
            Inner::Shared(block) => block.len(),
        }
    }

    /// Whether the sequence holds no limbs.
    pub fn is_empty(&self) -> bool
    {
        matches!(self.inner, Inner::Empty)
    }

    /// Whether the sequence holds exactly one limb inline.
    pub fn is_inline(&self) -> bool
    {
        matches!(self.inner, Inner::Inline(_))
    }

    /// Whether the sequence points at a shared block.
    pub fn is_shared(&self) -> bool
    {
        matches!(self.inner, Inner::Shared(_))
    }

    /// The number of sequences pointing at the same block as this one.
    ///
    /// Returns [`None`] if the limbs are not stored in a block.
    pub fn ref_count(&self) -> Option<usize>
    {
        match &self.inner {
            Inner::Shared(block) => Some(SharedLimbBlock::ref_count(block)),
            _ => None,
        }
    }

    /// The limbs in the sequence.
    pub fn as_slice(&self) -> &[Limb]
    {
        match &self.inner {
            Inner::Empty         => &[],
            Inner::Inline(limb)  => slice::from_ref(limb),
            Inner::Shared(block) => block.limbs(),
        }
    }

    /// The limb at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Limb>
    {
        self.as_slice().get(index).copied()
    }

    /// The last limb, if any.
    pub fn back(&self) -> Option<Limb>
    {
        self.as_slice().last().copied()
    }

    /// Iterate over the limbs, least significant first.
    pub fn iter(&self) -> slice::Iter<Limb>
    {
        self.as_slice().iter()
    }

    /// Append a limb.
    ///
    /// The first limb is stored inline.
    /// The second limb moves both limbs into a new block.
    /// Further limbs are appended to the block,
    /// after forking it if it is shared.
    pub fn push(&mut self, limb: Limb)
    {
        match self.inner {
            Inner::Empty =>
                self.inner = Inner::Inline(limb),
            Inner::Inline(first) => {
                trace!(len = 2, ref_count = 1, "promoting inline limb to shared limb block");
                self.inner = Inner::Shared(SharedLimbBlock::new(vec![first, limb]));
            },
            Inner::Shared(ref mut block) =>
                SharedLimbBlock::make_unique(block).push(limb),
        }
    }

    /// Remove the last limb and return it.
    ///
    /// A sequence that drops to one limb lets go of its block
    /// and stores the remaining limb inline.
    /// Other sequences pointing at the block are unaffected.
    pub fn pop(&mut self) -> Option<Limb>
    {
        let block = match self.inner {
            Inner::Empty => return None,
            Inner::Inline(limb) => {
                self.inner = Inner::Empty;
                return Some(limb);
            },
            Inner::Shared(ref mut block) => block,
        };

        if block.len() <= 2 {
            trace!(
                len = block.len(),
                ref_count = SharedLimbBlock::ref_count(block),
                "demoting shared limb block to inline limb"
            );
            let limbs = block.limbs();
            let last = limbs.last().copied();
            self.inner = match *limbs {
                [first, _] => Inner::Inline(first),
                _          => Inner::Empty,
            };
            return last;
        }

        SharedLimbBlock::make_unique(block).pop()
    }

    /// Mutable access to the limb at `index`.
    ///
    /// This forks the block first if it is shared.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut Limb
    {
        &mut self.as_mut_slice()[index]
    }

    /// Mutable access to all limbs.
    ///
    /// This forks the block first if it is shared.
    pub fn as_mut_slice(&mut self) -> &mut [Limb]
    {
        match self.inner {
            Inner::Empty                 => &mut [],
            Inner::Inline(ref mut limb)  => slice::from_mut(limb),
            Inner::Shared(ref mut block) => SharedLimbBlock::make_unique(block),
        }
    }

    /// Grow the sequence with copies of `fill`, or truncate it.
    pub fn resize(&mut self, len: usize, fill: Limb)
    {
        if self.len() == len {
            return;
        }

        match len {
            0 => self.inner = Inner::Empty,
            1 => {
                let first = self.as_slice().first().copied().unwrap_or(fill);
                self.inner = Inner::Inline(first);
            },
            _ => {
                while self.len() < 2 {
                    self.push(fill);
                }
                if let Inner::Shared(ref mut block) = self.inner {
                    SharedLimbBlock::make_unique(block).resize(len, fill);
                }
            },
        }
    }
}

impl From<Vec<Limb>> for LimbSequence
{
    fn from(limbs: Vec<Limb>) -> Self
    {
        let inner = match limbs.len() {
            0 => Inner::Empty,
            1 => Inner::Inline(limbs[0]),
            _ => Inner::Shared(SharedLimbBlock::new(limbs)),
        };
        Self{inner}
    }
}

impl From<&[Limb]> for LimbSequence
{
    fn from(limbs: &[Limb]) -> Self
    {
        match *limbs {
            []     => Self::new(),
            [only] => Self{inner: Inner::Inline(only)},
            _      => Self::from(limbs.to_vec()),
        }
    }
}

impl FromIterator<Limb> for LimbSequence
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item=Limb>
    {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a LimbSequence
{
    type Item = &'a Limb;
    type IntoIter = slice::Iter<'a, Limb>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl Index<usize> for LimbSequence
{
    type Output = Limb;

    fn index(&self, index: usize) -> &Self::Output
    {
        &self.as_slice()[index]
    }
}

impl PartialEq for LimbSequence
{
    fn eq(&self, other: &Self) -> bool
    {
        if let (Inner::Shared(a), Inner::Shared(b)) = (&self.inner, &other.inner) {
            if Rc::ptr_eq(a, b) {
                return true;
            }
        }
        self.as_slice() == other.as_slice()
    }
}

impl Eq for LimbSequence
{
}

impl Hash for LimbSequence
{
    fn hash<H>(&self, state: &mut H)
        where H: Hasher
    {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for LimbSequence
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
