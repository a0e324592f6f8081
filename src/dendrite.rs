//! Dendrites: weighted input lines, stored in a shared arena.
//!
//! A dendrite is read as an input by one neuron and written by another
//! neuron's axon. Both sides hold a [`DendriteId`] into the same
//! [`DendriteStore`] rather than a pointer, so writes go through a single
//! `&mut` borrow of the store.

use std::ops::Index;

/// Index of a dendrite inside a [`DendriteStore`].
///
/// A store holds at most `u32::MAX + 1` dendrites; adding past that panics,
/// the same way a `Vec` panics on capacity overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DendriteId(pub u32);

impl DendriteId {
    /// Id for slot `index`. Panics if `index` does not fit in a `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(i) => Self(i),
            Err(_) => panic!("dendrite id space exhausted at index {index}"),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A weighted input line. `value` is overwritten by propagation, `weight` is
/// fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dendrite {
    value: f64,
    weight: f64,
}

impl Dendrite {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Weighted contribution: `value * weight`.
    #[inline]
    pub fn output(&self) -> f64 {
        self.value * self.weight
    }
}

/// Arena owning every dendrite of a network.
#[derive(Clone, Debug, Default)]
pub struct DendriteStore {
    dendrites: Vec<Dendrite>,
}

impl DendriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            dendrites: Vec::with_capacity(n),
        }
    }

    /// Append a dendrite. Ids are handed out sequentially from 0.
    pub fn add(&mut self, dendrite: Dendrite) -> DendriteId {
        let id = DendriteId::from_index(self.dendrites.len());
        self.dendrites.push(dendrite);
        id
    }

    #[inline]
    pub fn get(&self, id: DendriteId) -> Option<&Dendrite> {
        self.dendrites.get(id.index())
    }

    /// Weighted output of `id`, or 0.0 when the id is not in this store.
    #[inline]
    pub fn output(&self, id: DendriteId) -> f64 {
        self.get(id).map_or(0.0, Dendrite::output)
    }

    /// Overwrite the value of `id`. Unknown ids are ignored.
    #[inline]
    pub fn set_value(&mut self, id: DendriteId, value: f64) {
        if let Some(d) = self.dendrites.get_mut(id.index()) {
            d.value = value;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dendrites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dendrites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DendriteId, &Dendrite)> {
        self.dendrites
            .iter()
            .enumerate()
            .map(|(i, d)| (DendriteId::from_index(i), d))
    }
}

impl Index<DendriteId> for DendriteStore {
    type Output = Dendrite;

    fn index(&self, id: DendriteId) -> &Dendrite {
        &self.dendrites[id.index()]
    }
}
