// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use sorted_iter::{SortedIterator, assume::AssumeSortedByItemExt};
use sorted_vec::SortedSet;

/// A sorted set of indexes. Used for both qubit sets and generator sets.
#[must_use]
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct IndexSet {
    indexes: SortedSet<usize>,
}

impl IndexSet {
    pub fn new() -> IndexSet {
        IndexSet {
            indexes: SortedSet::new(),
        }
    }

    pub fn singleton(value: usize) -> Self {
        let mut indexes = SortedSet::new();
        indexes.push(value);
        IndexSet { indexes }
    }

    fn from_sorted_iter(items: impl SortedIterator<Item = usize>) -> Self {
        let indexes: Vec<usize> = items.collect();
        IndexSet {
            indexes: indexes.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indexes.binary_search(&index).is_ok()
    }

    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.indexes.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.indexes.last().copied()
    }

    /// Returns `true` if the index was not already present.
    pub fn insert(&mut self, index: usize) -> bool {
        self.indexes.find_or_insert(index).is_inserted()
    }

    /// Returns `true` if the index was present.
    pub fn remove(&mut self, index: usize) -> bool {
        self.indexes.remove_item(&index).is_some()
    }

    /// Flips membership of `index`, returning whether it is now present.
    pub fn toggle(&mut self, index: usize) -> bool {
        let found = self.indexes.find_or_insert(index);
        if found.is_found() {
            self.indexes.remove_index(found.index());
            false
        } else {
            true
        }
    }

    pub fn clear(&mut self) {
        self.indexes.clear();
    }

    pub fn iter(&self) -> impl SortedIterator<Item = usize> + '_ {
        self.indexes.iter().copied().assume_sorted_by_item()
    }

    /// In-place symmetric difference.
    pub fn xor_assign(&mut self, other: &IndexSet) {
        if other.len() == 1 {
            for index in other.iter() {
                self.toggle(index);
            }
            return;
        }
        *self = self.symmetric_difference(other);
    }

    pub fn symmetric_difference(&self, other: &IndexSet) -> IndexSet {
        Self::from_sorted_iter(self.iter().symmetric_difference(other.iter()))
    }

    pub fn intersection(&self, other: &IndexSet) -> IndexSet {
        Self::from_sorted_iter(self.iter().intersection(other.iter()))
    }

    pub fn union(&self, other: &IndexSet) -> IndexSet {
        Self::from_sorted_iter(self.iter().union(other.iter()))
    }

    pub fn difference(&self, other: &IndexSet) -> IndexSet {
        Self::from_sorted_iter(self.iter().difference(other.iter()))
    }

    #[must_use]
    pub fn intersection_count(&self, other: &IndexSet) -> usize {
        self.iter().intersection(other.iter()).count()
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &IndexSet) -> bool {
        self.iter().intersection(other.iter()).next().is_none()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl Default for IndexSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<Iterator: IntoIterator<Item = usize>>(iterator: Iterator) -> Self {
        let indexes = SortedSet::from_unsorted(iterator.into_iter().collect());
        IndexSet { indexes }
    }
}

impl IntoIterator for IndexSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.indexes.into_vec().into_iter()
    }
}

impl<const N: usize> From<[usize; N]> for IndexSet {
    fn from(value: [usize; N]) -> Self {
        value.into_iter().collect()
    }
}
