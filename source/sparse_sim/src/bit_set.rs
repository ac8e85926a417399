// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::index_set::IndexSet;

const WORD_BITS: usize = u64::BITS as usize;

/// A dense set of generator indexes packed into words, used for the
/// per-generator phase flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        BitSet {
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    fn locate(index: usize) -> (usize, u64) {
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    fn word_mut(&mut self, word: usize) -> &mut u64 {
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        &mut self.words[word]
    }

    pub fn assign(&mut self, index: usize, value: bool) {
        let (word, mask) = Self::locate(index);
        let word = self.word_mut(word);
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    pub fn insert(&mut self, index: usize) {
        self.assign(index, true);
    }

    pub fn remove(&mut self, index: usize) {
        self.assign(index, false);
    }

    /// Flips `index`, returning whether it is now set.
    pub fn toggle(&mut self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        let word = self.word_mut(word);
        *word ^= mask;
        *word & mask != 0
    }

    pub fn toggle_all(&mut self, indexes: &IndexSet) {
        for index in indexes.iter() {
            self.toggle(index);
        }
    }

    /// Number of members of `indexes` that are set.
    #[must_use]
    pub fn count_in(&self, indexes: &IndexSet) -> usize {
        indexes.iter().filter(|&index| self.contains(index)).count()
    }

    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(position, &word)| {
            (0..WORD_BITS)
                .filter(move |bit| word & (1 << bit) != 0)
                .map(move |bit| position * WORD_BITS + bit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BitSet;
    use crate::index_set::IndexSet;

    #[test]
    fn toggle_and_count_across_words() {
        let mut bits = BitSet::with_capacity(10);
        bits.insert(3);
        bits.toggle_all(&IndexSet::from([3, 70, 130]));
        assert!(!bits.contains(3));
        assert!(bits.contains(70));
        assert!(bits.contains(130));
        assert_eq!(bits.count_in(&IndexSet::from([1, 70, 130])), 2);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![70, 130]);
        assert_eq!(bits.len(), 2);
        bits.clear();
        assert!(bits.is_empty());
    }
}
