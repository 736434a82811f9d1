use std::cmp::Ordering;

use super::{Node, SymbolFrequency};
use crate::{error::Error, Result};

/// Weight-ordered nodes still eligible for merging.
///
/// Slots before `start` have been consumed by earlier merges and are
/// empty; the suffix from `start` on is contiguous and sorted ascending
/// by weight after every merge.
#[derive(Debug)]
pub struct CandidateArray {
    slots: Vec<Option<Box<Node>>>,
    start: usize,
}

impl CandidateArray {
    /// Creates one leaf per symbol with a non-zero frequency, stably sorted
    /// by frequency, so equal weights keep their enumeration order.
    pub fn new(symbol_frequencies: &[SymbolFrequency]) -> Result<Self> {
        let mut present: Vec<SymbolFrequency> = symbol_frequencies
            .iter()
            .copied()
            .filter(|sf| sf.frequency > 0)
            .collect();
        if present.len() < 2 {
            return Err(Error::TooFewSymbols(present.len()));
        }
        present.sort_by_key(|sf| sf.frequency);

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(present.len())
            .map_err(|e| Error::UnableToAllocateCandidates(present.len(), e))?;
        slots.extend(
            present
                .into_iter()
                .map(|sf| Some(Node::leaf(sf.symbol, sf.frequency))),
        );
        Ok(Self { slots, start: 0 })
    }

    /// Number of slots, consumed ones included. See `live_len` for the
    /// candidates still eligible for merging.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// First slot of the unconsumed suffix.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn live_len(&self) -> usize {
        self.slots.len() - self.start
    }

    pub fn weight_at(&self, index: usize) -> Option<usize> {
        self.node_at(index).map(Node::weight)
    }

    /// Node held by `index`, `None` once the slot has been consumed.
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.slots.get(index)?.as_deref()
    }

    pub fn suffix_weights(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots[self.start..]
            .iter()
            .map(|slot| slot.as_deref().map_or(0, Node::weight))
    }

    pub fn is_suffix_sorted(&self) -> bool {
        let suffix = &self.slots[self.start..];
        suffix.iter().all(Option::is_some)
            && suffix
                .windows(2)
                .all(|pair| Self::weight_of(&pair[0]) <= Self::weight_of(&pair[1]))
    }

    /// Combined weight of the two lightest candidates.
    pub fn lowest_pair_weight(&self) -> usize {
        self.live_weight(self.start) + self.live_weight(self.start + 1)
    }

    /// Binary search for `key` over the sorted suffix beginning at
    /// `search_start`. An exact weight match returns its index; otherwise
    /// the index just below the first heavier candidate is returned, which
    /// is where a new node of weight `key` belongs once the consumed pair
    /// has been shifted out. `key` must not be lighter than the candidate
    /// at `search_start`.
    pub fn find_insertion_point(&self, key: usize, search_start: usize) -> usize {
        debug_assert!(
            key >= self.live_weight(search_start),
            "key {} is lighter than the candidate at {}",
            key,
            search_start
        );
        let mut low = search_start;
        // exclusive upper bracket, mid is computed as for an inclusive one
        let mut high = self.slots.len();
        while low < high {
            let mid = (low + high - 1) / 2;
            match key.cmp(&self.live_weight(mid)) {
                Ordering::Greater => low = mid + 1,
                Ordering::Less => high = mid,
                Ordering::Equal => return mid,
            }
        }
        low.saturating_sub(1)
    }

    /// Merges the two front candidates into a parent, empties their slots
    /// and places the parent at `at`. Candidates between the consumed pair
    /// and `at` move one slot towards the front in a single rotation.
    pub fn remove_two_insert_one(&mut self, at: usize) {
        let first = self.start;
        let second = first + 1;
        assert!(
            self.live_len() >= 2,
            "at least two candidates are required for a merge"
        );
        assert!(
            (second..self.slots.len()).contains(&at),
            "insertion point {} outside of the remaining suffix {}..{}",
            at,
            second,
            self.slots.len()
        );

        let left = self.take(first);
        let right = self.take(second);
        let parent = Node::internal(left, right);

        if at > second {
            self.slots[second..=at].rotate_left(1);
        }
        self.slots[at] = Some(parent);
        self.start += 1;
    }

    /// Merges the two front candidates and leaves the parent at the front
    /// of the suffix, without restoring order.
    pub fn merge_front_pair(&mut self) {
        self.remove_two_insert_one(self.start + 1);
    }

    /// Stable re-sort of the whole unconsumed suffix.
    pub fn sort_suffix(&mut self) {
        let start = self.start;
        self.slots[start..].sort_by_key(Self::weight_of);
    }

    /// Moves the front candidate past every strictly lighter successor.
    pub fn sift_front(&mut self) {
        let mut index = self.start;
        while index + 1 < self.slots.len()
            && self.live_weight(index) > self.live_weight(index + 1)
        {
            self.slots.swap(index, index + 1);
            index += 1;
        }
    }

    /// Hands out the root once a single candidate is left.
    pub fn into_root(mut self) -> Option<Box<Node>> {
        if self.live_len() == 1 {
            self.slots.pop().flatten()
        } else {
            None
        }
    }

    fn take(&mut self, index: usize) -> Box<Node> {
        self.slots[index]
            .take()
            .expect("consumed slot inside the unconsumed suffix")
    }

    fn live_weight(&self, index: usize) -> usize {
        self.slots[index]
            .as_deref()
            .map(Node::weight)
            .expect("consumed slot inside the unconsumed suffix")
    }

    fn weight_of(slot: &Option<Box<Node>>) -> usize {
        slot.as_deref().map_or(0, Node::weight)
    }
}
