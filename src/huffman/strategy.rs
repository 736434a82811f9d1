use std::fmt;

use clap::{builder::PossibleValue, ValueEnum};

use super::CandidateArray;

/// One merge step: combine the two lightest candidates and leave the
/// unconsumed suffix sorted again.
pub trait MergeStrategy {
    fn merge_lowest_pair(&self, candidates: &mut CandidateArray);
}

/// Binary search for the parent's slot, then one bulk shift.
pub struct BinarySearchInsertion;

impl MergeStrategy for BinarySearchInsertion {
    fn merge_lowest_pair(&self, candidates: &mut CandidateArray) {
        let key = candidates.lowest_pair_weight();
        let insertion_point = candidates.find_insertion_point(key, candidates.start());
        candidates.remove_two_insert_one(insertion_point);
    }
}

/// Re-sorts the complete suffix after every merge.
pub struct FullResort;

impl MergeStrategy for FullResort {
    fn merge_lowest_pair(&self, candidates: &mut CandidateArray) {
        candidates.merge_front_pair();
        candidates.sort_suffix();
    }
}

/// Walks the parent towards the back one swap at a time.
pub struct InsertionSort;

impl MergeStrategy for InsertionSort {
    fn merge_lowest_pair(&self, candidates: &mut CandidateArray) {
        candidates.merge_front_pair();
        candidates.sift_front();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergeStrategyKind {
    #[default]
    BinarySearch,
    Resort,
    InsertionSort,
}

impl MergeStrategyKind {
    pub const ALL: [MergeStrategyKind; 3] = [Self::BinarySearch, Self::Resort, Self::InsertionSort];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BinarySearch => "binary-search",
            Self::Resort => "resort",
            Self::InsertionSort => "insertion-sort",
        }
    }
}

impl MergeStrategy for MergeStrategyKind {
    fn merge_lowest_pair(&self, candidates: &mut CandidateArray) {
        match self {
            Self::BinarySearch => BinarySearchInsertion.merge_lowest_pair(candidates),
            Self::Resort => FullResort.merge_lowest_pair(candidates),
            Self::InsertionSort => InsertionSort.merge_lowest_pair(candidates),
        }
    }
}

impl ValueEnum for MergeStrategyKind {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()))
    }
}

impl fmt::Display for MergeStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::{BinarySearchInsertion, FullResort, InsertionSort, MergeStrategy};
    use crate::huffman::{CandidateArray, SymbolFrequency};

    const SYMBOLS_AND_FREQUENCIES: &[(u32, usize); 9] = &[
        (1, 17),
        (2, 3),
        (3, 12),
        (4, 3),
        (5, 18),
        (6, 12),
        (7, 13),
        (8, 1),
        (9, 6),
    ];

    fn assert_suffix_stays_sorted(strategy: &dyn MergeStrategy) {
        let symbol_frequencies = SYMBOLS_AND_FREQUENCIES.map(SymbolFrequency::from);
        let mut candidates =
            CandidateArray::new(&symbol_frequencies).expect("candidate creation failed");
        let total: usize = SYMBOLS_AND_FREQUENCIES.iter().map(|sf| sf.1).sum();
        let mut step = 0;
        while candidates.live_len() > 1 {
            strategy.merge_lowest_pair(&mut candidates);
            step += 1;
            assert!(
                candidates.is_suffix_sorted(),
                "Suffix not sorted after merge step {}",
                step
            );
            assert_eq!(candidates.suffix_weights().sum::<usize>(), total);
        }
        assert_eq!(step, SYMBOLS_AND_FREQUENCIES.len() - 1);
    }

    #[test]
    fn test_binary_search_insertion_keeps_suffix_sorted() {
        assert_suffix_stays_sorted(&BinarySearchInsertion);
    }

    #[test]
    fn test_full_resort_keeps_suffix_sorted() {
        assert_suffix_stays_sorted(&FullResort);
    }

    #[test]
    fn test_insertion_sort_keeps_suffix_sorted() {
        assert_suffix_stays_sorted(&InsertionSort);
    }

    #[test]
    fn test_binary_search_places_parent_after_equal_match() {
        // 1 + 2 = 3 matches the leaf of weight 3, which moves in front
        let symbol_frequencies = [(1, 1), (2, 2), (3, 3), (4, 7)].map(SymbolFrequency::from);
        let mut candidates =
            CandidateArray::new(&symbol_frequencies).expect("candidate creation failed");
        BinarySearchInsertion.merge_lowest_pair(&mut candidates);
        let leaf = candidates.node_at(1).expect("slot 1 consumed");
        assert_eq!(leaf.weight(), 3);
        assert_eq!(leaf.symbol(), Some(3), "The equally heavy leaf must stay in front");
        let parent = candidates.node_at(2).expect("slot 2 consumed");
        assert_eq!(parent.weight(), 3);
        assert!(!parent.is_leaf(), "The merged node must follow the leaf");
        assert_eq!(candidates.weight_at(3), Some(7));
    }
}
