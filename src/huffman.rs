pub mod candidates;
pub mod encoder;
pub mod node;
pub mod strategy;
pub mod tree;

pub use candidates::CandidateArray;
pub use encoder::SymbolEncoding;
pub use node::{release_tree, Node, NodeKind};
pub use strategy::{
    BinarySearchInsertion, FullResort, InsertionSort, MergeStrategy, MergeStrategyKind,
};
pub use tree::{BuildState, HuffmanTree, TreeBuilder};

pub type Symbol = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

/// Printable ASCII symbols are quoted, everything else is shown as a
/// zero-padded decimal code.
pub fn describe_symbol(symbol: Symbol) -> String {
    match char::from_u32(symbol) {
        Some(c) if c.is_ascii_graphic() || c == ' ' => format!("'{}'", c),
        _ => format!("{:03}", symbol),
    }
}

#[cfg(test)]
mod test {
    use super::{describe_symbol, SymbolFrequency};

    #[test]
    fn test_describe_printable_symbol() {
        assert_eq!(describe_symbol('e' as u32), "'e'");
        assert_eq!(describe_symbol(' ' as u32), "' '");
    }

    #[test]
    fn test_describe_control_symbol() {
        assert_eq!(describe_symbol('\n' as u32), "010");
        assert_eq!(describe_symbol(200), "200");
    }

    #[test]
    fn test_symbol_frequency_from_tuple() {
        let actual = SymbolFrequency::from(('x' as u32, 7));
        assert_eq!(actual, SymbolFrequency::new(120, 7));
    }
}
