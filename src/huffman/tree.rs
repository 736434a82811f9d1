use std::fmt;

use super::encoder::{self, SymbolEncoding};
use super::{
    describe_symbol, release_tree, BinarySearchInsertion, CandidateArray, MergeStrategy, Node,
    NodeKind, Symbol, SymbolFrequency,
};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildState {
    Building,
    Done,
}

/// Drains a candidate array down to a single root, one merge per step.
pub struct TreeBuilder<'a> {
    candidates: CandidateArray,
    strategy: &'a dyn MergeStrategy,
    merges: usize,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(
        symbol_frequencies: &[SymbolFrequency],
        strategy: &'a dyn MergeStrategy,
    ) -> Result<Self> {
        let candidates = CandidateArray::new(symbol_frequencies)?;
        log::debug!("Building tree from {} candidates", candidates.slot_count());
        Ok(Self {
            candidates,
            strategy,
            merges: 0,
        })
    }

    pub fn state(&self) -> BuildState {
        if self.candidates.live_len() > 1 {
            BuildState::Building
        } else {
            BuildState::Done
        }
    }

    pub fn candidates(&self) -> &CandidateArray {
        &self.candidates
    }

    pub fn merges(&self) -> usize {
        self.merges
    }

    pub fn step(&mut self) -> BuildState {
        if self.state() == BuildState::Building {
            self.strategy.merge_lowest_pair(&mut self.candidates);
            self.merges += 1;
        }
        self.state()
    }

    pub fn finish(mut self) -> HuffmanTree {
        while self.step() == BuildState::Building {}
        log::debug!("Tree complete after {} merges", self.merges);
        let root = self
            .candidates
            .into_root()
            .expect("a finished build leaves exactly one candidate");
        HuffmanTree { root }
    }
}

pub struct HuffmanTree {
    root: Box<Node>,
}

impl HuffmanTree {
    pub fn new(symbol_frequencies: &[SymbolFrequency]) -> Result<Self> {
        Self::with_strategy(symbol_frequencies, &BinarySearchInsertion)
    }

    pub fn with_strategy(
        symbol_frequencies: &[SymbolFrequency],
        strategy: &dyn MergeStrategy,
    ) -> Result<Self> {
        Ok(TreeBuilder::new(symbol_frequencies, strategy)?.finish())
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn weighted_path_length(&self) -> usize {
        self.root.weighted_path_length()
    }

    pub fn encode(&self, symbol: Symbol) -> Option<SymbolEncoding> {
        encoder::encode(&self.root, symbol)
    }

    /// Symbols of all leaves in ascending order.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols = Vec::with_capacity(self.leaf_count());
        let mut pending = vec![self.root()];
        while let Some(node) = pending.pop() {
            match node.kind() {
                NodeKind::Leaf { symbol } => symbols.push(*symbol),
                NodeKind::Internal { left, right } => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        symbols.sort_unstable();
        symbols
    }

    pub fn release(self) -> usize {
        release_tree(Some(self.root))
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn first_visible_column(line: &str) -> usize {
    line.chars().position(|c| c != ' ').unwrap_or(0)
}

fn center_column(line: &str) -> usize {
    (first_visible_column(line) * 2 + line.trim().chars().count()) / 2
}

// every line of a rendered subtree has the same width
fn render_lines(node: &Node) -> Vec<String> {
    match node.kind() {
        NodeKind::Leaf { symbol } => vec![format!(
            "(s:{},f:{})",
            describe_symbol(*symbol),
            node.weight()
        )],
        NodeKind::Internal { left, right } => {
            let left_box = render_lines(left);
            let right_box = render_lines(right);
            let left_width = left_box[0].chars().count();
            let right_width = right_box[0].chars().count();
            let left_pos = center_column(&left_box[0]);
            let right_pos = center_column(&right_box[0]);

            let mut result = Vec::with_capacity(3 + left_box.len().max(right_box.len()));
            result.push(format!(
                "{}•{}",
                SPACE.repeat(left_width),
                SPACE.repeat(right_width)
            ));
            result.push(format!(
                "{}║{}",
                SPACE.repeat(left_width),
                SPACE.repeat(right_width)
            ));
            result.push(format!(
                "{}╔{}╩{}╗{}",
                SPACE.repeat(left_pos),
                BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                SPACE.repeat(right_width - right_pos - 1)
            ));

            for i in 0..left_box.len().max(right_box.len()) {
                let left_str = left_box
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| SPACE.repeat(left_width));
                let right_str = right_box
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| SPACE.repeat(right_width));
                result.push(format!("{} {}", left_str, right_str));
            }
            result
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render_lines(&self.root) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
