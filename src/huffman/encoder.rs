use super::{Node, NodeKind, Symbol};

/// The code of one symbol as a string of '0' (left) and '1' (right)
/// edges from the root, together with the symbol's frequency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEncoding {
    symbol: Symbol,
    bits: String,
    frequency: usize,
}

impl SymbolEncoding {
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn length(&self) -> usize {
        self.bits.len()
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Bits this symbol occupies in the encoded text.
    pub fn encoded_bits(&self) -> usize {
        self.length() * self.frequency
    }
}

pub fn encode(root: &Node, target: Symbol) -> Option<SymbolEncoding> {
    let mut path = String::with_capacity(root.height());
    let leaf = find_encoding(root, target, &mut path)?;
    // edges were collected from the leaf upwards
    let bits: String = path.chars().rev().collect();
    Some(SymbolEncoding {
        symbol: target,
        bits,
        frequency: leaf.weight(),
    })
}

fn find_encoding<'a>(node: &'a Node, target: Symbol, path: &mut String) -> Option<&'a Node> {
    match node.kind() {
        NodeKind::Leaf { symbol } if *symbol == target => Some(node),
        NodeKind::Leaf { .. } => None,
        NodeKind::Internal { left, right } => {
            if let Some(leaf) = find_encoding(left, target, path) {
                path.push('0');
                return Some(leaf);
            }
            let leaf = find_encoding(right, target, path)?;
            path.push('1');
            Some(leaf)
        }
    }
}
