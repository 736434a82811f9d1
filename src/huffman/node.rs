use super::Symbol;

#[derive(Debug)]
pub enum NodeKind {
    Leaf { symbol: Symbol },
    Internal { left: Box<Node>, right: Box<Node> },
}

/// A tree node. Internal nodes own both children, so a node is released
/// exactly once, together with the parent that absorbed it.
#[derive(Debug)]
pub struct Node {
    weight: usize,
    kind: NodeKind,
}

impl Node {
    pub fn leaf(symbol: Symbol, weight: usize) -> Box<Node> {
        assert!(
            weight > 0,
            "symbol {} must have a non-zero weight to become a leaf",
            symbol
        );
        Box::new(Node {
            weight,
            kind: NodeKind::Leaf { symbol },
        })
    }

    pub fn internal(left: Box<Node>, right: Box<Node>) -> Box<Node> {
        Box::new(Node {
            weight: left.weight + right.weight,
            kind: NodeKind::Internal { left, right },
        })
    }

    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(&Node, &Node)> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left, right } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => 0,
            NodeKind::Internal { left, right } => left.height().max(right.height()) + 1,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => 1,
            NodeKind::Internal { left, right } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Sum of weight times depth over all leaves below this node.
    pub fn weighted_path_length(&self) -> usize {
        self.weighted_path_length_at(0)
    }

    fn weighted_path_length_at(&self, depth: usize) -> usize {
        match &self.kind {
            NodeKind::Leaf { .. } => self.weight * depth,
            NodeKind::Internal { left, right } => {
                left.weighted_path_length_at(depth + 1) + right.weighted_path_length_at(depth + 1)
            }
        }
    }
}

/// Tears down the tree below `root`, releasing every node once. Works on
/// an explicit stack, so degenerate chain-shaped trees do not exhaust the
/// call stack. An absent root is a no-op.
pub fn release_tree(root: Option<Box<Node>>) -> usize {
    let mut pending: Vec<Box<Node>> = root.into_iter().collect();
    let mut released = 0;
    while let Some(node) = pending.pop() {
        let Node { kind, .. } = *node;
        if let NodeKind::Internal { left, right } = kind {
            pending.push(left);
            pending.push(right);
        }
        released += 1;
    }
    released
}

#[cfg(test)]
mod test {
    use super::{release_tree, Node, NodeKind};

    fn create_chain(length: usize) -> Box<Node> {
        let mut root = Node::leaf(0, 1);
        for symbol in 1..length as u32 {
            root = Node::internal(Node::leaf(symbol, 1), root);
        }
        root
    }

    #[test]
    fn test_internal_weight_is_sum_of_children() {
        let node = Node::internal(Node::leaf(1, 5), Node::leaf(2, 9));
        assert_eq!(node.weight(), 14);
        assert_eq!(node.symbol(), None);
        let (left, right) = node.children().expect("internal node without children");
        assert_eq!(left.symbol(), Some(1));
        assert_eq!(right.symbol(), Some(2));
    }

    #[test]
    fn test_leaf_has_symbol_and_no_children() {
        let leaf = Node::leaf(65, 3);
        assert!(leaf.is_leaf());
        assert!(leaf.children().is_none());
        assert!(matches!(leaf.kind(), NodeKind::Leaf { symbol: 65 }));
    }

    #[test]
    #[should_panic]
    fn test_leaf_with_zero_weight() {
        let _ = Node::leaf(1, 0);
    }

    #[test]
    fn test_height_and_leaf_count() {
        let tree = create_chain(5);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(Node::leaf(1, 1).height(), 0);
    }

    #[test]
    fn test_weighted_path_length() {
        // depths: 1 at 1, 2 and 3 at 2
        let tree = Node::internal(
            Node::leaf(1, 10),
            Node::internal(Node::leaf(2, 3), Node::leaf(3, 4)),
        );
        assert_eq!(tree.weighted_path_length(), 10 + 2 * 3 + 2 * 4);
    }

    #[test]
    fn test_release_absent_root() {
        assert_eq!(release_tree(None), 0);
    }

    #[test]
    fn test_release_counts_every_node_once() {
        let tree = create_chain(4);
        assert_eq!(release_tree(Some(tree)), 7);
    }

    #[test]
    fn test_release_deep_chain() {
        let tree = create_chain(200_000);
        assert_eq!(release_tree(Some(tree)), 399_999);
    }
}
