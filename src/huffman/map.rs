use crate::huffman::{EncodingTree, Symbol, TreeNode};

/// Per-symbol bit codes derived from root-to-leaf paths.
///
/// '0' descends left, '1' descends right. Codes are prefix-free by
/// construction: every symbol sits at a distinct leaf of a strict binary
/// tree.
#[derive(Clone, Debug)]
pub struct EncodingMap {
    /// Dense-indexed by `Symbol::index`
    codes: Vec<Option<String>>,
}

impl EncodingMap {
    /// Derive one code per leaf via a depth-first walk.
    ///
    /// A root that is itself a leaf still gets the non-empty code "0": an
    /// empty code cannot be decoded, and the decoder consumes one bit per
    /// symbol on such a tree to match.
    pub fn from_tree(tree: &EncodingTree) -> Self {
        let mut codes = vec![None; Symbol::COUNT];
        match tree.root() {
            TreeNode::Leaf { symbol, .. } => codes[symbol.index()] = Some("0".to_string()),
            root => collect(root, String::new(), &mut codes),
        }
        Self { codes }
    }

    /// Code for `symbol`, or `None` when it has no leaf in the tree
    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.codes[symbol.index()].as_deref()
    }

    /// Number of symbols with a code
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Iterate (symbol, code) pairs in ascending symbol order
    pub fn entries(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(index, code)| {
                code.as_deref().map(|c| (Symbol::from_index(index).unwrap(), c))
            })
    }
}

fn collect(node: &TreeNode, path: String, codes: &mut [Option<String>]) {
    match node {
        TreeNode::Leaf { symbol, .. } => codes[symbol.index()] = Some(path),
        TreeNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push('0');
            collect(left, left_path, codes);

            let mut right_path = path;
            right_path.push('1');
            collect(right, right_path, codes);
        }
    }
}
