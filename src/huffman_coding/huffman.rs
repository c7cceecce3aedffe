use log::{debug, trace};

use super::code::Code;
use super::code_table::CodeTable;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// A code tree node. `seq` is the tie breaker: leaves get 0.. in ascending symbol order and
/// every merged node gets the next number after that.
#[derive(Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing sequence number, so the cheapest node
    /// sits at the end of a sorted vec where pop() finds it.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Build the Huffman tree for a frequency table by repeatedly merging the two cheapest nodes.
/// The node popped first becomes the left child.
pub fn build_tree(freqs: &FrequencyTable) -> Result<Node> {
    let mut tree: Vec<Node> = freqs
        .iter()
        .enumerate()
        .map(|(seq, (sym, weight))| Node::new(weight, seq as u32, NodeData::Leaf(sym)))
        .collect();
    let mut next_seq = tree.len() as u32;

    // ...then pare it down to one single node with child nodes - keep it sorted.
    while tree.len() > 1 {
        tree.sort_unstable();
        if let (Some(left_child), Some(right_child)) = (tree.pop(), tree.pop()) {
            tree.push(Node::new(
                left_child.weight + right_child.weight,
                next_seq,
                NodeData::Kids(Box::new(left_child), Box::new(right_child)),
            ));
            next_seq += 1;
        }
    }
    tree.pop().ok_or(HuffError::EmptyAlphabetInternal)
}

/// Walk the tree and record the path to every leaf: 0 for left, 1 for right.
pub fn code_table_from_tree(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    let mut stack: Vec<(&Node, Code)> = vec![(root, Code::new())];
    while let Some((node, code)) = stack.pop() {
        match &node.node_data {
            NodeData::Kids(left_child, right_child) => {
                stack.push((&**right_child, code.with(true)));
                stack.push((&**left_child, code.with(false)));
            }
            NodeData::Leaf(sym) => {
                table.insert(*sym, code);
            }
        }
    }
    table
}

/// Derive the code table for a non-empty frequency table.
pub fn build_code_table(freqs: &FrequencyTable) -> Result<CodeTable> {
    let symbols: Vec<(u8, u64)> = freqs.iter().collect();
    let table = match symbols.as_slice() {
        [] => return Err(HuffError::EmptyAlphabetInternal),
        // A lone leaf has no path, so give it a one bit code.
        [(sym, _)] => {
            let mut table = CodeTable::new();
            table.insert(*sym, Code::new().with(false));
            table
        }
        _ => code_table_from_tree(&build_tree(freqs)?),
    };

    debug!(
        "Built {} codes, longest is {} bits.",
        table.len(),
        table.max_code_len()
    );
    for (sym, code) in table.iter() {
        trace!("{:>3}: {}", sym, code);
    }
    Ok(table)
}
