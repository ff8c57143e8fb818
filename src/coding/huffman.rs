use std::{cmp::Reverse, collections::BinaryHeap};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub type NodeIndex = usize;
pub type Symbol = usize;
pub type Frequency = u64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HuffmanNode {
    Leaf {
        symbol: Symbol,
        frequency: Frequency,
    },
    Internal {
        frequency: Frequency,
        left: NodeIndex,
        right: NodeIndex,
    },
}

impl HuffmanNode {
    pub fn frequency(&self) -> Frequency {
        match self {
            HuffmanNode::Leaf { frequency, .. } | HuffmanNode::Internal { frequency, .. } => {
                *frequency
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLength {
    pub symbol: Symbol,
    pub frequency: Frequency,
    pub bits: u32,
}

/// Huffman tree stored as an arena. Children are referenced by their index
/// into `nodes`, the root is the last node created.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root: NodeIndex,
}

impl HuffmanTree {
    /// Builds the tree over all symbols with a positive frequency. The symbol
    /// of a frequency is its index. Returns `None` if there is no such symbol.
    pub fn from_frequencies(frequencies: &[Frequency]) -> Option<HuffmanTree> {
        let mut nodes = Vec::new();
        let mut queue = BinaryHeap::new();

        for (symbol, &frequency) in frequencies.iter().enumerate() {
            if frequency > 0 {
                queue.push(Reverse((frequency, nodes.len())));
                nodes.push(HuffmanNode::Leaf { symbol, frequency });
            }
        }

        while queue.len() > 1 {
            let Reverse((left_frequency, left)) = queue.pop()?;
            let Reverse((right_frequency, right)) = queue.pop()?;

            let frequency = left_frequency + right_frequency;
            queue.push(Reverse((frequency, nodes.len())));
            nodes.push(HuffmanNode::Internal {
                frequency,
                left,
                right,
            });
        }

        let Reverse((_, root)) = queue.pop()?;
        debug!(number_of_nodes = nodes.len(), "built huffman tree");

        Some(HuffmanTree { nodes, root })
    }

    pub fn nodes(&self) -> &[HuffmanNode] {
        &self.nodes
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.nodes[self.root]
    }

    /// Code length of every symbol, sorted by symbol. A lone symbol still
    /// needs one bit.
    pub fn code_lengths(&self) -> Vec<CodeLength> {
        let mut code_lengths = Vec::new();
        let mut stack = vec![(self.root, 0u32)];

        while let Some((index, depth)) = stack.pop() {
            match self.nodes[index] {
                HuffmanNode::Leaf { symbol, frequency } => code_lengths.push(CodeLength {
                    symbol,
                    frequency,
                    bits: depth.max(1),
                }),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }

        code_lengths.sort_by_key(|code_length| code_length.symbol);
        code_lengths
    }

    /// Number of bits needed to encode every symbol occurrence.
    pub fn total_bits(&self) -> u64 {
        self.code_lengths()
            .iter()
            .map(|code_length| code_length.frequency * code_length.bits as u64)
            .sum()
    }
}

/// Total encoded length in bits, 0 if no symbol occurs.
pub fn total_encoded_bits(frequencies: &[Frequency]) -> u64 {
    HuffmanTree::from_frequencies(frequencies)
        .map(|tree| tree.total_bits())
        .unwrap_or(0)
}
