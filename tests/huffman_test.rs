use heap_paths::coding::huffman::{total_encoded_bits, HuffmanNode, HuffmanTree};
use proptest::prelude::*;

#[test]
fn textbook_example() {
    let frequencies = [45, 13, 12, 16, 9, 5];
    let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();

    let bits: Vec<_> = tree
        .code_lengths()
        .iter()
        .map(|code_length| (code_length.symbol, code_length.bits))
        .collect();
    assert_eq!(bits, vec![(0, 1), (1, 3), (2, 3), (3, 3), (4, 4), (5, 4)]);
    assert_eq!(tree.total_bits(), 224);
    assert_eq!(tree.root().frequency(), 100);
}

#[test]
fn zero_frequencies_are_skipped() {
    let tree = HuffmanTree::from_frequencies(&[0, 3, 0, 1]).unwrap();
    let symbols: Vec<_> = tree.code_lengths().iter().map(|code_length| code_length.symbol).collect();
    assert_eq!(symbols, vec![1, 3]);
    assert_eq!(tree.total_bits(), 4);
}

#[test]
fn single_symbol_needs_one_bit() {
    assert_eq!(total_encoded_bits(&[0, 7]), 7);
}

#[test]
fn empty_alphabet() {
    assert!(HuffmanTree::from_frequencies(&[]).is_none());
    assert!(HuffmanTree::from_frequencies(&[0, 0]).is_none());
    assert_eq!(total_encoded_bits(&[0, 0]), 0);
}

proptest! {
    #[test]
    fn total_is_sum_of_internal_weights(frequencies in prop::collection::vec(1u64..1000, 2..60)) {
        let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();

        let internal_weights: u64 = tree
            .nodes()
            .iter()
            .filter(|node| matches!(node, HuffmanNode::Internal { .. }))
            .map(HuffmanNode::frequency)
            .sum();
        prop_assert_eq!(tree.total_bits(), internal_weights);

        // Kraft equality holds for the full binary tree.
        let max_bits = tree.code_lengths().iter().map(|code_length| code_length.bits).max().unwrap();
        let kraft: u128 = tree
            .code_lengths()
            .iter()
            .map(|code_length| 1u128 << (max_bits - code_length.bits))
            .sum();
        prop_assert_eq!(kraft, 1u128 << max_bits);
    }
}
