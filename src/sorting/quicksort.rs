use rand::{rngs::StdRng, Rng, SeedableRng};

/// Sorts `values` in place with randomized quicksort and Hoare partitioning.
///
/// Recurses into the smaller part and loops on the larger one, so the stack
/// depth stays logarithmic even for unlucky pivots.
pub fn quicksort<T: Ord + Clone, R: Rng + ?Sized>(mut values: &mut [T], rng: &mut R) {
    while values.len() > 1 {
        let split = hoare_partition(values, rng);
        let (left, right) = std::mem::take(&mut values).split_at_mut(split + 1);

        if left.len() < right.len() {
            quicksort(left, rng);
            values = right;
        } else {
            quicksort(right, rng);
            values = left;
        }
    }
}

/// Reproducible variant of [`quicksort`].
pub fn quicksort_seeded<T: Ord + Clone>(values: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    quicksort(values, &mut rng);
}

/// Partitions around a random pivot and returns `j` such that every element
/// of `values[..=j]` is at most the pivot and every element of
/// `values[j + 1..]` is at least the pivot.
///
/// `values` must hold at least two elements. The returned `j` is always
/// smaller than `values.len() - 1`, so both parts are non-empty.
pub fn hoare_partition<T: Ord + Clone, R: Rng + ?Sized>(values: &mut [T], rng: &mut R) -> usize {
    debug_assert!(values.len() > 1);

    // The pivot must not end up in the last slot, otherwise the split can be
    // the whole range.
    let pivot_index = rng.gen_range(0..values.len());
    values.swap(0, pivot_index);
    let pivot = values[0].clone();

    let mut i = 0;
    let mut j = values.len() - 1;
    loop {
        while values[i] < pivot {
            i += 1;
        }
        while values[j] > pivot {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        values.swap(i, j);
        i += 1;
        j -= 1;
    }
}
