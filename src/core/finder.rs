use crate::core::PairResult;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Finds the first pair of positions in `sequence` whose values sum to `target`.
///
/// Single left-to-right scan keeping the first index seen for every value.
/// A match is reported as soon as the current value's complement has already
/// been seen, so the earliest completing pair wins. When `target - v` does not
/// fit in `i32` no element can equal it and the scan moves on, which keeps the
/// answer exact at the edges of the integer range.
pub fn find_pair(sequence: &[i32], target: i32) -> PairResult {
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(sequence.len());

    for (index, &value) in sequence.iter().enumerate() {
        if let Some(need) = target.checked_sub(value) {
            if let Some(&first) = seen.get(&need) {
                tracing::debug!(first, second = index, need, "complement found");
                return PairResult::Found {
                    first,
                    second: index,
                };
            }
        }

        // Later duplicates never replace the first occurrence.
        if let Entry::Vacant(slot) = seen.entry(value) {
            slot.insert(index);
        }
    }

    tracing::debug!(sum = target, scanned = sequence.len(), "no complement found");
    PairResult::NotFound
}
