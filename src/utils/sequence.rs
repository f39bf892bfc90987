use std::collections::HashSet;
use std::hash::Hash;

/// Splits numbers into maximal runs of consecutive values.
///
/// A new run starts whenever a value is not exactly the previous value plus one.
/// Input order is kept; every input value lands in exactly one run.
pub fn split_by_gaps(numbers: &[u32]) -> Vec<Vec<u32>> {
    let mut runs: Vec<Vec<u32>> = Vec::new();

    for &number in numbers {
        match runs.last_mut() {
            Some(run) if run.last().and_then(|prev| prev.checked_add(1)) == Some(number) => {
                run.push(number);
            }
            _ => runs.push(vec![number]),
        }
    }

    runs
}

pub fn has_duplicates<T, K, F>(items: &[T], key: F) -> bool
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().any(|item| !seen.insert(key(item)))
}
