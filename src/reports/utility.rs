use std::collections::HashMap;
use std::hash::Hash;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Counts occurrences of each distinct value.
///
/// Sorted by descending count. Equal counts keep the order in which the
/// values were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value with its count; the smallest value wins a tie.
/// `None` for empty input.
pub fn most_common<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values)
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
}

/// Most frequent value; the smallest value wins a tie. `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    most_common(values).map(|(value, _)| value)
}
