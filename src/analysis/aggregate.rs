use std::collections::BTreeMap;

/// A distinct value and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

fn tally<T: Ord, I: IntoIterator<Item = T>>(values: I) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0usize) += 1;
    }
    counts
}

/// Most frequent value, with its count.
///
/// Ties go to the smallest value, so the answer does not depend on row order.
///
/// # Examples
///
/// ```
/// use bikeshare_explorer::analysis::mode_with_count;
///
/// let m = mode_with_count(["b", "a", "b", "a", "c"]).unwrap();
/// assert_eq!((m.value, m.count), ("a", 2));
/// ```
pub fn mode_with_count<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<ValueCount<T>> {
    let mut best: Option<ValueCount<T>> = None;
    // ascending key order: only a strictly larger count replaces the current best
    for (value, count) in tally(values) {
        if best.as_ref().map_or(true, |b| count > b.count) {
            best = Some(ValueCount { value, count });
        }
    }
    best
}

/// Most frequent value. `None` for empty input.
pub fn mode<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    mode_with_count(values).map(|m| m.value)
}

/// Occurrence count of every distinct value, most frequent first; equal counts
/// are ordered by value.
pub fn value_counts<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Vec<ValueCount<T>> {
    let mut counts: Vec<ValueCount<T>> = tally(values)
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // stable sort keeps the ascending value order within equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_simple() {
        assert_eq!(mode([3, 1, 3, 2]), Some(3));
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(Vec::<u32>::new()), None);
        assert!(mode_with_count(Vec::<u32>::new()).is_none());
    }

    #[test]
    fn test_mode_tie_goes_to_smallest() {
        assert_eq!(mode([5, 2, 5, 2]), Some(2));
        assert_eq!(mode(["Wood St", "Clark St"]), Some("Clark St"));
    }

    #[test]
    fn test_mode_with_count() {
        let m = mode_with_count(vec![(1, 2), (1, 2), (3, 4)]).unwrap();
        assert_eq!(m.value, (1, 2));
        assert_eq!(m.count, 2);
    }

    #[test]
    fn test_value_counts_ordering() {
        let counts = value_counts(["Customer", "Subscriber", "Subscriber", "Dependent", "Customer", "Subscriber"]);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.value, c.count)).collect();
        assert_eq!(
            pairs,
            vec![("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_value_counts_ties_by_value() {
        let counts = value_counts(["Male", "Female"]);
        assert_eq!(counts[0].value, "Female");
        assert_eq!(counts[1].value, "Male");
    }

    #[test]
    fn test_value_counts_empty() {
        assert!(value_counts(Vec::<String>::new()).is_empty());
    }
}
