//! Small iteration helpers.

/// Cyclic consecutive pairs: `[a, b, c]` → `(a, b), (b, c), (c, a)`.
///
/// Fewer than two items yield nothing; two items yield both orientations.
pub fn adjacent_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    let n = if items.len() < 2 { 0 } else { items.len() };
    (0..n).map(move |i| (&items[i], &items[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::adjacent_pairs;

    fn pairs(items: &[i32]) -> Vec<(i32, i32)> {
        adjacent_pairs(items).map(|(a, b)| (*a, *b)).collect()
    }

    #[test]
    fn adjacent_pairs_cases() {
        assert_eq!(pairs(&[]), vec![]);
        assert_eq!(pairs(&[1]), vec![]);
        assert_eq!(pairs(&[2, 5]), vec![(2, 5), (5, 2)]);
        assert_eq!(pairs(&[2, 7, 9]), vec![(2, 7), (7, 9), (9, 2)]);
    }
}
