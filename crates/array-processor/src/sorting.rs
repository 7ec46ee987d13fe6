//! Quadratic sorting helpers shared by several operations.
//!
//! Every helper works on a private copy, callers' slices are never reordered.

/// Return an ascending copy of `values` using a plain exchange sort.
pub fn sort_array(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            if sorted[i] > sorted[j] {
                sorted.swap(i, j);
            }
        }
    }
    sorted
}

/// Count how many distinct values `values` holds.
///
/// Sorts a copy and counts runs of equal adjacent values.
pub fn count_distinct(values: &[i32]) -> usize {
    let sorted = sort_array(values);
    let mut count = 0;
    let mut i = 0;
    while i < sorted.len() {
        while i + 1 < sorted.len() && sorted[i] == sorted[i + 1] {
            i += 1;
        }
        count += 1;
        i += 1;
    }
    count
}

/// True when `values` is non-decreasing.
pub fn is_sorted_ascending(values: &[i32]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_array_orders_ascending() {
        assert_eq!(sort_array(&[5, -1, 3, 3, 0]), vec![-1, 0, 3, 3, 5]);
    }

    #[test]
    fn sort_array_leaves_input_untouched() {
        let input = [3, 2, 1];
        let _ = sort_array(&input);
        assert_eq!(input, [3, 2, 1]);
    }

    #[test]
    fn count_distinct_counts_runs() {
        assert_eq!(count_distinct(&[1, 2, 2, 3, 1]), 3);
        assert_eq!(count_distinct(&[7, 7, 7]), 1);
        assert_eq!(count_distinct(&[]), 0);
    }

    #[test]
    fn ascending_check() {
        assert!(is_sorted_ascending(&[]));
        assert!(is_sorted_ascending(&[1, 1, 2]));
        assert!(!is_sorted_ascending(&[2, 1]));
    }
}
