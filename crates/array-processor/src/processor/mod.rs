//! The `ArrayProcessor` contract and the argument checks shared by every
//! implementation.
use std::borrow::Cow;

use crate::error::{ArrayError, Result};
use crate::math::Array2;
use crate::sorting::is_sorted_ascending;

pub mod factory;
pub mod iter;
pub mod loops;

pub use iter::IterProcessor;
pub use loops::LoopProcessor;

/// Stateless array and matrix operations.
///
/// Implementations never mutate their inputs. Callers own every returned
/// collection, except that `filter` may hand back the input slice itself.
pub trait ArrayProcessor: Send + Sync {
    /// True if no element is divisible by 10.
    fn none_match(&self, input: &[i32]) -> bool;

    /// True if at least one element satisfies `predicate`. Stops at the first match.
    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool;

    /// True if every token, once converted by `mapper`, satisfies `predicate`.
    /// Stops at the first failure.
    fn all_match(
        &self,
        input: &[&str],
        mapper: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool;

    /// Copy the half-open range `[start_inclusive, end_exclusive)` into a new vector.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the range is empty, reversed or runs past the input.
    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: usize,
        end_exclusive: usize,
    ) -> Result<Vec<i32>>;

    /// Double the values at even positions and negate the values at odd positions.
    fn replace(&self, input: &[i32]) -> Vec<i32>;

    /// Second largest distinct value.
    ///
    /// When every element equals the maximum, or the input has a single
    /// element, the maximum itself is returned. `None` only for an empty input.
    fn find_second_max(&self, input: &[i32]) -> Option<i32>;

    /// Negative values first, then non-negative ones, each group in reverse input order.
    fn rearrange(&self, input: &[i32]) -> Vec<i32>;

    /// Drop values according to the configured `FilterMode`.
    fn filter<'a>(&self, input: &'a [i32]) -> Cow<'a, [i32]>;

    /// Insert `values` into `input` so the first inserted value lands at `start_inclusive`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `start_inclusive` is past the end of `input`.
    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: usize,
        values: &[i32],
    ) -> Result<Vec<i32>>;

    /// Merge two ascending inputs into one ascending vector.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when either input is not sorted ascending.
    fn merge_sorted_arrays(&self, first: &[i32], second: &[i32]) -> Result<Vec<i32>>;

    /// Check that `left * right` is defined.
    ///
    /// # Errors
    ///
    /// * `MissingData` when a matrix has no rows or an empty first row.
    /// * `InvalidArgument` when a matrix is ragged or the left column count
    ///   differs from the right row count.
    fn validate_for_matrix_multiplication(
        &self,
        left: &[Vec<i32>],
        right: &[Vec<i32>],
    ) -> Result<()> {
        validate_matrices(left, right)
    }

    /// Matrix product `left * right`. Dimensions are validated first.
    fn matrix_multiplication(&self, left: &[Vec<i32>], right: &[Vec<i32>])
        -> Result<Array2<i32>>;

    /// Each distinct value once, in order of first occurrence.
    fn distinct(&self, input: &[i32]) -> Vec<i32>;

    /// Human readable name of the implementation.
    fn name(&self) -> &str {
        "array-processor"
    }
}

pub(crate) fn check_copy_range(len: usize, start_inclusive: usize, end_exclusive: usize) -> Result<()> {
    if end_exclusive <= start_inclusive {
        return Err(ArrayError::invalid(format!(
            "end index {} must be greater than start index {}",
            end_exclusive, start_inclusive
        )));
    }
    if end_exclusive > len {
        return Err(ArrayError::invalid(format!(
            "end index {} is out of bounds for length {}",
            end_exclusive, len
        )));
    }
    Ok(())
}

pub(crate) fn check_insert_index(len: usize, start_inclusive: usize) -> Result<()> {
    if start_inclusive > len {
        return Err(ArrayError::invalid(format!(
            "insert index {} is out of bounds for length {}",
            start_inclusive, len
        )));
    }
    Ok(())
}

pub(crate) fn check_merge_inputs(first: &[i32], second: &[i32]) -> Result<()> {
    for (label, values) in [("first", first), ("second", second)] {
        if !is_sorted_ascending(values) {
            log::debug!("Rejecting merge: {} input is not sorted: {:?}", label, values);
            return Err(ArrayError::invalid(format!(
                "{} input is not sorted ascending",
                label
            )));
        }
    }
    Ok(())
}

fn check_rectangular(label: &str, matrix: &[Vec<i32>]) -> Result<()> {
    let cols = matrix[0].len();
    if let Some((row, values)) = matrix.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(ArrayError::invalid(format!(
            "{} matrix row {} has {} columns, expected {}",
            label,
            row,
            values.len(),
            cols
        )));
    }
    Ok(())
}

pub(crate) fn validate_matrices(left: &[Vec<i32>], right: &[Vec<i32>]) -> Result<()> {
    if left.is_empty() || right.is_empty() {
        log::debug!("Rejecting matrix product: a matrix has no rows");
        return Err(ArrayError::missing("matrix must have at least one row"));
    }
    if left[0].is_empty() || right[0].is_empty() {
        log::debug!("Rejecting matrix product: a matrix has an empty first row");
        return Err(ArrayError::missing("matrix rows must not be empty"));
    }
    check_rectangular("left", left)?;
    check_rectangular("right", right)?;

    let (left_cols, right_rows) = (left[0].len(), right.len());
    if left_cols != right_rows {
        log::debug!(
            "Rejecting matrix product: {}x{} * {}x{}",
            left.len(),
            left_cols,
            right_rows,
            right[0].len()
        );
        return Err(ArrayError::invalid(format!(
            "the left matrix has {} columns but the right matrix has {} rows",
            left_cols, right_rows
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_range_bounds() {
        assert!(check_copy_range(5, 1, 4).is_ok());
        assert!(check_copy_range(5, 0, 5).is_ok());
        assert!(check_copy_range(5, 4, 4).is_err());
        assert!(check_copy_range(5, 2, 6).is_err());
    }

    #[test]
    fn insert_index_may_equal_length() {
        assert!(check_insert_index(3, 3).is_ok());
        assert!(check_insert_index(3, 4).is_err());
    }

    #[test]
    fn empty_first_row_is_missing_data() {
        let err = validate_matrices(&[vec![]], &[vec![1]]).unwrap_err();
        assert!(err.is_missing_data());
    }

    #[test]
    fn ragged_matrix_is_invalid() {
        let err = validate_matrices(&[vec![1, 2], vec![3]], &[vec![1], vec![2]]).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
