use std::borrow::Cow;

use crate::config::FilterMode;
use crate::error::Result;
use crate::math::Array2;
use crate::processor::{
    check_copy_range, check_insert_index, check_merge_inputs, validate_matrices, ArrayProcessor,
};
use crate::sorting::{count_distinct, sort_array};

/// Array processor written with iterator adaptors.
#[derive(Debug, Clone, Default)]
pub struct IterProcessor {
    filter: FilterMode,
}

impl IterProcessor {
    pub fn new(filter: FilterMode) -> Self {
        IterProcessor { filter }
    }
}

impl ArrayProcessor for IterProcessor {
    fn none_match(&self, input: &[i32]) -> bool {
        !input.iter().any(|value| value % 10 == 0)
    }

    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool {
        input.iter().any(|&value| predicate(value))
    }

    fn all_match(
        &self,
        input: &[&str],
        mapper: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool {
        input.iter().map(|token| mapper(token)).all(|value| predicate(value))
    }

    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: usize,
        end_exclusive: usize,
    ) -> Result<Vec<i32>> {
        check_copy_range(input.len(), start_inclusive, end_exclusive)?;
        Ok(input[start_inclusive..end_exclusive].to_vec())
    }

    fn replace(&self, input: &[i32]) -> Vec<i32> {
        input
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if i % 2 == 0 {
                    value.wrapping_mul(2)
                } else {
                    value.wrapping_neg()
                }
            })
            .collect()
    }

    fn find_second_max(&self, input: &[i32]) -> Option<i32> {
        let max = *input.iter().max()?;
        if input.len() < 2 {
            log::warn!("Second max requested for a single element, returning {}", max);
            return Some(max);
        }
        match input.iter().copied().filter(|&value| value < max).max() {
            Some(second) => Some(second),
            None => {
                log::warn!("All elements are equal, second max = max = {}", max);
                Some(max)
            }
        }
    }

    fn rearrange(&self, input: &[i32]) -> Vec<i32> {
        let negatives = input.iter().rev().filter(|value| **value < 0);
        let others = input.iter().rev().filter(|value| **value >= 0);
        negatives.chain(others).copied().collect()
    }

    fn filter<'a>(&self, input: &'a [i32]) -> Cow<'a, [i32]> {
        match self.filter {
            FilterMode::Positive => {
                if input.iter().all(|&value| value >= 0) {
                    Cow::Borrowed(input)
                } else {
                    Cow::Owned(input.iter().copied().filter(|&value| value > 0).collect())
                }
            }
            FilterMode::NearMax { margin } => {
                let threshold = match input.iter().max() {
                    Some(max) => max.saturating_sub(margin),
                    None => return Cow::Borrowed(input),
                };
                if input.iter().all(|&value| value >= threshold) {
                    Cow::Borrowed(input)
                } else {
                    Cow::Owned(
                        input
                            .iter()
                            .copied()
                            .filter(|&value| value >= threshold)
                            .collect(),
                    )
                }
            }
        }
    }

    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: usize,
        values: &[i32],
    ) -> Result<Vec<i32>> {
        check_insert_index(input.len(), start_inclusive)?;
        let (head, tail) = input.split_at(start_inclusive);
        Ok(head.iter().chain(values).chain(tail).copied().collect())
    }

    fn merge_sorted_arrays(&self, first: &[i32], second: &[i32]) -> Result<Vec<i32>> {
        check_merge_inputs(first, second)?;
        let merged: Vec<i32> = first.iter().chain(second).copied().collect();
        Ok(sort_array(&merged))
    }

    fn matrix_multiplication(
        &self,
        left: &[Vec<i32>],
        right: &[Vec<i32>],
    ) -> Result<Array2<i32>> {
        validate_matrices(left, right)?;

        let (rows, cols) = (left.len(), right[0].len());
        let data: Vec<i32> = left
            .iter()
            .flat_map(|row| {
                (0..cols).map(move |j| {
                    row.iter()
                        .zip(right)
                        .fold(0i32, |acc, (a, right_row)| {
                            acc.wrapping_add(a.wrapping_mul(right_row[j]))
                        })
                })
            })
            .collect();
        Ok(Array2::from_shape_vec((rows, cols), data)?)
    }

    fn distinct(&self, input: &[i32]) -> Vec<i32> {
        let mut unique = Vec::with_capacity(count_distinct(input));
        unique.extend(
            input
                .iter()
                .enumerate()
                .filter(|(i, value)| !input[..*i].contains(value))
                .map(|(_, value)| *value),
        );
        unique
    }

    fn name(&self) -> &str {
        "iterators"
    }
}
