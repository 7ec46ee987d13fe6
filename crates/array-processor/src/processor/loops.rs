use std::borrow::Cow;

use crate::config::FilterMode;
use crate::error::Result;
use crate::math::Array2;
use crate::processor::{
    check_copy_range, check_insert_index, check_merge_inputs, validate_matrices, ArrayProcessor,
};
use crate::sorting::{count_distinct, sort_array};

/// Array processor written with explicit index loops.
#[derive(Debug, Clone, Default)]
pub struct LoopProcessor {
    filter: FilterMode,
}

impl LoopProcessor {
    pub fn new(filter: FilterMode) -> Self {
        LoopProcessor { filter }
    }

    fn filter_positive<'a>(&self, input: &'a [i32]) -> Cow<'a, [i32]> {
        let mut negatives = 0;
        for &value in input {
            if value < 0 {
                negatives += 1;
            }
        }
        if negatives == 0 {
            return Cow::Borrowed(input);
        }

        let mut result = Vec::with_capacity(input.len() - negatives);
        for &value in input {
            if value > 0 {
                result.push(value);
            }
        }
        Cow::Owned(result)
    }

    fn filter_near_max<'a>(&self, input: &'a [i32], margin: i32) -> Cow<'a, [i32]> {
        if input.is_empty() {
            return Cow::Borrowed(input);
        }
        let mut max = input[0];
        for &value in &input[1..] {
            if value > max {
                max = value;
            }
        }
        let threshold = max.saturating_sub(margin);

        let mut result = Vec::with_capacity(input.len());
        for &value in input {
            if value >= threshold {
                result.push(value);
            }
        }
        if result.len() == input.len() {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(result)
        }
    }
}

impl ArrayProcessor for LoopProcessor {
    fn none_match(&self, input: &[i32]) -> bool {
        for &value in input {
            if value % 10 == 0 {
                return false;
            }
        }
        true
    }

    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool {
        for &value in input {
            if predicate(value) {
                return true;
            }
        }
        false
    }

    fn all_match(
        &self,
        input: &[&str],
        mapper: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool {
        for token in input {
            if !predicate(mapper(token)) {
                return false;
            }
        }
        true
    }

    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: usize,
        end_exclusive: usize,
    ) -> Result<Vec<i32>> {
        check_copy_range(input.len(), start_inclusive, end_exclusive)?;
        let mut copied = Vec::with_capacity(end_exclusive - start_inclusive);
        for i in start_inclusive..end_exclusive {
            copied.push(input[i]);
        }
        Ok(copied)
    }

    fn replace(&self, input: &[i32]) -> Vec<i32> {
        let mut replaced = vec![0; input.len()];
        for i in 0..input.len() {
            replaced[i] = if i % 2 == 0 {
                input[i].wrapping_mul(2)
            } else {
                input[i].wrapping_neg()
            };
        }
        replaced
    }

    fn find_second_max(&self, input: &[i32]) -> Option<i32> {
        let sorted = sort_array(input);
        let max = *sorted.last()?;
        if sorted.len() < 2 {
            log::warn!("Second max requested for a single element, returning {}", max);
            return Some(max);
        }
        for i in 0..sorted.len() {
            if sorted[i] == max {
                if i == 0 {
                    log::warn!("All elements are equal, second max = max = {}", max);
                    return Some(max);
                }
                return Some(sorted[i - 1]);
            }
        }
        Some(max)
    }

    fn rearrange(&self, input: &[i32]) -> Vec<i32> {
        let mut rearranged = Vec::with_capacity(input.len());
        for i in (0..input.len()).rev() {
            if input[i] < 0 {
                rearranged.push(input[i]);
            }
        }
        for i in (0..input.len()).rev() {
            if input[i] >= 0 {
                rearranged.push(input[i]);
            }
        }
        rearranged
    }

    fn filter<'a>(&self, input: &'a [i32]) -> Cow<'a, [i32]> {
        match self.filter {
            FilterMode::Positive => self.filter_positive(input),
            FilterMode::NearMax { margin } => self.filter_near_max(input, margin),
        }
    }

    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: usize,
        values: &[i32],
    ) -> Result<Vec<i32>> {
        check_insert_index(input.len(), start_inclusive)?;

        let total = input.len() + values.len();
        let inserted_end = start_inclusive + values.len();
        let mut merged = vec![0; total];
        for i in 0..total {
            merged[i] = if i < start_inclusive {
                input[i]
            } else if i < inserted_end {
                values[i - start_inclusive]
            } else {
                input[i - values.len()]
            };
        }
        Ok(merged)
    }

    fn merge_sorted_arrays(&self, first: &[i32], second: &[i32]) -> Result<Vec<i32>> {
        check_merge_inputs(first, second)?;
        let mut merged = Vec::with_capacity(first.len() + second.len());
        for &value in first {
            merged.push(value);
        }
        for &value in second {
            merged.push(value);
        }
        Ok(sort_array(&merged))
    }

    fn matrix_multiplication(
        &self,
        left: &[Vec<i32>],
        right: &[Vec<i32>],
    ) -> Result<Array2<i32>> {
        validate_matrices(left, right)?;

        let (rows, inner, cols) = (left.len(), right.len(), right[0].len());
        let mut product = Array2::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = 0i32;
                for k in 0..inner {
                    sum = sum.wrapping_add(left[i][k].wrapping_mul(right[k][j]));
                }
                product[(i, j)] = sum;
            }
        }
        Ok(product)
    }

    fn distinct(&self, input: &[i32]) -> Vec<i32> {
        let mut unique = Vec::with_capacity(count_distinct(input));
        for i in 0..input.len() {
            let mut seen = false;
            for j in 0..i {
                if input[i] == input[j] {
                    seen = true;
                    break;
                }
            }
            if !seen {
                unique.push(input[i]);
            }
        }
        unique
    }

    fn name(&self) -> &str {
        "loops"
    }
}
