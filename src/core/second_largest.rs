use crate::domain::model::SecondLargestMode;
use crate::utils::error::{Result, TaskError};

const MIN_LEN: usize = 2;

fn ensure_len(values: &[i64]) -> Result<()> {
    if values.len() < MIN_LEN {
        return Err(TaskError::InvalidArgument {
            len: values.len(),
            min: MIN_LEN,
        });
    }
    Ok(())
}

/// 回傳遞減排序後索引 1 的元素。
///
/// 最大值重複時不會略過，所以 `[5, 5, 3]` 得到 `5`。
/// 少於兩個元素時回傳 [`TaskError::InvalidArgument`]。
pub fn second_largest(values: &[i64]) -> Result<i64> {
    ensure_len(values)?;
    tracing::trace!(len = values.len(), "second_largest (literal)");

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sorted[1])
}

/// 單次線性掃描，追蹤前兩大的相異值。
///
/// `[5, 5, 3]` 得到 `3`；所有元素都相同時回傳 [`TaskError::NoSecondDistinct`]。
pub fn second_largest_distinct(values: &[i64]) -> Result<i64> {
    ensure_len(values)?;
    tracing::trace!(len = values.len(), "second_largest (distinct)");

    let mut first = values[0];
    let mut second: Option<i64> = None;

    for &value in &values[1..] {
        if value > first {
            second = Some(first);
            first = value;
        } else if value < first && second.map_or(true, |s| value > s) {
            second = Some(value);
        }
    }

    second.ok_or(TaskError::NoSecondDistinct { value: first })
}

pub fn second_largest_with(values: &[i64], mode: SecondLargestMode) -> Result<i64> {
    match mode {
        SecondLargestMode::Literal => second_largest(values),
        SecondLargestMode::Distinct => second_largest_distinct(values),
    }
}
