//! Integer sequence queries.

/// Sample sequence used by the default driver run
pub const SAMPLE_VALUES: [i32; 11] = [4, 2, 5, 3, 5, 2, 64, 34, 3434, 3432, 644];

/// Number of elements in the sequence
pub fn array_length(values: &[i32]) -> usize {
    values.len()
}
