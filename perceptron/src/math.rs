/// Sum of element-wise products of two vectors. Vectors of different
/// lengths are truncated to the shorter one.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(a_i, b_i)| a_i * b_i).sum()
}

/// Sum of all elements, 0.0 for an empty slice.
pub fn sum(values: &[f32]) -> f32 {
    values.iter().sum()
}
