/// Utility function to convert a 2x2 array to a faer matrix 2x2.
///
/// # Arguments
///
/// * `array` - A 2x2 array.
///
/// # Returns
///
/// A faer matrix 2x2.
pub fn array22_to_faer_mat22(array: &[[f64; 2]; 2]) -> faer::MatRef<'_, f64> {
    let array_slice =
        unsafe { std::slice::from_raw_parts(array.as_ptr() as *const f64, array.len() * 2) };
    faer::mat::from_row_major_slice(array_slice, 2, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array22_to_mat22() {
        let array = [[1.0, 2.0], [3.0, 4.0]];
        let mat = array22_to_faer_mat22(&array);
        assert_eq!(mat.read(0, 0), 1.0);
        assert_eq!(mat.read(0, 1), 2.0);
        assert_eq!(mat.read(1, 0), 3.0);
        assert_eq!(mat.read(1, 1), 4.0);
    }
}
