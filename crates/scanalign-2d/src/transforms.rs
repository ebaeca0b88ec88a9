/// The 3x3 homogeneous identity transform.
pub fn identity() -> [[f64; 3]; 3] {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

/// Compute the homogeneous transform for a counter-clockwise rotation about
/// the origin.
///
/// # Arguments
///
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
///
/// The 3x3 homogeneous transform, row major.
pub fn rotation(angle: f64) -> [[f64; 3]; 3] {
    rigid(angle, &[0.0, 0.0])
}

/// Compute the homogeneous transform for a rotation about the origin followed
/// by a translation.
///
/// # Arguments
///
/// * `angle` - The angle of rotation in radians.
/// * `translation` - The translation vector.
///
/// # Returns
///
/// The 3x3 homogeneous transform, row major.
///
/// Example:
///
/// ```
/// use scanalign_2d::transforms::rigid;
///
/// let transform = rigid(0.0, &[1.0, 2.0]);
/// assert_eq!(transform, [[1.0, 0.0, 1.0], [0.0, 1.0, 2.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn rigid(angle: f64, translation: &[f64; 2]) -> [[f64; 3]; 3] {
    let c = angle.cos();
    let s = angle.sin();
    [
        [c, -s, translation[0]],
        [s, c, translation[1]],
        [0.0, 0.0, 1.0],
    ]
}
