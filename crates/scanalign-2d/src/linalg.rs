use crate::utils;

/// Errors that can occur in the linear algebra utilities.
#[derive(thiserror::Error, Debug)]
pub enum LinalgError {
    /// The source and destination buffers have different lengths.
    #[error("source and destination have different lengths ({0} != {1})")]
    MismatchedLength(usize, usize),
}

/// Transform a set of 2d points using a 3x3 homogeneous transform.
///
/// Each point (x, y) is lifted to the homogeneous vector (x, y, 1) and
/// multiplied by `dst_h_src`. The third component of the product is discarded
/// without normalization, so the result is the affine action of the top two
/// rows; the bottom row is expected to be [0, 0, 1] and is not validated.
///
/// # Arguments
///
/// * `src_points` - A set of points to be transformed.
/// * `dst_h_src` - A 3x3 homogeneous transform, row major.
/// * `dst_points` - A pre-allocated buffer to store the transformed points.
///
/// PRECONDITION: dst_points is pre-allocated with the same length as source.
///
/// Example:
///
/// ```
/// use scanalign_2d::linalg::transform_points;
///
/// let src_points = vec![[2.0, 2.0], [3.0, 4.0]];
/// let transform = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let mut dst_points = vec![[0.0; 2]; src_points.len()];
/// transform_points(&src_points, &transform, &mut dst_points).unwrap();
/// ```
pub fn transform_points(
    src_points: &[[f64; 2]],
    dst_h_src: &[[f64; 3]; 3],
    dst_points: &mut [[f64; 2]],
) -> Result<(), LinalgError> {
    if src_points.len() != dst_points.len() {
        return Err(LinalgError::MismatchedLength(
            src_points.len(),
            dst_points.len(),
        ));
    }

    // split the homogeneous transform into its linear block and translation
    let dst_r_src = [
        [dst_h_src[0][0], dst_h_src[0][1]],
        [dst_h_src[1][0], dst_h_src[1][1]],
    ];
    let (tx, ty) = (dst_h_src[0][2], dst_h_src[1][2]);

    // create a view of the linear block
    let dst_r_src_mat = utils::array22_to_faer_mat22(&dst_r_src);

    // create view of the source points
    let points_in_src = {
        let src_points_slice = unsafe {
            std::slice::from_raw_parts(src_points.as_ptr() as *const f64, src_points.len() * 2)
        };
        // SAFETY: src_points_slice is an Nx2 matrix where each row represents a 2D point
        faer::mat::from_row_major_slice(src_points_slice, src_points.len(), 2)
    };

    // create a mutable view of the destination points
    let mut points_in_dst = {
        let dst_points_slice = unsafe {
            std::slice::from_raw_parts_mut(
                dst_points.as_mut_ptr() as *mut f64,
                dst_points.len() * 2,
            )
        };
        // SAFETY: dst_points_slice is a 2xN matrix where each column represents a 2D point
        faer::mat::from_column_major_slice_mut(dst_points_slice, 2, dst_points.len())
    };

    // perform the matrix multiplication
    faer::linalg::matmul::matmul(
        &mut points_in_dst,
        dst_r_src_mat,
        points_in_src.transpose(),
        None,
        1.0,
        faer::Parallelism::None,
    );

    // SAFETY: points_in_dst is a 2xN matrix where each column represents a 2D point
    // The unchecked reads/writes are within bounds as we're only accessing indices 0,1
    for mut col in points_in_dst.col_iter_mut() {
        unsafe {
            col.write_unchecked(0, col.read_unchecked(0) + tx);
            col.write_unchecked(1, col.read_unchecked(1) + ty);
        }
    }

    Ok(())
}

/// Transform a set of 2d points using a 3x3 homogeneous transform, returning
/// a newly allocated set.
///
/// Allocating convenience over [`transform_points`]; same semantics, same
/// length and order out as in.
pub fn transform_points_vec(
    src_points: &[[f64; 2]],
    dst_h_src: &[[f64; 3]; 3],
) -> Vec<[f64; 2]> {
    let mut dst_points = vec![[0.0; 2]; src_points.len()];
    // lengths match by construction
    let _ = transform_points(src_points, dst_h_src, &mut dst_points);
    dst_points
}

/// Compose two homogeneous transforms as the matrix product `second * first`.
///
/// Applying `first` to a cloud and then `second` to the result is equivalent
/// to a single application of the composite.
///
/// Example:
///
/// ```
/// use scanalign_2d::linalg::compose;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let composite = compose(&identity, &identity);
/// assert_eq!(composite, identity);
/// ```
pub fn compose(second: &[[f64; 3]; 3], first: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for (i, out_row) in out.iter_mut().enumerate() {
        for (j, out_val) in out_row.iter_mut().enumerate() {
            *out_val = (0..3).map(|k| second[i][k] * first[k][j]).sum();
        }
    }
    out
}

/// Utility function to compute the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - A point in the plane.
/// * `b` - Another point in the plane.
///
/// # Returns
///
/// The Euclidean distance between the two points.
///
/// Example:
/// ```
/// use scanalign_2d::linalg::euclidean_distance;
///
/// let a = [1.0, 2.0];
/// let b = [4.0, 6.0];
/// let dst = euclidean_distance(&a, &b);
/// assert_eq!(dst, 5.0);
/// ```
pub fn euclidean_distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

/// Compute the centroid of a set of 2d points.
///
/// Returns the origin for an empty set.
pub fn centroid(points: &[[f64; 2]]) -> [f64; 2] {
    if points.is_empty() {
        return [0.0, 0.0];
    }
    let sum = points
        .iter()
        .fold([0.0, 0.0], |acc, p| [acc[0] + p[0], acc[1] + p[1]]);
    [sum[0] / points.len() as f64, sum[1] / points.len() as f64]
}
