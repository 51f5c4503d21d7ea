use ndarray as nd;
use num_traits::Float;

/// One-dimensional linear interpolation against samples taken at the
/// integer times `0..values.len()`, with linear extrapolation from the
/// first/last segment for queries outside that range.
///
/// A single-sample track degenerates to a constant: every query returns
/// that sample.
///
/// # Panics
/// Will panic if `values` is empty
pub fn interp_linear<T: Float>(values: nd::ArrayView1<T>, t: T) -> T {
    let n = values.len();
    assert!(n > 0, "cannot interpolate an empty sample track");
    if n == 1 {
        return values[0];
    }
    // Clamp the segment index so out-of-range queries extrapolate from
    // the boundary segment instead of indexing past the track.
    let last_segment = T::from(n - 2).unwrap_or_else(T::zero);
    let i = if t <= T::zero() {
        0
    } else if t >= last_segment {
        n - 2
    } else {
        t.floor().to_usize().unwrap_or(0)
    };
    let t0 = T::from(i).unwrap_or_else(T::zero);
    values[i] + (values[i + 1] - values[i]) * (t - t0)
}

/// Coordinate-wise median over the rows of a 2D array, i.e. one median
/// per column. Even row counts average the two middle values, matching
/// `np.median`.
///
/// # Panics
/// Will panic if `points` has no rows
pub fn column_median<T: Float>(points: nd::ArrayView2<T>) -> nd::Array1<T> {
    let (rows, cols) = points.dim();
    assert!(rows > 0, "cannot take the median of zero rows");
    let mut medians = nd::Array1::<T>::zeros(cols);
    let two = T::one() + T::one();
    for c in 0..cols {
        let mut column: Vec<T> = points.column(c).to_vec();
        column.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        medians[c] = if rows % 2 == 1 {
            column[rows / 2]
        } else {
            (column[rows / 2 - 1] + column[rows / 2]) / two
        };
    }
    medians
}
