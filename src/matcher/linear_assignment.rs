//! Square-padded linear assignment on top of `lapjv`.
//!
//! Rectangular inputs are padded to square with a constant. Every padded
//! row or column takes exactly one padded entry, so the constant shifts all
//! complete assignments equally and never changes which real pairs win.

use ndarray::{Array2, ArrayView2};
use tracing::warn;

/// Minimum-cost assignment of a finite cost matrix.
///
/// Every row of the smaller side is assigned. Returns `(row, col)` pairs
/// sorted by row.
pub(crate) fn minimize(costs: ArrayView2<f64>, pad: f64) -> Vec<(usize, usize)> {
    let (num_rows, num_cols) = costs.dim();
    if num_rows == 0 || num_cols == 0 {
        return Vec::new();
    }
    debug_assert!(
        costs.iter().all(|c| c.is_finite()) && pad.is_finite(),
        "linear assignment requires finite costs"
    );

    let size = num_rows.max(num_cols);
    let mut padded = Array2::<f64>::from_elem((size, size), pad);
    padded
        .slice_mut(ndarray::s![..num_rows, ..num_cols])
        .assign(&costs);

    match lapjv::lapjv(&padded) {
        Ok((row_to_col, _)) => row_to_col
            .iter()
            .enumerate()
            .take(num_rows)
            .filter(|&(_, &col)| col < num_cols)
            .map(|(row, &col)| (row, col))
            .collect(),
        Err(err) => {
            warn!(num_rows, num_cols, "lapjv failed: {:?}", err);
            Vec::new()
        }
    }
}

/// Maximum-cost assignment, solved as a minimization of `max - cost` so
/// the solver only sees non-negative values.
pub(crate) fn maximize(costs: ArrayView2<f64>, pad: f64) -> Vec<(usize, usize)> {
    let ceiling = costs.iter().copied().fold(pad, f64::max);
    let flipped = costs.mapv(|c| ceiling - c);
    minimize(flipped.view(), ceiling - pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn total(costs: &Array2<f64>, pairs: &[(usize, usize)]) -> f64 {
        pairs.iter().map(|&(i, j)| costs[[i, j]]).sum()
    }

    #[test]
    fn test_square_optimum() {
        let costs = array![[4.0, 1.0, 3.0], [2.0, 0.0, 5.0], [3.0, 2.0, 2.0]];
        let pairs = minimize(costs.view(), 0.0);
        assert_eq!(pairs, vec![(0, 1), (1, 0), (2, 2)]);
        assert_eq!(total(&costs, &pairs), 5.0);
    }

    #[test]
    fn test_wide_matrix_assigns_every_row() {
        let costs = array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]];
        let pairs = minimize(costs.view(), 1e6);
        assert_eq!(pairs, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_tall_matrix_assigns_every_column() {
        let costs = array![[5.0, 1.0], [1.0, 5.0], [0.5, 0.5]];
        let pairs = minimize(costs.view(), 0.0);
        assert_eq!(pairs.len(), 2);
        assert_eq!(total(&costs, &pairs), 1.5);
    }

    #[test]
    fn test_padding_value_does_not_change_result() {
        let costs = array![[0.3, 0.9, 0.2], [0.8, 0.1, 0.7]];
        let low = minimize(costs.view(), 0.0);
        let high = minimize(costs.view(), 1e6);
        assert_eq!(low, high);
        assert_eq!(low, vec![(0, 2), (1, 1)]);
    }

    #[test]
    fn test_ties_are_reproducible() {
        let costs = Array2::from_elem((3, 3), 0.5);
        let first = minimize(costs.view(), 0.5);
        assert_eq!(first.len(), 3);
        assert_eq!(first, minimize(costs.view(), 0.5));
    }

    #[test]
    fn test_maximize() {
        let costs = array![[0.9, 0.1], [0.8, 0.7]];
        assert_eq!(maximize(costs.view(), 0.0), vec![(0, 0), (1, 1)]);

        let wide = array![[0.2, 0.9, 0.4]];
        assert_eq!(maximize(wide.view(), 0.0), vec![(0, 1)]);
    }

    #[test]
    fn test_empty_matrix() {
        let costs = Array2::<f64>::zeros((0, 3));
        assert!(minimize(costs.view(), 0.0).is_empty());
    }
}
