//! Weighted 2-D histogram over caller-supplied bin edges

// crate modules
use crate::error::{Error, Result};

// nutools modules
use nutools_utils::BinExt;

/// Accumulate event weights into a 2-D grid over (x, y) bin edges
///
/// Returns the flat row-major grid of weighted counts, where the cell for
/// x-bin `i` and y-bin `j` sits at index `i * (yedges.len() - 1) + j`.
///
/// Bin intervals are half-open with the uppermost edge included in the last
/// bin (see [BinExt::locate]). Events falling outside the edge range on
/// either axis contribute to no cell and are silently dropped.
///
/// The three input sequences must have one entry per event, and both axes
/// need at least two edges. Either violation is an error.
///
/// ```rust
/// # use nutools_aeff::histogram2d_weighted;
/// let counts = histogram2d_weighted(
///     &[1.5, 2.5, 9.9],           // x, last event out of range
///     &[0.5, 0.5, 0.5],           // y
///     &[10.0, 3.0, 99.0],         // weights
///     &[1.0, 2.0, 3.0],           // x edges
///     &[-1.0, 0.0, 1.0],          // y edges
/// )
/// .unwrap();
///
/// assert_eq!(counts, vec![0.0, 10.0, 0.0, 3.0]);
/// ```
pub fn histogram2d_weighted(
    x: &[f64],
    y: &[f64],
    weights: &[f64],
    xedges: &[f64],
    yedges: &[f64],
) -> Result<Vec<f64>> {
    if xedges.len() < 2 || yedges.len() < 2 {
        return Err(Error::NotEnoughBinEdges {
            x: xedges.len(),
            y: yedges.len(),
        });
    }

    if x.len() != y.len() || x.len() != weights.len() {
        return Err(Error::MismatchedSequenceLengths {
            x: x.len(),
            y: y.len(),
            weights: weights.len(),
        });
    }

    let ny = yedges.len() - 1;
    let mut counts = vec![0.0; (xedges.len() - 1) * ny];

    for ((xv, yv), wv) in x.iter().zip(y.iter()).zip(weights.iter()) {
        let (Some(i), Some(j)) = (xedges.locate(*xv), yedges.locate(*yv)) else {
            continue;
        };
        counts[i * ny + j] += wv;
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const XEDGES: [f64; 3] = [1.0, 2.0, 3.0];
    const YEDGES: [f64; 3] = [-1.0, 0.0, 1.0];

    #[test]
    fn weights_accumulate_per_cell() {
        let counts = histogram2d_weighted(
            &[1.5, 1.6, 2.5, 1.1],
            &[0.5, 0.25, -0.5, -0.99],
            &[10.0, 2.0, 7.0, 1.0],
            &XEDGES,
            &YEDGES,
        )
        .unwrap();

        // row-major (x-bin, y-bin)
        assert_eq!(counts, vec![1.0, 12.0, 7.0, 0.0]);
    }

    #[test]
    fn uppermost_edges_fall_in_last_bins() {
        let counts =
            histogram2d_weighted(&[3.0, 2.0], &[1.0, -1.0], &[5.0, 2.0], &XEDGES, &YEDGES).unwrap();

        assert_eq!(counts, vec![0.0, 0.0, 2.0, 5.0]);
    }

    #[test]
    fn out_of_range_events_are_dropped() {
        let counts = histogram2d_weighted(
            &[0.5, 3.5, 1.5, 1.5],
            &[0.5, 0.5, -1.5, 1.5],
            &[1.0, 1.0, 1.0, 1.0],
            &XEDGES,
            &YEDGES,
        )
        .unwrap();

        assert!(counts.iter().all(|c| *c == 0.0));
    }

    #[test]
    fn empty_events_give_zeroed_grid() {
        let counts = histogram2d_weighted(&[], &[], &[], &XEDGES, &YEDGES).unwrap();
        assert_eq!(counts, vec![0.0; 4]);
    }

    #[test]
    fn mismatched_sequences_are_an_error() {
        let result = histogram2d_weighted(&[1.5, 2.5], &[0.5], &[1.0, 2.0], &XEDGES, &YEDGES);
        assert!(matches!(
            result,
            Err(Error::MismatchedSequenceLengths {
                x: 2,
                y: 1,
                weights: 2
            })
        ));
    }

    #[test]
    fn missing_bin_edges_are_an_error() {
        let result = histogram2d_weighted(&[1.5], &[0.5], &[1.0], &[1.0], &YEDGES);
        assert!(matches!(
            result,
            Err(Error::NotEnoughBinEdges { x: 1, y: 3 })
        ));
    }
}
