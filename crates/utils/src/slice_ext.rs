/// Extends slices of bin edges with binning helpers
///
/// Bin edges are the N+1 boundaries defining N contiguous intervals along one
/// axis. Every method assumes the edges are in ascending order.
pub trait BinExt {
    /// Width of every bin defined by the edges
    ///
    /// Returns the consecutive differences, so N+1 edges give N widths. Fewer
    /// than two edges define no bins and return an empty vector.
    ///
    /// ```rust
    /// # use nutools_utils::BinExt;
    /// let edges = vec![0.0, 0.1, 1.0, 20.0];
    /// assert_eq!(edges.widths(), vec![0.1, 0.9, 19.0]);
    /// ```
    fn widths(&self) -> Vec<f64>;

    /// Midpoint of every bin defined by the edges
    ///
    /// ```rust
    /// # use nutools_utils::BinExt;
    /// let edges = vec![0.0, 2.0, 4.0];
    /// assert_eq!(edges.centres(), vec![1.0, 3.0]);
    /// ```
    fn centres(&self) -> Vec<f64>;

    /// Find the index of the bin containing `value`, if any
    ///
    /// Bins are half-open intervals `low <= value < high`, except for the
    /// last bin which also includes its upper edge. Values outside the full
    /// range return [None] rather than an error, matching standard weighted
    /// histogram semantics where out-of-range samples are simply dropped.
    ///
    /// # Example
    /// ```text
    ///     edges: 0.0 0.1 1.0 20.0
    ///
    ///     0.0 <= bin 0 < 0.1
    ///     0.1 <= bin 1 < 1.0
    ///     1.0 <= bin 2 <= 20.0
    /// ```
    ///
    /// ```rust
    /// # use nutools_utils::BinExt;
    /// let edges = vec![0.0, 0.1, 1.0, 20.0];
    ///
    /// // Find values in the array
    /// assert_eq!(edges.locate(0.0), Some(0));
    /// assert_eq!(edges.locate(0.5), Some(1));
    /// assert_eq!(edges.locate(1.0), Some(2));
    ///
    /// // The uppermost edge belongs to the last bin
    /// assert_eq!(edges.locate(20.0), Some(2));
    ///
    /// // Values outside the bounds belong to no bin
    /// assert_eq!(edges.locate(-1.0), None);
    /// assert_eq!(edges.locate(21.0), None);
    /// ```
    fn locate(&self, value: f64) -> Option<usize>;
}

impl BinExt for [f64] {
    fn widths(&self) -> Vec<f64> {
        self.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }

    fn centres(&self) -> Vec<f64> {
        self.windows(2).map(|pair| 0.5 * (pair[0] + pair[1])).collect()
    }

    fn locate(&self, value: f64) -> Option<usize> {
        // need at least one bin to check against
        let n = self.len();
        if n < 2 {
            return None;
        }

        // special case for being on the uppermost edge
        if value == self[n - 1] {
            return Some(n - 2);
        }

        // range EXCLUSIVE of the upper edge for every other bin
        self.windows(2)
            .position(|pair| pair[0] <= value && value < pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_and_centres() {
        let edges = vec![1.0, 2.0, 3.0, 5.0];
        assert_eq!(edges.widths(), vec![1.0, 1.0, 2.0]);
        assert_eq!(edges.centres(), vec![1.5, 2.5, 4.0]);
    }

    #[test]
    fn widths_of_degenerate_edges() {
        assert_eq!(Vec::<f64>::new().widths(), Vec::<f64>::new());
        assert_eq!([4.2].widths(), Vec::<f64>::new());
    }

    #[test]
    fn locate_interior_values() {
        let edges = vec![-1.0, -0.5, 0.0, 0.5, 1.0];
        assert_eq!(edges.locate(-0.75), Some(0));
        assert_eq!(edges.locate(0.25), Some(2));
        assert_eq!(edges.locate(0.99), Some(3));
    }

    #[test]
    fn locate_values_on_edges() {
        let edges = vec![-1.0, -0.5, 0.0, 0.5, 1.0];
        // lower edges belong to the bin above
        assert_eq!(edges.locate(-1.0), Some(0));
        assert_eq!(edges.locate(0.0), Some(2));
        assert_eq!(edges.locate(0.5), Some(3));
        // uppermost edge belongs to the last bin
        assert_eq!(edges.locate(1.0), Some(3));
    }

    #[test]
    fn locate_out_of_range_values() {
        let edges = vec![-1.0, 0.0, 1.0];
        assert_eq!(edges.locate(-1.1), None);
        assert_eq!(edges.locate(1.1), None);
        assert_eq!(edges.locate(f64::NAN), None);
    }

    #[test]
    fn locate_without_bins() {
        assert_eq!(Vec::<f64>::new().locate(0.5), None);
        assert_eq!([1.0].locate(1.0), None);
    }
}
