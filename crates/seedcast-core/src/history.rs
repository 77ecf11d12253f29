//! Per-hour snapshots of per-class model state.

use crate::timeseries::FloatValue;
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Append-only record of per-class state, one snapshot per simulated hour.
///
/// Every snapshot has the same number of classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    n_classes: usize,
    snapshots: Vec<Array1<FloatValue>>,
}

impl StateHistory {
    pub fn new(n_classes: usize) -> Self {
        Self {
            n_classes,
            snapshots: Vec::new(),
        }
    }

    /// Create an empty history with room for `n_hours` snapshots.
    pub fn with_capacity(n_classes: usize, n_hours: usize) -> Self {
        Self {
            n_classes,
            snapshots: Vec::with_capacity(n_hours),
        }
    }

    /// Record a snapshot.
    ///
    /// Panics if the snapshot does not have `n_classes` values.
    pub fn push(&mut self, snapshot: ArrayView1<FloatValue>) {
        assert_eq!(
            snapshot.len(),
            self.n_classes,
            "snapshot has {} classes, expected {}",
            snapshot.len(),
            self.n_classes
        );
        self.snapshots.push(snapshot.to_owned());
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of recorded hours.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot recorded for the `index`-th simulated hour (0-based).
    pub fn get(&self, index: usize) -> Option<&Array1<FloatValue>> {
        self.snapshots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Array1<FloatValue>> {
        self.snapshots.iter()
    }

    /// Values of a single class over time.
    pub fn class_series(&self, class: usize) -> Array1<FloatValue> {
        self.snapshots.iter().map(|s| s[class]).collect()
    }

    /// The history as a `(hours, classes)` matrix.
    pub fn to_array2(&self) -> Array2<FloatValue> {
        let mut out = Array2::zeros((self.snapshots.len(), self.n_classes));
        for (mut row, snapshot) in out.rows_mut().into_iter().zip(&self.snapshots) {
            row.assign(snapshot);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_push_and_read_back() {
        let mut history = StateHistory::new(3);
        history.push(array![1.0, 2.0, 3.0].view());
        history.push(array![4.0, 5.0, 6.0].view());

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(&array![4.0, 5.0, 6.0]));
        assert_eq!(history.class_series(2), array![3.0, 6.0]);
        assert_eq!(
            history.to_array2(),
            array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]
        );
    }

    #[test]
    fn test_empty_history_matrix() {
        let history = StateHistory::with_capacity(4, 10);
        assert!(history.is_empty());
        assert_eq!(history.to_array2().dim(), (0, 4));
    }

    #[test]
    #[should_panic(expected = "snapshot has 2 classes")]
    fn test_wrong_width_panics() {
        let mut history = StateHistory::new(3);
        history.push(array![1.0, 2.0].view());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut history = StateHistory::new(2);
        history.push(array![0.5, -0.5].view());
        let serialised = serde_json::to_string(&history).unwrap();
        let deserialised: StateHistory = serde_json::from_str(&serialised).unwrap();
        assert_eq!(history, deserialised);
    }
}
