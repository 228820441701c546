//! Setup-time matrix.
//!
//! Square table of sequence-dependent changeover costs. Entry `(r, c)`
//! is the cost of switching production from product `r` to product `c`.
//! Cells are tagged optionals: `None` marks a transition that cannot be
//! taken (the diagonal, and columns already visited during a run).
//!
//! # Reference
//! Allahverdi et al. (2008), "A survey of scheduling problems with
//! setup times or costs"

use serde::{Deserialize, Serialize};

use crate::error::{SequencingError, SequencingResult};

/// Sequence-dependent setup-time matrix over `N` products.
///
/// Serializes as a list of rows; missing cells are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Option<f64>>>", try_from = "Vec<Vec<Option<f64>>>")]
pub struct SetupMatrix {
    size: usize,
    /// Row-major cells, `size * size` long.
    cells: Vec<Option<f64>>,
}

impl SetupMatrix {
    /// Builds a matrix from rows of tagged cells.
    ///
    /// The diagonal is taken as given; mask it with `None` (or use
    /// [`SetupMatrix::from_setup_times`]) before sequencing. `Some(NaN)`
    /// is stored as missing.
    ///
    /// # Errors
    /// [`SequencingError::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> SequencingResult<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(SequencingError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values.into_iter().map(|v| v.filter(|x| !x.is_nan())));
        }

        Ok(Self { size, cells })
    }

    /// Builds a matrix from raw setup times and masks the diagonal.
    ///
    /// Diagonal values are ignored (no self-transition). `NaN` entries
    /// are stored as missing.
    pub fn from_setup_times(rows: Vec<Vec<f64>>) -> SequencingResult<Self> {
        let tagged: Vec<Vec<Option<f64>>> = rows
            .into_iter()
            .enumerate()
            .map(|(r, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(c, v)| if r == c { None } else { Some(v) })
                    .collect::<Vec<_>>()
            })
            .collect();
        Self::from_rows(tagged)
    }

    /// Number of products (rows = columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix has no products.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Setup cost from `from` to `to`, or `None` if missing or out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.cells[from * self.size + to]
    }

    /// The cells of row `from`.
    ///
    /// # Panics
    /// Panics if `from >= size`.
    pub fn row(&self, from: usize) -> &[Option<f64>] {
        let start = from * self.size;
        &self.cells[start..start + self.size]
    }

    /// Marks every entry of column `col` as missing, so no row can
    /// select it again.
    pub fn mask_column(&mut self, col: usize) {
        if col >= self.size {
            return;
        }
        for cell in self.cells.iter_mut().skip(col).step_by(self.size) {
            *cell = None;
        }
    }

    /// Lowest valid entry in row `from` as `(column, cost)`.
    ///
    /// Ties go to the lowest column index. Returns `None` when every
    /// entry in the row is missing.
    pub fn row_min(&self, from: usize) -> Option<(usize, f64)> {
        if from >= self.size {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (col, cell) in self.row(from).iter().enumerate() {
            if let Some(cost) = *cell {
                match best {
                    Some((_, current)) if cost >= current => {}
                    _ => best = Some((col, cost)),
                }
            }
        }
        best
    }

    /// Copies the cells out as rows.
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl From<SetupMatrix> for Vec<Vec<Option<f64>>> {
    fn from(matrix: SetupMatrix) -> Self {
        matrix.to_rows()
    }
}

impl TryFrom<Vec<Vec<Option<f64>>>> for SetupMatrix {
    type Error = SequencingError;

    fn try_from(rows: Vec<Vec<Option<f64>>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SetupMatrix {
        SetupMatrix::from_setup_times(vec![
            vec![0.0, 2.0, 5.0],
            vec![3.0, 0.0, 1.0],
            vec![4.0, 6.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_diagonal_is_masked() {
        let m = sample();
        assert_eq!(m.size(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), None);
        }
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(2, 1), Some(6.0));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn test_not_square() {
        let err = SetupMatrix::from_setup_times(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            SequencingError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_nan_is_missing() {
        let m = SetupMatrix::from_rows(vec![vec![None, Some(f64::NAN)], vec![Some(1.0), None]])
            .unwrap();
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 0), Some(1.0));
    }

    #[test]
    fn test_row_min() {
        let m = sample();
        assert_eq!(m.row_min(0), Some((1, 2.0)));
        assert_eq!(m.row_min(1), Some((2, 1.0)));
        assert_eq!(m.row_min(2), Some((0, 4.0)));
    }

    #[test]
    fn test_row_min_tie_prefers_lower_column() {
        let m = SetupMatrix::from_setup_times(vec![
            vec![0.0, 7.0, 3.0, 3.0],
            vec![1.0, 0.0, 1.0, 1.0],
            vec![1.0, 1.0, 0.0, 1.0],
            vec![1.0, 1.0, 1.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m.row_min(0), Some((2, 3.0)));
        assert_eq!(m.row_min(1), Some((0, 1.0)));
    }

    #[test]
    fn test_mask_column() {
        let mut m = sample();
        m.mask_column(1);
        for r in 0..3 {
            assert_eq!(m.get(r, 1), None);
        }
        assert_eq!(m.get(0, 2), Some(5.0));
        assert_eq!(m.row_min(0), Some((2, 5.0)));

        m.mask_column(2);
        assert_eq!(m.row_min(0), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.mask_column(0);
        assert_eq!(original.get(1, 0), Some(3.0));
        assert_eq!(copy.get(1, 0), None);
    }

    #[test]
    fn test_serde_rows() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[null,2.0,5.0],[3.0,null,1.0],[4.0,6.0,null]]");

        let back: SetupMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        assert!(serde_json::from_str::<SetupMatrix>("[[null,1.0],[2.0]]").is_err());
    }

    #[test]
    fn test_empty() {
        let m = SetupMatrix::from_rows(vec![]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.row_min(0), None);
        assert!(m.to_rows().is_empty());
    }
}
