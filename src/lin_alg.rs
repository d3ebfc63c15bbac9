use crate::{int, Matrix, Rational, Result};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::{debug, trace};

/// The stage of row reduction a [`Trace`] snapshot was taken after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Initial,
    Scaled,
    Sheared,
    Reduced,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Initial => "initial",
            Phase::Scaled => "scaled",
            Phase::Sheared => "sheared",
            Phase::Reduced => "reduced",
        }
    }
}

/// Labeled snapshots of a matrix taken during [`reduce_to_rref`], oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<(Phase, Matrix)>,
}

impl Trace {
    fn record(&mut self, phase: Phase, mat: &Matrix) {
        trace!(phase = phase.as_str(), "recording snapshot");
        self.entries.push((phase, mat.clone()));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Phase, Matrix)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of pivot steps carried out.
    pub fn pivot_steps(&self) -> usize {
        self.entries
            .iter()
            .filter(|(phase, _)| *phase == Phase::Reduced)
            .count()
    }

    pub fn last(&self) -> Option<&(Phase, Matrix)> {
        self.entries.last()
    }

    /// Returns the latest snapshot taken after `phase`.
    pub fn last_of(&self, phase: Phase) -> Option<&Matrix> {
        self.entries
            .iter()
            .rev()
            .find(|(p, _)| *p == phase)
            .map(|(_, mat)| mat)
    }

    pub fn into_vec(self) -> Vec<(Phase, Matrix)> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a (Phase, Matrix);
    type IntoIter = std::slice::Iter<'a, (Phase, Matrix)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Transforms a matrix into reduced row echelon form in place and returns
/// the snapshots taken along the way.
///
/// Each pivot step scales the other rows so that their entries in the pivot
/// column become a common multiple of the pivot, shears them against the
/// pivot row to clear that column, and then shrinks every row: rows that
/// own a pivot are divided by their leading entry, the others by their
/// content, keeping them integral when they started so.
pub fn reduce_to_rref(mat: &mut Matrix) -> Result<Trace> {
    let (row_n, col_n) = mat.shape();

    let mut trace = Trace::default();
    trace.record(Phase::Initial, mat);

    let mut row_i = 0;
    let mut col_i = 0;

    while row_i < row_n && col_i < col_n {
        let mut leading = mat[(row_i, col_i)].clone();

        if leading.is_negative() {
            mat.scale_row(row_i, -Rational::one())?;
            leading = -leading;
        }

        if leading.is_zero() {
            let candidate = (row_i + 1..row_n).find(|&i| !mat[(i, col_i)].is_zero());
            match candidate {
                // A row swapped in may bring a negative pivot; the reduce
                // phase divides it out with the rest of the pivot row.
                Some(i) => {
                    debug!(row = row_i, col = col_i, with = i, "swapping rows");
                    mat.swap_rows(row_i, i)?;
                    leading = mat[(row_i, col_i)].clone();
                }
                // No pivot in this column.
                None => {
                    debug!(row = row_i, col = col_i, "skipping zero column");
                    col_i += 1;
                    continue;
                }
            }
        }
        debug!(row = row_i, col = col_i, pivot = %leading, "pivot selected");

        for cur_i in (0..row_n).filter(|&i| i != row_i) {
            let cur = &mat[(cur_i, col_i)];
            if cur.is_zero() {
                continue;
            }
            let multiplier = leading.lcm(cur)?.checked_div(cur)?;
            mat.scale_row(cur_i, multiplier)?;
        }
        trace.record(Phase::Scaled, mat);

        for cur_i in (0..row_n).filter(|&i| i != row_i) {
            let cur = &mat[(cur_i, col_i)];
            if cur.is_zero() {
                continue;
            }
            let factor = cur.checked_div(&leading)?;
            mat.shear_row(cur_i, row_i, -factor)?;
        }
        trace.record(Phase::Sheared, mat);

        for cur_i in 0..row_n {
            let divisor = if cur_i <= row_i {
                mat.first_nonzero(cur_i)?.map(|j| mat[(cur_i, j)].clone())
            } else {
                content(mat.row(cur_i)?)?
            };
            if let Some(divisor) = divisor {
                mat.scale_row(cur_i, divisor.inv()?)?;
            }
        }
        trace.record(Phase::Reduced, mat);

        row_i += 1;
        col_i += 1;
    }

    debug!(steps = trace.pivot_steps(), "row reduction finished");
    Ok(trace)
}

/// Returns the GCD of the numerators over the LCM of the denominators of a
/// row, or `None` for a zero row. Dividing by it leaves coprime integers.
fn content(row: &[Rational]) -> Result<Option<Rational>> {
    let numers: Vec<BigInt> = row.iter().map(|x| x.numer().clone()).collect();
    let denoms: Vec<BigInt> = row.iter().map(|x| x.denom().clone()).collect();

    let gcd = int::gcd_all(&numers);
    if gcd.is_zero() {
        return Ok(None);
    }
    Rational::new(gcd, int::lcm_all(&denoms)?).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use proptest::prelude::*;

    fn matrix<const N: usize, const M: usize>(rows: [[i64; M]; N]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_invertible() {
        let mut mat = matrix([[1, 2], [3, 4]]);
        let trace = reduce_to_rref(&mut mat).unwrap();

        assert_eq!(mat, matrix([[1, 0], [0, 1]]));
        assert_eq!(trace.pivot_steps(), 2);
        assert_eq!(trace.len(), 7);
        assert_eq!(trace.last_of(Phase::Reduced), Some(&mat));
        assert_eq!(trace.last_of(Phase::Initial), Some(&matrix([[1, 2], [3, 4]])));
    }

    #[test]
    fn test_phases_in_order() {
        let mut mat = matrix([[2, 1], [4, 3]]);
        let trace = reduce_to_rref(&mut mat).unwrap();
        let phases: Vec<_> = trace.iter().map(|(phase, _)| phase.as_str()).collect();
        assert_eq!(
            phases,
            [
                "initial", "scaled", "sheared", "reduced", "scaled", "sheared", "reduced"
            ]
        );
    }

    #[test]
    fn test_singular() {
        let mut mat = matrix([[2, 4], [1, 2]]);
        let trace = reduce_to_rref(&mut mat).unwrap();

        assert_eq!(mat, matrix([[1, 2], [0, 0]]));
        assert_eq!(trace.pivot_steps(), 1);
        assert_eq!(trace.last().map(|(_, m)| m), Some(&mat));
    }

    #[test]
    fn test_zero_pivot_swaps_from_below() {
        let mut mat = matrix([[0, 1], [0, 0], [3, 6]]);
        reduce_to_rref(&mut mat).unwrap();
        assert_eq!(mat, matrix([[1, 0], [0, 1], [0, 0]]));
    }

    #[test]
    fn test_zero_column_is_skipped() {
        let mut mat = matrix([[0, 2, 4], [0, 3, 1]]);
        let trace = reduce_to_rref(&mut mat).unwrap();
        assert_eq!(mat, matrix([[0, 1, 0], [0, 0, 1]]));
        assert_eq!(trace.pivot_steps(), 2);
    }

    #[test]
    fn test_negative_pivot() {
        let mut mat = matrix([[-2, 4]]);
        reduce_to_rref(&mut mat).unwrap();
        assert_eq!(mat, matrix([[1, -2]]));
    }

    #[test]
    fn test_negative_pivot_swapped_in() {
        let mut mat = matrix([[0, 1], [-2, 4]]);
        let trace = reduce_to_rref(&mut mat).unwrap();
        expect![[r#"
            initial matrix:
            [ 0  1]
            [-2  4]

            scaled rows:
            [-2  4]
            [ 0  1]

            sheared rows:
            [-2  4]
            [ 0  1]

            reduced rows:
            [ 1 -2]
            [ 0  1]

            scaled rows:
            [ 1 -2]
            [ 0  1]

            sheared rows:
            [1 0]
            [0 1]

            reduced rows:
            [1 0]
            [0 1]

        "#]]
        .assert_eq(&trace.to_string());
    }

    #[test]
    fn test_fractional_entries() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();
        let mut mat = Matrix::from_rows([[half.clone(), third.clone()], [third, half]]).unwrap();
        reduce_to_rref(&mut mat).unwrap();
        assert_eq!(mat, matrix([[1, 0], [0, 1]]));
    }

    #[test]
    fn test_zero_and_empty() {
        let mut mat = Matrix::zeros(2, 3);
        let trace = reduce_to_rref(&mut mat).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.pivot_steps(), 0);
        assert_eq!(mat, Matrix::zeros(2, 3));

        let mut mat = Matrix::zeros(0, 0);
        assert_eq!(reduce_to_rref(&mut mat).unwrap().len(), 1);
    }

    #[test]
    fn test_content() {
        let row = [2, -4, 6].map(Rational::from);
        assert_eq!(content(&row), Ok(Some(Rational::from(2))));

        let row = [
            Rational::new(1, 2).unwrap(),
            Rational::new(3, 4).unwrap(),
            Rational::zero(),
        ];
        assert_eq!(content(&row), Ok(Some(Rational::new(1, 4).unwrap())));

        assert_eq!(content(&vec![Rational::zero(); 3]), Ok(None));
    }

    /// Checks the shape of a matrix in reduced row echelon form.
    fn assert_rref(mat: &Matrix) {
        let mut last_pivot = None;
        let mut seen_zero_row = false;
        for i in 0..mat.rows() {
            match mat.first_nonzero(i).unwrap() {
                None => seen_zero_row = true,
                Some(j) => {
                    assert!(!seen_zero_row, "nonzero row below a zero row");
                    assert!(last_pivot.map_or(true, |p| p < j), "pivots not moving right");
                    assert!(mat[(i, j)].is_one());
                    let column = mat.column(j).unwrap();
                    assert_eq!(column.iter().filter(|x| !x.is_zero()).count(), 1);
                    last_pivot = Some(j);
                }
            }
        }
    }

    #[test]
    fn test_entries_grow_past_i64() {
        let mut mat = matrix([
            [-75, 45, -93, -42, 23, 69],
            [-17, 88, -57, 46, 45, -42],
            [66, -96, 13, 60, 76, -84],
            [-78, -57, -83, 38, -67, -89],
            [82, 60, 54, -82, -9, -77],
            [-10, 42, 18, 82, -82, -46],
        ]);
        reduce_to_rref(&mut mat).unwrap();
        assert_rref(&mat);

        let rows: Vec<Vec<i64>> = (0..7)
            .map(|i| (0..7).map(|j| (i * 7 + j) * 7919 % 199 - 99).collect())
            .collect();
        let mut mat = Matrix::from_rows(rows).unwrap();
        let trace = reduce_to_rref(&mut mat).unwrap();
        assert_rref(&mat);
        assert_eq!(trace.last_of(Phase::Reduced), Some(&mat));
    }

    proptest! {
        #[test]
        fn test_result_is_rref(
            rows in (1usize..8, 1usize..8).prop_flat_map(|(n, m)| {
                prop::collection::vec(prop::collection::vec(-100i64..100, m), n)
            })
        ) {
            let mut mat = Matrix::from_rows(rows).unwrap();
            let trace = reduce_to_rref(&mut mat).unwrap();
            assert_rref(&mat);
            prop_assert_eq!(trace.len(), 1 + 3 * trace.pivot_steps());
            prop_assert_eq!(trace.last().map(|(_, m)| m), Some(&mat));
        }
    }
}
