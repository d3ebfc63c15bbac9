use crate::{DimensionError, Rational, Result};
use num_traits::Zero;
use std::ops::Index;

/// A dense matrix of exact fractions, stored row by row.
///
/// Every cell owns its value, so clones are entry-wise independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<Rational>,
}

impl Matrix {
    /// Creates a `rows` by `columns` matrix of zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Matrix {
            rows,
            columns,
            data: vec![Rational::zero(); rows * columns],
        }
    }

    /// Creates a matrix from row data, inferring its shape.
    ///
    /// All rows must have the length of the first one. An empty iterator
    /// gives a 0x0 matrix.
    pub fn from_rows<R, T>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = T>,
        T: Into<Rational>,
    {
        let mut data = Vec::new();
        let mut row_n = 0;
        let mut col_n = 0;

        for (i, row) in rows.into_iter().enumerate() {
            let start = data.len();
            data.extend(row.into_iter().map(Into::into));
            let len = data.len() - start;
            if i == 0 {
                col_n = len;
            } else if len != col_n {
                return Err(DimensionError::Ragged {
                    row: i,
                    expected: col_n,
                    found: len,
                }
                .into());
            }
            row_n += 1;
        }

        Ok(Matrix {
            rows: row_n,
            columns: col_n,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i < self.rows {
            Ok(())
        } else {
            Err(DimensionError::RowOutOfBounds {
                index: i,
                rows: self.rows,
            }
            .into())
        }
    }

    fn check_column(&self, j: usize) -> Result<()> {
        if j < self.columns {
            Ok(())
        } else {
            Err(DimensionError::ColumnOutOfBounds {
                index: j,
                columns: self.columns,
            }
            .into())
        }
    }

    fn check_len(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(DimensionError::LengthMismatch { expected, found }.into())
        }
    }

    pub fn get(&self, i: usize, j: usize) -> Result<Rational> {
        self.check_row(i)?;
        self.check_column(j)?;
        Ok(self.data[i * self.columns + j].clone())
    }

    pub fn set(&mut self, i: usize, j: usize, value: Rational) -> Result<()> {
        self.check_row(i)?;
        self.check_column(j)?;
        self.data[i * self.columns + j] = value;
        Ok(())
    }

    pub fn row(&self, i: usize) -> Result<&[Rational]> {
        self.check_row(i)?;
        Ok(&self.data[i * self.columns..(i + 1) * self.columns])
    }

    pub fn set_row(&mut self, i: usize, values: &[Rational]) -> Result<()> {
        self.check_row(i)?;
        Self::check_len(self.columns, values.len())?;
        self.data[i * self.columns..(i + 1) * self.columns].clone_from_slice(values);
        Ok(())
    }

    pub fn column(&self, j: usize) -> Result<Vec<Rational>> {
        self.check_column(j)?;
        Ok((0..self.rows)
            .map(|i| self.data[i * self.columns + j].clone())
            .collect())
    }

    pub fn set_column(&mut self, j: usize, values: &[Rational]) -> Result<()> {
        self.check_column(j)?;
        Self::check_len(self.rows, values.len())?;
        for (i, value) in values.iter().enumerate() {
            self.data[i * self.columns + j] = value.clone();
        }
        Ok(())
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Rational]> {
        // `chunks` rejects a zero chunk size, and a matrix without columns
        // still has its rows.
        (0..self.rows).map(move |i| &self.data[i * self.columns..(i + 1) * self.columns])
    }

    /// Sets every entry to `value`.
    pub fn fill(&mut self, value: Rational) -> &mut Self {
        self.data.fill(value);
        self
    }

    /// Copies the values of a matrix of the same shape into this one.
    pub fn copy_from(&mut self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(DimensionError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            }
            .into());
        }
        self.data.clone_from_slice(&other.data);
        Ok(())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        let row_a = self.row(a)?.to_vec();
        let row_b = self.row(b)?.to_vec();
        self.set_row(a, &row_b)?;
        self.set_row(b, &row_a)
    }

    /// Multiplies every entry of row `i` by `scalar`.
    pub fn scale_row(&mut self, i: usize, scalar: Rational) -> Result<()> {
        let row: Vec<_> = self.row(i)?.iter().map(|x| x * &scalar).collect();
        self.set_row(i, &row)
    }

    /// Replaces row `dest` by `dest + scalar * src`.
    pub fn shear_row(&mut self, dest: usize, src: usize, scalar: Rational) -> Result<()> {
        let src_row = self.row(src)?;
        let row: Vec<_> = self
            .row(dest)?
            .iter()
            .zip(src_row)
            .map(|(d, s)| d + &scalar * s)
            .collect();
        self.set_row(dest, &row)
    }

    /// Returns the column index of the first nonzero entry of row `i`,
    /// or `None` if the row is all zero.
    pub fn first_nonzero(&self, i: usize) -> Result<Option<usize>> {
        Ok(self.row(i)?.iter().position(|x| !x.is_zero()))
    }

    /// Borrows this matrix with 1-based indices.
    pub fn one_based(&self) -> OneBased<&Matrix> {
        OneBased(self)
    }

    /// Mutably borrows this matrix with 1-based indices.
    pub fn one_based_mut(&mut self) -> OneBased<&mut Matrix> {
        OneBased(self)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (i, j): (usize, usize)) -> &Rational {
        assert!(
            i < self.rows && j < self.columns,
            "index ({i}, {j}) out of bounds for a {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.data[i * self.columns + j]
    }
}

/// A view of a matrix that takes and returns 1-based indices.
///
/// Storage stays 0-based; the view only shifts indices on the way in and
/// out, so index 0 is out of bounds.
#[derive(Debug)]
pub struct OneBased<M>(M);

/// Shifts a 1-based index down, mapping 0 to an index no matrix contains.
fn shift(index: usize) -> usize {
    index.checked_sub(1).unwrap_or(usize::MAX)
}

impl<M: AsRef<Matrix>> OneBased<M> {
    pub fn get(&self, i: usize, j: usize) -> Result<Rational> {
        self.0.as_ref().get(shift(i), shift(j))
    }

    pub fn row(&self, i: usize) -> Result<&[Rational]> {
        self.0.as_ref().row(shift(i))
    }

    pub fn column(&self, j: usize) -> Result<Vec<Rational>> {
        self.0.as_ref().column(shift(j))
    }

    pub fn first_nonzero(&self, i: usize) -> Result<Option<usize>> {
        Ok(self.0.as_ref().first_nonzero(shift(i))?.map(|j| j + 1))
    }
}

impl<M: AsRef<Matrix> + AsMut<Matrix>> OneBased<M> {
    pub fn set(&mut self, i: usize, j: usize, value: Rational) -> Result<()> {
        self.0.as_mut().set(shift(i), shift(j), value)
    }

    pub fn set_row(&mut self, i: usize, values: &[Rational]) -> Result<()> {
        self.0.as_mut().set_row(shift(i), values)
    }

    pub fn set_column(&mut self, j: usize, values: &[Rational]) -> Result<()> {
        self.0.as_mut().set_column(shift(j), values)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.0.as_mut().swap_rows(shift(a), shift(b))
    }

    pub fn scale_row(&mut self, i: usize, scalar: Rational) -> Result<()> {
        self.0.as_mut().scale_row(shift(i), scalar)
    }

    pub fn shear_row(&mut self, dest: usize, src: usize, scalar: Rational) -> Result<()> {
        self.0.as_mut().shear_row(shift(dest), shift(src), scalar)
    }
}

impl AsRef<Matrix> for Matrix {
    fn as_ref(&self) -> &Matrix {
        self
    }
}

impl AsMut<Matrix> for Matrix {
    fn as_mut(&mut self) -> &mut Matrix {
        self
    }
}
