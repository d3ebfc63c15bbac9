use crate::*;
use std::fmt::{Display, Formatter, Result, Write};

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

/// Formats a matrix one bracketed row per line, every entry right-aligned
/// to the width of the longest entry in the whole matrix.
impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let width = self
            .iter_rows()
            .flatten()
            .map(|x| x.to_string().len())
            .max()
            .unwrap_or(0);
        for row in self.iter_rows() {
            f.write_str(&row_to_string(row, width))?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

impl Phase {
    /// Returns the heading printed above a snapshot of this phase.
    pub fn heading(self) -> &'static str {
        match self {
            Phase::Initial => "initial matrix:",
            Phase::Scaled => "scaled rows:",
            Phase::Sheared => "sheared rows:",
            Phase::Reduced => "reduced rows:",
        }
    }
}

/// Formats each snapshot under its heading, separated by blank lines.
impl Display for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (phase, mat) in self {
            writeln!(f, "{}", phase.heading())?;
            writeln!(f, "{}", mat)?;
        }
        Ok(())
    }
}

/// Prepends spaces to a string until it is `width` characters long.
pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s)
}

/// Formats a row of entries in brackets, each padded to `width`.
pub fn row_to_string(row: &[Rational], width: usize) -> String {
    let entries: Vec<_> = row
        .iter()
        .map(|x| pad_left(&x.to_string(), width))
        .collect();
    format!("[{}]", entries.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use num_traits::Zero;

    #[test]
    fn test_rational() {
        assert_eq!(Rational::new(7, 2).unwrap().to_string(), "7/2");
        assert_eq!(Rational::new(-6, 4).unwrap().to_string(), "-3/2");
        assert_eq!(Rational::new(10, 2).unwrap().to_string(), "5");
        assert_eq!(Rational::zero().to_string(), "0");
    }

    #[test]
    fn test_padding() {
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_left("1234", 3), "1234");
        let row = [Rational::from(1), Rational::new(-1, 2).unwrap()];
        assert_eq!(row_to_string(&row, 4), "[   1 -1/2]");
    }

    #[test]
    fn test_matrix() {
        let mat = Matrix::from_rows([
            [Rational::from(1), Rational::new(-3, 4).unwrap()],
            [Rational::from(10), Rational::zero()],
        ])
        .unwrap();
        expect![[r#"
            [   1 -3/4]
            [  10    0]
        "#]]
        .assert_eq(&mat.to_string());

        assert_eq!(Matrix::zeros(0, 3).to_string(), "");
        assert_eq!(Matrix::zeros(2, 0).to_string(), "[]\n[]\n");
    }

    #[test]
    fn test_trace() {
        let mut mat = Matrix::from_rows([[2, 4], [1, 2]]).unwrap();
        let trace = reduce_to_rref(&mut mat).unwrap();
        expect![[r#"
            initial matrix:
            [2 4]
            [1 2]

            scaled rows:
            [2 4]
            [2 4]

            sheared rows:
            [2 4]
            [0 0]

            reduced rows:
            [1 2]
            [0 0]

        "#]]
        .assert_eq(&trace.to_string());
    }
}
