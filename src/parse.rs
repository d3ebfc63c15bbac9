use crate::{Error, Matrix, Rational, Result};
use chumsky::prelude::*;
use num_bigint::BigInt;
use num_traits::One;
use std::str::FromStr;

type Extra<'a> = extra::Err<Rich<'a, char>>;

/// A fraction as written, before its denominator is checked and reduced.
type RawFraction = (BigInt, Option<BigInt>);

fn integer<'a>() -> impl Parser<'a, &'a str, BigInt, Extra<'a>> {
    just('-')
        .or_not()
        .then(text::int(10))
        .try_map(|(sign, digits): (Option<char>, &str), span| {
            let n: BigInt = digits.parse().map_err(|e| Rich::custom(span, e))?;
            Ok(if sign.is_some() { -n } else { n })
        })
}

/// Parses `n` or `n/d`.
fn fraction<'a>() -> impl Parser<'a, &'a str, RawFraction, Extra<'a>> {
    integer().then(just('/').padded().ignore_then(integer()).or_not())
}

/// Parses nested bracketed rows, e.g. `[[1, 2/3], [-4, 5]]`.
fn rows<'a>() -> impl Parser<'a, &'a str, Vec<Vec<RawFraction>>, Extra<'a>> {
    let row = fraction()
        .padded()
        .separated_by(just(','))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just('[').padded(), just(']').padded());

    row.separated_by(just(','))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just('[').padded(), just(']').padded())
}

fn parse_all<'a, T>(parser: impl Parser<'a, &'a str, T, Extra<'a>>, input: &'a str) -> Result<T> {
    parser
        .then_ignore(end())
        .parse(input)
        .into_result()
        .map_err(|errs| Error::Parse {
            input: input.to_owned(),
            reason: errs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        })
}

fn to_rational((numer, denom): RawFraction) -> Result<Rational> {
    Rational::new(numer, denom.unwrap_or_else(BigInt::one))
}

/// Parses a bare integer or `n/d`, surrounding whitespace allowed.
///
/// Malformed text is an [`Error::Parse`]; a zero denominator is an
/// [`Error::DivisionByZero`].
impl FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        to_rational(parse_all(fraction().padded(), s)?)
    }
}

/// Parses a literal of nested bracketed rows such as `[[1, 2/3], [-4, 5]]`.
impl FromStr for Matrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows = parse_all(rows(), s)?
            .into_iter()
            .map(|row| row.into_iter().map(to_rational).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Matrix::from_rows(rows)
    }
}
