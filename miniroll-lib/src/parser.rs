use crate::dice::{total_fits, End, Mode, RollSpec, Selection, MAX_DICE, PERCENTILE_SIDES};
use crate::error::{Error, Result};
use pest::error::ErrorVariant;
use pest::iterators::Pair;
use pest::Span;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "miniroll.pest"]
pub struct Parser;

impl Parser {
    /// Parse a whole notation string into a [`RollSpec`]
    pub fn parse_notation(input: &str) -> Result<RollSpec> {
        let pairs = <Self as pest::Parser<Rule>>::parse(Rule::notation, input)
            .map_err(|error| Error::syntax(input, error))?;
        let mut count = 1;
        let mut sides = PERCENTILE_SIDES;
        let mut sides_span = None;
        let mut selection = None;
        for pair in pairs.flat_map(|notation| notation.into_inner()) {
            match pair.as_rule() {
                Rule::count => {
                    count = Self::extract_number(input, &pair)?;
                    if count > MAX_DICE {
                        return Err(Self::out_of_range(
                            input,
                            pair.as_span(),
                            format!("exceeded max allowed amount of dice `{MAX_DICE}`"),
                        ));
                    }
                }
                Rule::sides => {
                    sides = Self::extract_number(input, &pair)?;
                    sides_span = Some(pair.as_span());
                }
                Rule::percentile => sides = PERCENTILE_SIDES,
                // only the last selector counts
                Rule::selector => selection = Some(Self::extract_selection(input, pair)?),
                _ => (),
            }
        }
        if let Some(span) = sides_span.filter(|_| !total_fits(count, sides)) {
            return Err(Self::out_of_range(
                input,
                span,
                format!("`{count}` dice of `{sides}` sides can total more than `{}`", u64::MAX),
            ));
        }
        let spec = RollSpec::new(count, sides)?;
        tracing::debug!(%input, %spec, "parsed dice notation");
        Ok(match selection {
            Some(selection) => spec.with_selection(selection),
            None => spec,
        })
    }

    fn extract_selection(input: &str, selector: Pair<Rule>) -> Result<Selection> {
        let mut mode = Mode::Drop;
        let mut end = End::Lowest;
        let mut count = 1;
        for pair in selector.into_inner() {
            match pair.as_rule() {
                Rule::drop_mode => mode = Mode::Drop,
                Rule::keep_mode => mode = Mode::Keep,
                Rule::lowest_end => end = End::Lowest,
                Rule::highest_end => end = End::Highest,
                Rule::select_count => count = Self::extract_number(input, &pair)?,
                _ => unreachable!("{:?}", pair),
            }
        }
        Selection::new(mode, end, count)
    }

    fn extract_number(input: &str, pair: &Pair<Rule>) -> Result<u64> {
        pair.as_str().parse::<u64>().map_err(|error| {
            Self::out_of_range(
                input,
                pair.as_span(),
                format!("number `{}` is out of range: {error}", pair.as_str()),
            )
        })
    }

    fn out_of_range(input: &str, span: Span, message: String) -> Error {
        let cause = pest::error::Error::new_from_span(ErrorVariant::CustomError { message }, span);
        Error::syntax(input, cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(notation: &str) -> RollSpec {
        Parser::parse_notation(notation).unwrap()
    }

    #[test]
    fn count_defaults_to_one() {
        let d10 = spec("d10");
        assert_eq!(1, d10.count());
        assert_eq!(10, d10.sides());
        assert!(d10.selection().is_none());
    }

    #[test]
    fn percentile_is_a_hundred_sides() {
        assert_eq!(100, spec("10d%").sides());
        assert_eq!(spec("1d%"), spec("1d100"));
    }

    #[test]
    fn selector_modes_and_ends() {
        let cases = [
            ("4d6dL", Mode::Drop, End::Lowest),
            ("4d6DL", Mode::Drop, End::Lowest),
            ("4d6-l", Mode::Drop, End::Lowest),
            ("4d6dh", Mode::Drop, End::Highest),
            ("4d6kH", Mode::Keep, End::Highest),
            ("4d6Kl", Mode::Keep, End::Lowest),
        ];
        for (notation, mode, end) in cases {
            let selection = *spec(notation).selection().unwrap();
            assert_eq!(mode, selection.mode(), "{notation}");
            assert_eq!(end, selection.end(), "{notation}");
            assert_eq!(1, selection.count(), "{notation}");
        }
    }

    #[test]
    fn select_count() {
        let selection = *spec("4d6kH3").selection().unwrap();
        assert_eq!(3, selection.count());
        let selection = *spec("8d6dL12").selection().unwrap();
        assert_eq!(12, selection.count());
    }

    #[test]
    fn last_selector_wins() {
        let selection = *spec("4d6kH3dL").selection().unwrap();
        assert_eq!(Selection::drop_lowest(1).unwrap(), selection);
        let selection = *spec("6d6dLkH2").selection().unwrap();
        assert_eq!(Selection::keep_highest(2).unwrap(), selection);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(spec("2d20-H"), spec(" \t2d20-H\n "));
    }

    #[test]
    fn rejects_malformed_notation() {
        for notation in [
            "", "d", "3d6x", "3d", "0d6", "03d6", "d1", "d0", "d05", "3D6", "3d6 dL", "3 d6",
            "4d6d", "4d6kH0", "4d6xH", "2d6+1d4", "d6!", "x3d6",
        ] {
            match Parser::parse_notation(notation) {
                Err(Error::Syntax { input, .. }) => assert_eq!(notation, input),
                other => panic!("`{notation}` should not parse: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        for notation in [
            "99999999999999999999999d6",
            "18446744073709551615d6",
            "10001d6",
            "2d18446744073709551615",
            "10000d1844674407370956",
            "4d6kH99999999999999999999",
        ] {
            let error = Parser::parse_notation(notation).unwrap_err();
            assert_eq!(Some(notation), error.input(), "{notation}");
        }
    }

    #[test]
    fn accepts_limits() {
        assert_eq!(MAX_DICE, spec("10000d6").count());
        assert_eq!(u64::MAX, spec("d18446744073709551615").sides());
        assert_eq!(u64::MAX / MAX_DICE, spec("10000d1844674407370955").sides());
    }

    #[test]
    fn whitespace_is_the_ecmascript_set() {
        assert_eq!(spec("3d6"), spec("\u{A0}3d6\u{3000}"));
        assert_eq!(spec("3d6"), spec("\u{FEFF}\u{2003}3d6\u{2029}\u{0B}"));
        assert!(Parser::parse_notation("\u{85}3d6").is_err());
        assert!(Parser::parse_notation("3d6\u{85}").is_err());
    }
}
