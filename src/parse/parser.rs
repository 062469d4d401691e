use super::lexer::*;
use crate::common::*;
use crate::dice::Dice;
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: NonEmpty<TokenKind>,
    },
    UnexpectedString {
        expected: NonEmpty<TokenKind>,
    },
    IntegerOverflow,
    TrailingInput,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Some(found),
                expected,
            } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedToken {
                found: None,
                expected,
            } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                write!(f, "expected ")?;
                fmt_expected(expected, f)
            }
            Self::IntegerOverflow => f.write_str("number too large"),
            Self::TrailingInput => f.write_str("unexpected input after dice"),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s) }
    }

    pub fn parse(mut self) -> PResult<Dice> {
        let dice = self.parse_dice()?;
        if self.lexer.peek().is_some() {
            self.lexer.next();
            return self.error(ParseErrorKind::TrailingInput);
        }
        Ok(dice)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            self.unexpected_token(vec1![expected])
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: NonEmpty<TokenKind>) -> PResult<T> {
        let found = self.lexer.next();
        if matches!(found, Some(TokenKind::Error)) {
            self.error(ParseErrorKind::UnexpectedString { expected })
        } else {
            self.error(ParseErrorKind::UnexpectedToken { found, expected })
        }
    }

    fn parse_integer(&mut self) -> PResult<Int> {
        self.consume(TokenKind::Integer)?;
        // the lexer only accepts digits, so the only failure left is overflow
        match self.lexer.slice().parse() {
            Ok(x) => Ok(x),
            Err(_) => self.error(ParseErrorKind::IntegerOverflow),
        }
    }

    fn parse_dice(&mut self) -> PResult<Dice> {
        let count = if self.matches(TokenKind::Die) {
            1
        } else if self.matches(TokenKind::Integer) {
            self.parse_integer()?
        } else {
            return self.unexpected_token(vec1![TokenKind::Integer, TokenKind::Die]);
        };
        self.consume(TokenKind::Die)?;
        let faces = self.parse_integer()?;
        Ok(Dice::new(count, faces))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PResult<Dice> {
        Parser::new(s).parse()
    }

    fn kind(s: &str) -> ParseErrorKind {
        parse(s).unwrap_err().kind
    }

    #[test]
    fn test_parse_dice() {
        assert_eq!(parse("2d6"), Ok(Dice::new(2, 6)));
        assert_eq!(parse("1d20"), Ok(Dice::new(1, 20)));
        assert_eq!(parse("d20"), Ok(Dice::new(1, 20)));
        assert_eq!(parse("14D4"), Ok(Dice::new(14, 4)));
        assert_eq!(parse("  3 d 8\n"), Ok(Dice::new(3, 8)));
    }

    #[test]
    fn test_parse_zero_is_not_a_parse_error() {
        assert_eq!(parse("0d6"), Ok(Dice::new(0, 6)));
        assert_eq!(parse("2d0"), Ok(Dice::new(2, 0)));
    }

    #[test]
    fn test_parse_missing_parts() {
        assert_eq!(
            kind(""),
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec1![TokenKind::Integer, TokenKind::Die],
            }
        );
        assert_eq!(
            kind("6"),
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec1![TokenKind::Die],
            }
        );
        assert_eq!(
            kind("2d"),
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec1![TokenKind::Integer],
            }
        );
        assert_eq!(
            kind("2dd6"),
            ParseErrorKind::UnexpectedToken {
                found: Some(TokenKind::Die),
                expected: vec1![TokenKind::Integer],
            }
        );
    }

    #[test]
    fn test_parse_bad_string() {
        let err = parse("2x6").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedString {
                expected: vec1![TokenKind::Die],
            }
        );
        assert_eq!(
            kind("-2d6"),
            ParseErrorKind::UnexpectedString {
                expected: vec1![TokenKind::Integer, TokenKind::Die],
            }
        );
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(kind("99999999999d6"), ParseErrorKind::IntegerOverflow);
        assert_eq!(kind("2d99999999999"), ParseErrorKind::IntegerOverflow);
    }

    #[test]
    fn test_parse_trailing() {
        assert_eq!(kind("2d6 4"), ParseErrorKind::TrailingInput);
        assert_eq!(kind("2d6d6"), ParseErrorKind::TrailingInput);
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse("2x6").unwrap_err();
        assert!(err.to_string().ends_with("expected 'd'"));
        let err = parse("").unwrap_err();
        assert!(err
            .to_string()
            .ends_with("unexpected end of input, expected <integer> or 'd'"));
    }
}
