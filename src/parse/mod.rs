mod lexer;
mod parser;

pub use lexer::TokenKind;
pub use parser::{ParseError, ParseErrorKind};

use crate::dice::Dice;

/// Parses dice notation such as `"2d6"`. An omitted count means one die.
pub(crate) fn parse(s: &str) -> Result<Dice, ParseError> {
    parser::Parser::new(s).parse()
}
