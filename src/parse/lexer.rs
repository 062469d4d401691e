use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[token("d")]
    #[token("D")]
    Die,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "<integer>",
            Self::Die => "'d'",
            Self::Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_notation() {
        use TokenKind::*;
        assert_eq!(kinds("2d6"), vec![Integer, Die, Integer]);
        assert_eq!(kinds(" 10 D 20 "), vec![Integer, Die, Integer]);
        assert_eq!(kinds("d8"), vec![Die, Integer]);
        assert_eq!(kinds("2x6"), vec![Integer, Error, Integer]);
    }
}
