//! Token definitions for filter expression lexical analysis

/// Tokens of the filter DSL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Bare identifier, possibly containing `*` (`id`, `eco*`, `*`, `**`)
    Identifier(String),
    /// Quoted literal, always an exact name
    Quoted(String),
    /// Sibling separator (,)
    Comma,
    /// Group separator (|)
    Pipe,
    /// Dot path separator (.)
    Dot,
    /// Negation prefix (-)
    Minus,
    /// Nested block start ({)
    LeftBrace,
    /// Nested block end (})
    RightBrace,
    /// Group start (()
    LeftParen,
    /// Group end ())
    RightParen,
    /// End of input
    EOF,
}

impl Token {
    /// Short description used in error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Token::Identifier(name) => format!("identifier '{name}'"),
            Token::Quoted(name) => format!("quoted name '{name}'"),
            Token::Comma => "','".to_string(),
            Token::Pipe => "'|'".to_string(),
            Token::Dot => "'.'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::LeftBrace => "'{'".to_string(),
            Token::RightBrace => "'}'".to_string(),
            Token::LeftParen => "'('".to_string(),
            Token::RightParen => "')'".to_string(),
            Token::EOF => "end of input".to_string(),
        }
    }

    /// Whether the token can start a selector
    #[inline]
    #[must_use]
    pub fn starts_selector(&self) -> bool {
        matches!(self, Token::Identifier(_) | Token::Quoted(_))
    }
}

/// Token with the character offset where it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

impl Spanned {
    #[inline]
    #[must_use]
    pub fn new(token: Token, offset: usize) -> Self {
        Self { token, offset }
    }
}
