//! Lexical analysis.
//!
//! Converts source text into a stream of tokens for the parser:
//!
//! - Tokenization driven by an ordered table of anchored regex patterns
//! - Reserved words (`if`, `for`, `zeros`, `print`, ...) and identifiers
//! - Integer, float and string literals
//! - Scalar, elementwise and assignment operators
//! - `#` comments and whitespace skipping
//! - Line/column tracking for error reporting

pub mod lexer;
pub mod tokens;
