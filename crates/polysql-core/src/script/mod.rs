//! Placeholder scripts.
//!
//! A script is SQL text with `:Name` placeholders. The scanner classifies
//! the text into spans so that placeholders inside string literals and
//! comments are never touched; the substitution engine then replaces the
//! remaining placeholders with dialect literals.

mod scanner;
mod span;
mod substitute;

pub use scanner::{tokenize, Scanner, Segment, SpanKind};
pub use span::Span;
pub use substitute::{substitute, Substitution};
