use alloc::string::String;

/**
A single classified unit pulled from the argument queue.

The classification is the variant itself; callers dispatch by pattern match
rather than by inspecting the text, so an argument that happens to *look*
like a control sequence (a positional named `--`, say, appearing after the
real `--`) can never be confused with one.

The key text never includes the leading hyphens: `--target` and `-t` arrive
as `Key("target")` and `Key("t")`.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A short or long option, such as `-v` or `--verbose`.
    Key(String),

    /// A positional argument, or anything at all once `--` has been seen.
    Value(String),

    /// The lone `-`, conventionally meaning "use stdin or stdout". Always
    /// the final token of a parse.
    Io,
}

impl Token {
    /// Get the extracted text, if this token carries any
    #[inline]
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Key(text) | Token::Value(text) => Some(text),
            Token::Io => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Token::Key(_))
    }
}
