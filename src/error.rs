use alloc::string::String;

/**
The argument vector violated the shape rules of the command line itself.

These are lexical errors, raised before anyone knows (or needs to know)
which options the program accepts. They're fatal to the parse: the
tokenizer will keep refusing rather than resynchronize, and callers are
expected to report the message and exit nonzero.
*/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedArguments {
    /// A lone `-` is only meaningful as the final argument.
    #[error("the stdio marker \"-\" must be the last argument (found {trailing:?} after it)")]
    TrailingAfterStdio { trailing: String },

    /// A `--`-prefixed argument must carry at least two characters of
    /// key text.
    #[error("long option {option:?} needs at least two characters after \"--\"")]
    LongOptionTooShort { option: String },
}
