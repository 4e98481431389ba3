use alloc::collections::VecDeque;
use alloc::string::String;

use crate::error::MalformedArguments;
use crate::token::Token;

/**
A single-pass tokenizer over a command-line argument vector.

The `Tokenizer` owns a queue of the arguments it hasn't consumed yet, and
pulls one classified [`Token`] off the front per call to
[`next_token`][Self::next_token]. Composite arguments are consumed in
pieces: after extracting `a` from the bundle `-abc`, the remainder `-bc`
goes back on the front of the queue to be tokenized on the next call, and
the value of `--key=value` likewise waits at the front until the caller
asks for it.

Whether `--key value` is an option with an argument or a flag followed by a
positional is not something the tokenizer can decide on its own; only the
caller knows which keys take values. So every [`Token::Key`] leaves the
tokenizer in a brief "retrieval window": the caller may claim the key's
value with [`take_value`][Self::take_value] (the key always takes one) or
[`take_attached_value`][Self::take_attached_value] (only if one is
textually glued to the key), and the next `next_token` call closes the
window, letting whatever wasn't claimed be classified on its own.

A `Tokenizer` is built once per parse, consumed to exhaustion, and
discarded; construct a fresh one to parse again.
*/
#[derive(Debug, Clone)]
pub struct Tokenizer {
    args: VecDeque<String>,

    /// Cleared when a bare `--` is consumed; from then on, everything is a
    /// plain value.
    expecting_keys: bool,

    /// Set when the lone `-` is consumed. Terminal: nothing may follow it.
    expecting_io: bool,

    /// Set while the front of the queue is a synthetic bundle remainder
    /// (the `-bc` we re-injected out of `-abc`).
    in_bundle: bool,

    /// Set while the front of the queue is a value that was attached to
    /// the most recent key with `=`.
    before_optional: bool,
}

impl Tokenizer {
    /**
    Create a `Tokenizer` from the raw arguments, one string per argument.
    The list should *exclude* the name of the program, which is commonly
    passed as the first argument in the list.
     */
    #[must_use]
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            expecting_keys: true,
            expecting_io: false,
            in_bundle: false,
            before_optional: false,
        }
    }

    /**
    Create a `Tokenizer` from this process's own command line, skipping
    the program name.

    Panics if any argument isn't valid unicode, per [`std::env::args`];
    use [`new`][Self::new] with your own conversion if that matters.
     */
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    /**
    Pull and classify the next token.

    Returns `Ok(None)` once the arguments are exhausted (and keeps
    returning it thereafter). Otherwise the token is:

    - [`Token::Key`] for each option name: `--verbose` and `-v` yield the
      keys `verbose` and `v`, and the bundle `-xvf` yields `x`, `v`, `f`
      over three calls. An `=value` suffix is held back for
      [`take_value`][Self::take_value].
    - [`Token::Value`] for anything without a leading hyphen, and for
      *everything* after a bare `--` (which is consumed silently and
      never appears as a token itself).
    - [`Token::Io`] for the lone `-`, which must be the final argument.

    # Errors

    [`MalformedArguments`] if anything follows the lone `-`, or if a
    `--`-prefixed argument has fewer than two characters of key text
    (`--x`). Both are fatal; there is no resynchronization.
     */
    pub fn next_token(&mut self) -> Result<Option<Token>, MalformedArguments> {
        loop {
            let Some(front) = self.args.pop_front() else {
                return Ok(None);
            };

            if self.expecting_io {
                return Err(MalformedArguments::TrailingAfterStdio { trailing: front });
            }

            if front == "-" {
                self.expecting_keys = false;
                self.expecting_io = true;

                return match self.args.front() {
                    None => Ok(Some(Token::Io)),
                    Some(trailing) => Err(MalformedArguments::TrailingAfterStdio {
                        trailing: trailing.clone(),
                    }),
                };
            }

            // A bare argument is its own value, so consuming it closes any
            // retrieval window the same way `take_value` would.
            if !self.expecting_keys || !front.starts_with('-') {
                self.before_optional = false;
                return Ok(Some(Token::Value(front)));
            }

            if front == "--" {
                self.expecting_keys = false;
                continue;
            }

            return self.tokenize_key(front).map(Some);
        }
    }

    /// Extract the key from a hyphen-prefixed argument, re-injecting
    /// whatever part of it isn't the key itself.
    fn tokenize_key(&mut self, mut option: String) -> Result<Token, MalformedArguments> {
        // `in_bundle` describes the front of the queue, and the front is
        // what we just popped; only the bundle arm below re-sets it.
        self.in_bundle = false;

        // `-k=value` and `--key=value`: the text after the first `=` goes
        // back on the queue, flagged as attached to the key we're about
        // to emit. `--key=` attaches nothing.
        if let Some((key, attached)) = split_once(&option, b'=') {
            let key_len = key.len();
            let attached = String::from(attached);
            option.truncate(key_len);

            if !attached.is_empty() {
                self.before_optional = true;
                self.args.push_front(attached);
            }
        }

        if option.starts_with("--") {
            return match option.len() < 4 {
                true => Err(MalformedArguments::LongOptionTooShort { option }),
                false => Ok(Token::Key(option.split_off(2))),
            };
        }

        let Some(first) = option[1..].chars().next() else {
            // `-=value` leaves a bare `-` once the value is split off;
            // surface it as an empty key rather than indexing past it.
            return Ok(Token::Key(String::new()));
        };

        let tail_start = 1 + first.len_utf8();

        match option.len() == tail_start {
            // `-k`: a plain short option
            true => Ok(Token::Key(option.split_off(1))),

            // `-abc`: emit `a` now, and re-form the rest into the shorter
            // bundle `-bc` at the front of the queue
            false => {
                let mut remainder = String::with_capacity(option.len() - tail_start + 1);
                remainder.push('-');
                remainder.push_str(&option[tail_start..]);

                self.args.push_front(remainder);
                self.in_bundle = true;
                Ok(Token::Key(first.into()))
            }
        }
    }

    /**
    Claim the value for the key that [`next_token`][Self::next_token] just
    emitted. Call this for keys that always take a value.

    The value is the rest of the key's own argument when one is glued on
    (`-kvalue`, `-k=value`, `--key=value`), and the next argument in the
    queue otherwise (`-k value`, `--key value`). Returns `None` when
    there's nothing left, or when the next argument is hyphen-prefixed and
    therefore unambiguously another key rather than this key's value.
     */
    pub fn take_value(&mut self) -> Option<String> {
        self.before_optional = false;

        let front = self.args.front()?;

        if front.starts_with('-') && !self.in_bundle {
            return None;
        }

        let mut value = self.args.pop_front()?;

        if self.in_bundle {
            self.in_bundle = false;

            // The bundle remainder always carries the hyphen we re-formed
            // it with; the value is everything behind it.
            debug_assert!(value.starts_with('-'));
            value.remove(0);
        }

        Some(value)
    }

    /**
    Claim the value for the key that [`next_token`][Self::next_token] just
    emitted, but only if it's textually inseparable from the key: glued on
    as `-kvalue` or attached with `=`. Call this for keys whose value is
    optional.

    Unlike [`take_value`][Self::take_value], this never consumes a
    *separate* following argument; `--color auto` is the key `color`
    followed by the positional `auto`. Callers that know better can still
    call `take_value` instead.
     */
    pub fn take_attached_value(&mut self) -> Option<String> {
        match self.before_optional || self.in_bundle {
            true => self.take_value(),
            false => None,
        }
    }
}

fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}
