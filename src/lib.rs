#![no_std]

/*!
Low-level tokenization of command-line arguments. Takes care of splitting a
raw argument vector into option keys, plain values, and the lone `-` stdio
marker, without knowing anything about which options a program actually
accepts. No type handling happens here; callers get strings back and parse
them however they need.

The entry point is [`Tokenizer`], which owns the not-yet-consumed arguments
and yields one classified [`Token`] per call to
[`next_token`][Tokenizer::next_token]. After a [`Token::Key`], the caller
decides whether that key takes a value and pulls it with
[`take_value`][Tokenizer::take_value] or
[`take_attached_value`][Tokenizer::take_attached_value]:

```
use quibble::{Token, Tokenizer};

let mut tokenizer = Tokenizer::new(["-o", "out.txt", "input.txt"]);

while let Some(token) = tokenizer.next_token().unwrap() {
    match token {
        Token::Key(key) => match key.as_str() {
            "o" | "output" => {
                let value = tokenizer.take_value();
                assert_eq!(value.as_deref(), Some("out.txt"));
            }
            _ => {}
        },
        Token::Value(value) => assert_eq!(value, "input.txt"),
        Token::Io => { /* read stdin */ }
    }
}
```
*/

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod token;
mod tokenizer;

pub use error::MalformedArguments;
pub use token::Token;
pub use tokenizer::Tokenizer;
