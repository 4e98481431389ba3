use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use quibble::{Token, Tokenizer};

mod error;

use error::{ColorModeError, OptionError};

#[derive(Debug, Default)]
struct Options {
    verbosity: u32,
    lines: Option<u64>,
    output: Option<PathBuf>,
    color: ColorMode,
    inputs: Vec<Input>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = ColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ColorModeError),
        }
    }
}

#[derive(Debug)]
enum Input {
    File(PathBuf),
    Stdin,
}

/// The option dispatch table: one `match` arm per recognized key, pulling
/// each key's value from the tokenizer before moving on to the next token.
fn parse_options(mut tokenizer: Tokenizer) -> anyhow::Result<Options> {
    let mut options = Options::default();

    while let Some(token) = tokenizer.next_token()? {
        match token {
            Token::Key(key) => match key.as_str() {
                "v" | "verbose" => options.verbosity += 1,

                "n" | "lines" => {
                    let value = tokenizer
                        .take_value()
                        .ok_or_else(|| OptionError::needs_value(&key))?;

                    options.lines = Some(
                        value
                            .parse()
                            .map_err(|err| OptionError::invalid(&key, &value, err))?,
                    );
                }

                "o" | "output" => {
                    let value = tokenizer
                        .take_value()
                        .ok_or_else(|| OptionError::needs_value(&key))?;

                    options.output = Some(PathBuf::from(value));
                }

                // `--color` alone means "force it on"; a mode only counts
                // if it's attached, so `--color auto` leaves `auto` to be
                // an input file
                "color" => {
                    options.color = match tokenizer.take_attached_value() {
                        None => ColorMode::Always,
                        Some(value) => value
                            .parse()
                            .map_err(|err| OptionError::invalid(&key, &value, err))?,
                    };
                }

                _ => return Err(OptionError::Unrecognized(key).into()),
            },

            Token::Value(input) => options.inputs.push(Input::File(input.into())),
            Token::Io => options.inputs.push(Input::Stdin),
        }
    }

    Ok(options)
}

fn main() -> anyhow::Result<()> {
    let options = parse_options(Tokenizer::from_env())
        .context("couldn't parse command line arguments")?;

    println!("{options:#?}");

    Ok(())
}
