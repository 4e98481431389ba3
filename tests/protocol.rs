//! Drive the tokenizer the way a real option dispatch table does: loop on
//! `next_token`, match on the key, and pull values between iterations.

use quibble::{MalformedArguments, Token, Tokenizer};

#[derive(Debug, Default, PartialEq)]
struct Invocation {
    verbosity: u32,
    lines: Option<String>,
    output: Option<String>,
    color: Option<String>,
    inputs: Vec<Input>,
}

#[derive(Debug, PartialEq)]
enum Input {
    File(String),
    Stdio,
}

/// A dispatch table for a made-up utility: repeatable `-v`, two
/// required-value options, one attached-only optional value, positionals,
/// and the `-` stdin marker.
fn parse(args: &[&str]) -> Result<Invocation, MalformedArguments> {
    let mut tokenizer = Tokenizer::new(args.iter().copied());
    let mut invocation = Invocation::default();

    while let Some(token) = tokenizer.next_token()? {
        match token {
            Token::Key(key) => match key.as_str() {
                "v" | "verbose" => invocation.verbosity += 1,
                "n" | "lines" => invocation.lines = tokenizer.take_value(),
                "o" | "output" => invocation.output = tokenizer.take_value(),
                "color" => {
                    invocation.color = Some(
                        tokenizer
                            .take_attached_value()
                            .unwrap_or_else(|| "always".to_string()),
                    )
                }
                unrecognized => panic!("unrecognized option {unrecognized:?}"),
            },
            Token::Value(input) => invocation.inputs.push(Input::File(input)),
            Token::Io => invocation.inputs.push(Input::Stdio),
        }
    }

    Ok(invocation)
}

#[test]
fn full_invocation() {
    let invocation = parse(&[
        "-vv",
        "--output=build.log",
        "-n",
        "40",
        "--color",
        "input.txt",
        "--",
        "-weird-name",
    ])
    .unwrap();

    assert_eq!(
        invocation,
        Invocation {
            verbosity: 2,
            lines: Some("40".to_string()),
            output: Some("build.log".to_string()),
            // `--color input.txt` is the bare key followed by a
            // positional, not a key/value pair
            color: Some("always".to_string()),
            inputs: vec![
                Input::File("input.txt".to_string()),
                Input::File("-weird-name".to_string()),
            ],
        }
    );
}

#[test]
fn attached_color_value() {
    let invocation = parse(&["--color=never"]).unwrap();

    assert_eq!(invocation.color, Some("never".to_string()));
}

#[test]
fn stdin_marker_is_an_input() {
    let invocation = parse(&["-n10", "-"]).unwrap();

    assert_eq!(invocation.lines, Some("10".to_string()));
    assert_eq!(invocation.inputs, [Input::Stdio]);
}

#[test]
fn malformed_arguments_abort_the_dispatch_loop() {
    assert!(matches!(
        parse(&["-", "extra"]),
        Err(MalformedArguments::TrailingAfterStdio { .. })
    ));

    assert!(matches!(
        parse(&["--x"]),
        Err(MalformedArguments::LongOptionTooShort { .. })
    ));
}

#[test]
fn messages_name_the_offending_argument() {
    let error = parse(&["-", "extra"]).unwrap_err();
    assert!(error.to_string().contains("\"extra\""));

    let error = parse(&["--x"]).unwrap_err();
    assert!(error.to_string().contains("\"--x\""));
}
