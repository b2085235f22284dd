use argyle_derive::argyle_error;
use std::borrow::Cow;

#[argyle_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    raw.parse::<u32>().context("parsing the demo value")
}

fn bubble(raw: &str) -> Result<u32, DemoError> {
    let value: u32 = raw.parse()?;
    if value == 0 {
        return Err("zero is not allowed".into());
    }
    Ok(value)
}

fn main() {
    assert_eq!(parse("7").ok(), Some(7));

    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (parsing the demo value): "));

    let err = bubble("0").context("bubbling").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (bubbling): zero is not allowed");

    let err: DemoError = String::from("owned").into();
    assert!(matches!(err, DemoError::Internal { context: None, .. }));
}
