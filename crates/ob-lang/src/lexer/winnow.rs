use winnow::combinator::{alt, cut_err, repeat, repeat_till};
use winnow::token::{any, literal, take_till, take_while};
use winnow::{ModalResult, Parser};

pub(crate) const SYMBOLS: &str = "()*.:;";

/// Skips blanks, control characters and `(* ... *)` comments.
pub(crate) fn ws(input: &mut &str) -> ModalResult<()> {
    repeat::<_, _, (), _, _>(0.., alt((whitespace, comment))).parse_next(input)?;
    Ok(())
}

pub(crate) fn whitespace(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c <= ' ')
        .map(|_| ())
        .parse_next(input)
}

/// `(* ... *)`, nesting allowed.
pub(crate) fn comment(input: &mut &str) -> ModalResult<()> {
    literal("(*").parse_next(input)?;
    let _: ((), &str) = cut_err(repeat_till(
        0..,
        alt((comment, take_till(1.., ['(', '*']).void(), any.void())),
        literal("*)"),
    ))
    .parse_next(input)?;
    Ok(())
}

pub(crate) fn identifier<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        take_while(1, |c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_ascii_alphanumeric()),
    )
        .take()
        .parse_next(input)
}

pub(crate) fn digits<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)
}

pub(crate) fn symbol(input: &mut &str) -> ModalResult<char> {
    take_while(1, |c: char| SYMBOLS.contains(c))
        .map(|s: &str| s.chars().next().unwrap_or_default())
        .parse_next(input)
}
