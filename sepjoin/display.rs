//! Display utilities

use crate::join::{Strategy, write_joined};
use std::fmt::{self, Display, Write};

/// Write `xs` separated by `", "`
#[inline]
pub fn commas<W, I>(w: &mut W, xs: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    write_joined(w, xs, ", ", Strategy::default())
}

/// Write `open`, then whatever `middle` writes, then `close`
pub fn enclosed<W>(
    w: &mut W,
    open: &str,
    close: &str,
    middle: impl FnOnce(&mut W) -> fmt::Result,
) -> fmt::Result
where
    W: Write + ?Sized,
{
    w.write_str(open)?;
    middle(w)?;
    w.write_str(close)?;
    Ok(())
}

#[allow(missing_docs)]
pub fn parens<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write + ?Sized,
{
    enclosed(w, "(", ")", middle)
}

#[allow(missing_docs)]
pub fn braces<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write + ?Sized,
{
    enclosed(w, "{", "}", middle)
}

#[allow(missing_docs)]
pub fn brackets<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write + ?Sized,
{
    enclosed(w, "[", "]", middle)
}

#[test]
fn nested_brackets() {
    let mut out = String::new();
    braces(&mut out, |w| {
        brackets(w, |w| commas(w, [1, 2, 3]))?;
        w.write_str(" | ")?;
        parens(w, |w| commas(w, Vec::<u8>::new()))
    })
    .unwrap();
    assert_eq!(out, "{[1, 2, 3] | ()}");
}

#[test]
fn middle_error_stops_before_close() {
    let mut out = String::new();
    assert!(brackets(&mut out, |_| Err(fmt::Error)).is_err());
    assert_eq!(out, "[");
}
