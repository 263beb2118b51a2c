//! Joining sequences with a delimiter.
//!
//! Two algorithms are available, see [`Strategy`]. They differ only in how many branches are
//! taken per element and always produce the same bytes.
//!
//! ```
//! use sepjoin::join::{format_joined, JoinExt};
//!
//! assert_eq!(format_joined(&[1, 2, 3], " , ").unwrap(), "1 , 2 , 3");
//! assert_eq!([1.1, 2.2].iter().joined("-").to_string(), "1.1-2.2");
//! ```

use std::{
    fmt::{self, Display, Write},
    io,
    str::FromStr,
};

/// Algorithm used to decide where delimiters go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Track whether the first element was written and check it before every element.
    #[default]
    BoundaryFlag,

    /// Write the first element unconditionally, then prefix every remaining element with the
    /// delimiter. Only one branch for the whole sequence.
    PeelFirst,
}

impl Strategy {
    /// All available strategies
    pub const ALL: [Strategy; 2] = [Strategy::BoundaryFlag, Strategy::PeelFirst];
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BoundaryFlag => write!(f, "boundary-flag"),
            Strategy::PeelFirst => write!(f, "peel-first"),
        }
    }
}

impl FromStr for Strategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boundary-flag" => Ok(Strategy::BoundaryFlag),
            "peel-first" => Ok(Strategy::PeelFirst),
            _ => Err("Unknown strategy, expected 'boundary-flag' or 'peel-first'"),
        }
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Strategy {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if <bool as quickcheck::Arbitrary>::arbitrary(g) {
            Strategy::BoundaryFlag
        } else {
            Strategy::PeelFirst
        }
    }
}

/// Write `items` separated by `delimiter`, formatting each element with `fmt_item`.
///
/// Nothing is written for an empty sequence. The first error returned by `fmt_item` or by the
/// writer stops the traversal and is returned as is; output written up to that point stays in
/// the sink.
///
/// # Errors
/// When writing or `fmt_item` fails
pub fn write_joined_with<W, I, F>(
    w: &mut W,
    items: I,
    delimiter: &str,
    strategy: Strategy,
    mut fmt_item: F,
) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    F: FnMut(&mut W, I::Item) -> fmt::Result,
{
    match strategy {
        Strategy::BoundaryFlag => {
            let mut first = true;
            for item in items {
                if !first {
                    w.write_str(delimiter)?;
                }
                fmt_item(w, item)?;
                first = false;
            }
        }
        Strategy::PeelFirst => {
            let mut items = items.into_iter();
            if let Some(head) = items.next() {
                fmt_item(w, head)?;
                for item in items {
                    w.write_str(delimiter)?;
                    fmt_item(w, item)?;
                }
            }
        }
    }
    Ok(())
}

/// Write `items` separated by `delimiter` using their [`Display`] implementation
///
/// # Errors
/// When writing or an element's [`Display`] fails
#[inline]
pub fn write_joined<W, I>(w: &mut W, items: I, delimiter: &str, strategy: Strategy) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    write_joined_with(w, items, delimiter, strategy, |w, item| write!(w, "{}", item))
}

/// Render `items` separated by `delimiter` into a new string
///
/// # Errors
/// When any element's [`Display`] implementation fails
pub fn format_joined<I>(items: I, delimiter: &str) -> Result<String, fmt::Error>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    write_joined(&mut out, items, delimiter, Strategy::default())?;
    Ok(out)
}

/// Write `items` separated by `delimiter` to an [`io::Write`] sink, e.g. standard output
///
/// No line terminator is written.
///
/// # Errors
/// I/O errors of the sink are returned unchanged. A failing element [`Display`] is reported as
/// an [`io::Error`] wrapping [`fmt::Error`].
pub fn print_joined<S, I>(sink: S, items: I, delimiter: &str) -> io::Result<()>
where
    S: io::Write,
    I: IntoIterator,
    I::Item: Display,
{
    write_io(sink, |w| {
        write_joined(w, items, delimiter, Strategy::default())
    })
}

/// [`fmt::Write`] view of an [`io::Write`] sink that remembers the underlying I/O error
pub(crate) struct IoSink<S> {
    inner: S,
    error: Option<io::Error>,
}

impl<S> Write for IoSink<S>
where
    S: io::Write,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Run `render` against `sink`, recovering the I/O error that caused a [`fmt::Error`]
pub(crate) fn write_io<S, F>(sink: S, render: F) -> io::Result<()>
where
    S: io::Write,
    F: FnOnce(&mut IoSink<S>) -> fmt::Result,
{
    let mut adapter = IoSink {
        inner: sink,
        error: None,
    };
    match render(&mut adapter) {
        Ok(()) => Ok(()),
        Err(fmt::Error) => Err(adapter
            .error
            .take()
            .unwrap_or_else(|| io::Error::other(fmt::Error))),
    }
}

/// Lazily joined sequence, rendered when displayed
///
/// The sequence is cloned on every formatting so it can be displayed more than once.
#[derive(Debug, Clone)]
pub struct Joined<'d, I> {
    items: I,
    delimiter: &'d str,
    strategy: Strategy,
}

impl<'d, I> Joined<'d, I> {
    /// Wrap `items` to be displayed with `delimiter` between them
    pub const fn new(items: I, delimiter: &'d str) -> Self {
        Joined {
            items,
            delimiter,
            strategy: Strategy::BoundaryFlag,
        }
    }

    /// Use a different joining strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl<I> Display for Joined<'_, I>
where
    I: IntoIterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.items.clone(), self.delimiter, self.strategy)
    }
}

/// Extension trait to join iterators in `format!` arguments
pub trait JoinExt: Iterator + Sized {
    /// Display elements with `delimiter` between them
    fn joined(self, delimiter: &str) -> Joined<'_, Self> {
        Joined::new(self, delimiter)
    }
}

impl<I> JoinExt for I where I: Iterator {}
