//! Reusable rendering configuration

use crate::{
    display,
    join::{Strategy, write_io, write_joined},
};
use std::{
    fmt::{self, Display, Write},
    io,
    str::FromStr,
};

/// When to end the rendering with a newline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Terminator {
    /// Never write a newline
    #[default]
    None,

    /// Always write a newline, even for an empty sequence
    Always,

    /// Write a newline only if at least one element was written
    NonEmpty,
}

impl Terminator {
    const fn applies(self, written: usize) -> bool {
        match self {
            Terminator::None => false,
            Terminator::Always => true,
            Terminator::NonEmpty => written > 0,
        }
    }
}

impl Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminator::None => write!(f, "none"),
            Terminator::Always => write!(f, "always"),
            Terminator::NonEmpty => write!(f, "non-empty"),
        }
    }
}

impl FromStr for Terminator {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Terminator::None),
            "always" => Ok(Terminator::Always),
            "non-empty" => Ok(Terminator::NonEmpty),
            _ => Err("Unknown terminator, expected 'none', 'always' or 'non-empty'"),
        }
    }
}

/// How a sequence is rendered: delimiter, enclosing pair, algorithm and line terminator.
///
/// ```
/// use sepjoin::style::{Style, Terminator};
///
/// let style = Style::new(" , ").enclosed("[", "]").terminator(Terminator::NonEmpty);
/// assert_eq!(style.render([1, 2, 3]).unwrap(), "[1 , 2 , 3]\n");
/// assert_eq!(style.render(Vec::<i32>::new()).unwrap(), "[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Style {
    /// Written between adjacent elements
    pub delimiter: String,

    /// Written before the first element
    pub open: String,

    /// Written after the last element
    pub close: String,

    #[allow(missing_docs)]
    pub strategy: Strategy,

    #[allow(missing_docs)]
    pub terminator: Terminator,
}

impl Default for Style {
    fn default() -> Self {
        Style::new(", ")
    }
}

impl Style {
    /// Plain style with given delimiter, no enclosing pair and no terminator
    pub fn new(delimiter: impl Into<String>) -> Self {
        Style {
            delimiter: delimiter.into(),
            open: String::new(),
            close: String::new(),
            strategy: Strategy::default(),
            terminator: Terminator::default(),
        }
    }

    /// Surround the rendering with `open` and `close`
    #[must_use]
    pub fn enclosed(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Write `items` to a [`fmt::Write`] sink
    ///
    /// # Errors
    /// When writing or an element's [`Display`] fails
    pub fn write<W, I>(&self, w: &mut W, items: I) -> fmt::Result
    where
        W: Write + ?Sized,
        I: IntoIterator,
        I::Item: Display,
    {
        let mut written = 0usize;
        display::enclosed(w, &self.open, &self.close, |w| {
            let items = items.into_iter().inspect(|_| written += 1);
            write_joined(w, items, &self.delimiter, self.strategy)
        })?;
        if self.terminator.applies(written) {
            w.write_char('\n')?;
        }
        Ok(())
    }

    /// Render `items` into a new string
    ///
    /// # Errors
    /// When an element's [`Display`] fails
    pub fn render<I>(&self, items: I) -> Result<String, fmt::Error>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut out = String::new();
        self.write(&mut out, items)?;
        Ok(out)
    }

    /// Write `items` to an [`io::Write`] sink
    ///
    /// # Errors
    /// See [`print_joined`](crate::join::print_joined)
    pub fn print<S, I>(&self, sink: S, items: I) -> io::Result<()>
    where
        S: io::Write,
        I: IntoIterator,
        I::Item: Display,
    {
        write_io(sink, |w| self.write(w, items))
    }
}
