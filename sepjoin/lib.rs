//! Delimiter-correct rendering of sequences.
//!
//! The core operation is [joining](crate::join): writing the elements of any ordered sequence
//! to a sink with exactly one delimiter between neighbours and none at the boundaries.
//! On top of that the crate provides [bracketing helpers](crate::display),
//! reusable [rendering styles](crate::style::Style), traversal of
//! [cursor ranges](crate::range::Span), [lazy sequences](crate::lazy::Lazy) and a
//! [list literal parser](crate::parsing).

#![warn(missing_docs)]

pub mod display;
pub mod join;
pub mod lazy;
pub mod parsing;
pub mod range;
pub mod style;
