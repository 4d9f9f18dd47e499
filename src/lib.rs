//! A pretty printing library for documents with optional line breaks,
//! grouping, and indentation anchored where each scope opens.
//!
//! You build a [`Doc`] from five primitives (literal text, conditional
//! break points, concatenation, breaking scopes called groups, and
//! indentation scopes called nests) and render it with [`pretty_print`],
//! which emits a string that fits within a target page width where
//! possible, breaking lines at the designated points when not.
//!
//! The primitives and the algorithm are due originally to Oppen's
//! [Prettyprinting], in the streaming reformulation from Kiselyov, Peyton
//! Jones and Sabry's [Lazy v. Yield], with two extensions: line breaks
//! carry a `tail` rendered at the end of the broken line, and indentation
//! is anchored at the column where a nest opens rather than given as a
//! fixed offset. Rather than limiting lookahead to the page width, the
//! engine is free to buffer a whole group; in exchange it makes a single
//! pass and its memory stays bounded by the largest group.
//!
//! [Prettyprinting]: https://dl.acm.org/doi/10.1145/357114.357115
//! [Lazy v. Yield]: https://okmij.org/ftp/continuations/PPYield/yield-pp.pdf
//!
//! # Quick Reference
//!
//! - Build documents with the functions in [`constructors`]: [`text`],
//!   [`cond`], [`concat`], [`group`], [`nest`], and the shared documents
//!   [`empty`], [`br`], and [`dot`].
//! - Assemble common shapes with the functions in [`combinators`]:
//!   argument lists, comma-separated lists, dotted chains.
//! - Render with [`pretty_print`].
//!
//! [`text`]: constructors::text
//! [`cond`]: constructors::cond
//! [`concat`]: constructors::concat
//! [`group`]: constructors::group
//! [`nest`]: constructors::nest
//! [`empty`]: constructors::empty
//! [`br`]: constructors::br
//! [`dot`]: constructors::dot
//!
//! # Example
//!
//! ```
//! use streaming_pretty_printer::combinators::{dotted_list, funcall};
//! use streaming_pretty_printer::constructors::text;
//! use streaming_pretty_printer::pretty_print;
//!
//! let chain = dotted_list([text("table"), text("filter"), text("count")]);
//! assert_eq!(pretty_print(80, &chain), "table.filter.count");
//! assert_eq!(pretty_print(10, &chain), "table.filter\n     .count");
//! ```

mod annotate;
mod correct;
mod doc;
mod geometry;
mod oracle;
mod pretty_print;
mod stream;

pub mod combinators;
pub mod constructors;

pub use doc::Doc;
pub use geometry::{str_width, Width};
pub use pretty_print::pretty_print;

pub mod testing {
    pub use super::oracle::oracular_pretty_print;
}
