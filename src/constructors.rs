//! Constructors for the document primitives, plus a few shared documents
//! that come up constantly.

use crate::doc::{Doc, DocNode};
use once_cell::sync::Lazy;
use std::sync::Arc;

static EMPTY: Lazy<Doc> = Lazy::new(|| text(""));
static BR: Lazy<Doc> = Lazy::new(|| cond(" ", ""));
static DOT: Lazy<Doc> = Lazy::new(|| cond(".", "."));

/// Literal text. Must not contain a newline.
pub fn text(s: impl Into<String>) -> Doc {
    Doc(Arc::new(DocNode::Text(s.into())))
}

/// A conditional break point: `small` when rendered flat, or a newline,
/// indentation, and `cont` when broken.
pub fn cond(small: impl Into<String>, cont: impl Into<String>) -> Doc {
    cond_with_tail(small, cont, "")
}

/// Like [`cond`], but when broken also renders `tail` at the end of the
/// line being broken. `tail` never appears in flat output.
pub fn cond_with_tail(
    small: impl Into<String>,
    cont: impl Into<String>,
    tail: impl Into<String>,
) -> Doc {
    Doc(Arc::new(DocNode::Cond {
        small: small.into(),
        cont: cont.into(),
        tail: tail.into(),
    }))
}

/// The given documents, one after another.
pub fn concat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    Doc(Arc::new(DocNode::Concat(docs.into_iter().collect())))
}

/// A breaking scope: when rendering, either every cond directly inside
/// `child` renders flat, or every one of them breaks.
pub fn group(child: Doc) -> Doc {
    Doc(Arc::new(DocNode::Group(child)))
}

/// An indentation scope: breaks inside `child` indent their continuation
/// lines to the column at which this scope was opened.
pub fn nest(child: Doc) -> Doc {
    Doc(Arc::new(DocNode::Nest(child)))
}

/// The empty document.
pub fn empty() -> Doc {
    EMPTY.clone()
}

/// A breakable space: a single space when flat, a bare newline-and-indent
/// when broken.
pub fn br() -> Doc {
    BR.clone()
}

/// A breakable dot: a dot when flat; when broken, the dot moves to the
/// start of the continuation line.
pub fn dot() -> Doc {
    DOT.clone()
}
