//! Combinators for common syntactic shapes: comma-separated lists,
//! parenthesized argument lists, and dotted chains.

use crate::constructors::{br, concat, dot, empty, nest, text};
use crate::doc::Doc;

/// `d1, d2, …, dn`, with a breakable space after each comma. The whole list
/// is an indentation scope, so when the breaks fire the continuation lines
/// align under the first element.
pub fn comma_separated(docs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut docs = docs.into_iter();
    let first = match docs.next() {
        None => return empty(),
        Some(first) => first,
    };
    let mut list = vec![first];
    for doc in docs {
        list.push(text(","));
        list.push(br());
        list.push(doc);
    }
    nest(concat(list))
}

/// `(d1, d2, …, dn)`.
pub fn arglist(docs: impl IntoIterator<Item = Doc>) -> Doc {
    concat([text("("), comma_separated(docs), text(")")])
}

/// `d1.d2.(...).dn`. The first dot is plain text rather than a breakable dot,
/// so a chain never breaks immediately after its head; the indentation
/// scope opens after the head, so broken chains align their dots under the
/// second element's dot.
pub fn dotted_list(docs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut docs = docs.into_iter();
    let head = match docs.next() {
        None => return empty(),
        Some(head) => head,
    };
    let mut chain = Vec::new();
    for (i, doc) in docs.enumerate() {
        if i == 0 {
            chain.push(text("."));
        } else {
            chain.push(dot());
        }
        chain.push(doc);
    }
    if chain.is_empty() {
        return nest(head);
    }
    concat([head, nest(concat(chain))])
}

/// `name(d1, d2, …, dn)`.
pub fn funcall(name: impl Into<String>, args: impl IntoIterator<Item = Doc>) -> Doc {
    concat([text(name), arglist(args)])
}

/// A dotted chain rooted at the term `r`.
pub fn r_dot(args: impl IntoIterator<Item = Doc>) -> Doc {
    dotted_list(std::iter::once(text("r")).chain(args))
}
