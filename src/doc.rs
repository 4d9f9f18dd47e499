use crate::geometry::{str_width, Width};
use std::fmt;
use std::sync::Arc;

/// A document describing text with optional line breaks, indentation
/// anchors, and grouping.
///
/// `Doc` is a cheap handle: cloning copies a reference count, not the tree,
/// so subdocuments can be shared freely. Documents are immutable and form a
/// finite DAG (no cycles can be constructed).
#[derive(Debug, Clone)]
pub struct Doc(pub(crate) Arc<DocNode>);

#[derive(Debug)]
pub(crate) enum DocNode {
    /// Literal text.
    Text(String),
    /// A conditional break point. When no line break is taken, renders
    /// `small`. When a break is taken, renders `tail` at the end of the line
    /// being broken, then a newline, indentation, and `cont`.
    Cond {
        small: String,
        cont: String,
        tail: String,
    },
    /// Documents displayed one after another.
    Concat(Vec<Doc>),
    /// A breaking scope: either every cond directly inside renders flat, or
    /// every cond directly inside (not nested in an inner group) breaks.
    Group(Doc),
    /// An indentation scope: line breaks within the child adopt the column
    /// at which this scope opened as their continuation indent.
    Nest(Doc),
}

impl Doc {
    /// The width of this document if it were rendered on a single line, with
    /// every cond in its flat form.
    pub fn width(&self) -> Width {
        match &*self.0 {
            DocNode::Text(text) => str_width(text),
            // No line break, so only `small` is relevant.
            DocNode::Cond { small, .. } => str_width(small),
            DocNode::Concat(children) => children.iter().map(Doc::width).sum(),
            DocNode::Group(child) => child.width(),
            DocNode::Nest(child) => child.width(),
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self.0 {
            DocNode::Text(text) => write!(f, "Text({:?})", text),
            DocNode::Cond { small, cont, tail } => {
                write!(f, "Cond({:?},{:?},{:?})", small, cont, tail)
            }
            DocNode::Concat(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            DocNode::Group(child) => write!(f, "Group({})", child),
            DocNode::Nest(child) => write!(f, "Nest({})", child),
        }
    }
}
