//! The linear event stream that documents are flattened into.
//!
//! The document tree is convenient to build, but the layout engine works on
//! a linear form: an in-order traversal in which concatenation disappears
//! into adjacency and groups and nests are delimited by explicit begin and
//! end markers. The stream can be processed one element at a time, so no
//! stage ever needs the whole document in a second representation.

use crate::doc::{Doc, DocNode};
use crate::geometry::Width;
use std::fmt;

/// One element of the linearized document.
///
/// Every variant except `NestBegin` carries `hpos`: the absolute column the
/// cursor reaches just after the element, assuming flat layout (no breaks)
/// from the start of the stream. The generator emits all events with `hpos`
/// unset. The annotator fills it in for every variant except `GroupBegin`,
/// whose position (the column at which its group *ends*) is only known once
/// the matching `GroupEnd` arrives; the corrector patches it in then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event<'d> {
    Text {
        text: &'d str,
        hpos: Option<Width>,
    },
    Cond {
        small: &'d str,
        tail: &'d str,
        cont: &'d str,
        hpos: Option<Width>,
    },
    NestBegin,
    NestEnd {
        hpos: Option<Width>,
    },
    GroupBegin {
        hpos: Option<Width>,
    },
    GroupEnd {
        hpos: Option<Width>,
    },
}

/// A stage of the layout pipeline. Each stage consumes events and forwards
/// events (possibly rewritten, reordered, or delayed) to the next stage.
pub(crate) trait EventSink<'d> {
    fn emit(&mut self, event: Event<'d>);
}

/// Flatten `doc` into events, in order, pushing each into `sink`.
///
/// A nest emits an inner group around its body. The indentation anchor only
/// matters when a break actually fires, and groups are the unit that
/// decides whether breaks fire, so without the inner group a nest applied
/// to a non-group document would never break.
pub(crate) fn generate<'d>(doc: &'d Doc, sink: &mut impl EventSink<'d>) {
    match &*doc.0 {
        DocNode::Text(text) => sink.emit(Event::Text { text, hpos: None }),
        DocNode::Cond { small, cont, tail } => sink.emit(Event::Cond {
            small,
            tail,
            cont,
            hpos: None,
        }),
        DocNode::Concat(children) => {
            for child in children {
                generate(child, sink);
            }
        }
        DocNode::Group(child) => {
            sink.emit(Event::GroupBegin { hpos: None });
            generate(child, sink);
            sink.emit(Event::GroupEnd { hpos: None });
        }
        DocNode::Nest(child) => {
            sink.emit(Event::NestBegin);
            sink.emit(Event::GroupBegin { hpos: None });
            generate(child, sink);
            sink.emit(Event::GroupEnd { hpos: None });
            sink.emit(Event::NestEnd { hpos: None });
        }
    }
}

// For panic diagnostics and debugging. Unset positions print as -1.
impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct Pos(Option<Width>);
        impl fmt::Display for Pos {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.0 {
                    Some(p) => write!(f, "{}", p),
                    None => write!(f, "-1"),
                }
            }
        }

        match self {
            Event::Text { text, hpos } => write!(f, "TE({:?},{})", text, Pos(*hpos)),
            Event::Cond {
                small,
                tail,
                cont,
                hpos,
            } => write!(f, "CE({:?},{:?},{:?},{})", small, tail, cont, Pos(*hpos)),
            Event::NestBegin => write!(f, "NBeg(-1)"),
            Event::NestEnd { hpos } => write!(f, "NEnd({})", Pos(*hpos)),
            Event::GroupBegin { hpos } => write!(f, "GBeg({})", Pos(*hpos)),
            Event::GroupEnd { hpos } => write!(f, "GEnd({})", Pos(*hpos)),
        }
    }
}
