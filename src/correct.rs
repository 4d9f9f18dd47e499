//! Completes the annotation of group-begin events.
//!
//! A group fits on the current line exactly when the column at which it
//! would *end* in flat layout is within the renderer's right edge, so that
//! is the position a group begin must carry. The annotator cannot know it;
//! this stage does, by holding back each group until its end arrives.

use crate::stream::{Event, EventSink};

/// Rewrites each group begin to carry the column at which its matching
/// group end ends.
///
/// One buffer per currently open group, organized as a stack. While any
/// group is open, incoming events append to the top buffer. A group end
/// pops the top buffer and replays it (a fresh group begin carrying the
/// end's position, then the buffered contents, then the end itself), either
/// downstream if no enclosing group remains open, or onto the buffer of
/// the enclosing group. Events inside a group therefore stay in emission
/// order; only the group begin gains a position.
///
/// Peak memory is one event per element of the largest open group span;
/// everything outside an open group is forwarded immediately.
pub(crate) struct GroupCorrector<'d, S> {
    sink: S,
    lookahead: Vec<Vec<Event<'d>>>,
}

impl<'d, S: EventSink<'d>> GroupCorrector<'d, S> {
    pub(crate) fn new(sink: S) -> GroupCorrector<'d, S> {
        GroupCorrector {
            sink,
            lookahead: Vec::new(),
        }
    }

    pub(crate) fn into_inner(self) -> S {
        assert!(
            self.lookahead.is_empty(),
            "bug in stream generator: {} group(s) left unclosed",
            self.lookahead.len(),
        );
        self.sink
    }

    fn forward(&mut self, event: Event<'d>) {
        match self.lookahead.last_mut() {
            None => self.sink.emit(event),
            Some(buffer) => buffer.push(event),
        }
    }
}

impl<'d, S: EventSink<'d>> EventSink<'d> for GroupCorrector<'d, S> {
    fn emit(&mut self, event: Event<'d>) {
        match event {
            Event::Text { hpos, .. } | Event::Cond { hpos, .. } | Event::NestEnd { hpos } => {
                assert!(
                    hpos.is_some(),
                    "bug in annotator: {} reached the corrector unannotated",
                    event,
                );
                self.forward(event);
            }
            Event::NestBegin => self.forward(event),
            Event::GroupBegin { hpos } => {
                assert!(
                    hpos.is_none(),
                    "bug in annotator: {} was annotated before its group end was seen",
                    event,
                );
                // The begin itself is not stored; a fresh one is made at the
                // matching end, once its position is known.
                self.lookahead.push(Vec::new());
            }
            Event::GroupEnd { hpos } => {
                assert!(
                    hpos.is_some(),
                    "bug in annotator: {} reached the corrector unannotated",
                    event,
                );
                let buffer = match self.lookahead.pop() {
                    Some(buffer) => buffer,
                    None => panic!("bug in stream generator: group end without group begin"),
                };
                self.forward(Event::GroupBegin { hpos });
                match self.lookahead.last_mut() {
                    None => {
                        // Topmost group: replay downstream.
                        for buffered in buffer {
                            self.sink.emit(buffered);
                        }
                        self.sink.emit(event);
                    }
                    Some(enclosing) => {
                        enclosing.extend(buffer);
                        enclosing.push(event);
                    }
                }
            }
        }
    }
}
