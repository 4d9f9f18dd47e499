//! Annotates stream events with their flat-layout columns.

use crate::geometry::{str_width, Width};
use crate::stream::{Event, EventSink};

/// Tracks the column a cursor would reach if no line break ever fired, and
/// stamps it onto each event on the way through. Forwarding is immediate;
/// nothing is buffered.
///
/// Group and nest begins pass through untouched: the position that matters
/// for a begin is the one at which its scope *ends*, which cannot be known
/// yet. The corrector fills in group begins later; nest begins never need a
/// position.
pub(crate) struct Annotator<S> {
    sink: S,
    position: Width,
}

impl<S> Annotator<S> {
    pub(crate) fn new(sink: S) -> Annotator<S> {
        Annotator { sink, position: 0 }
    }

    pub(crate) fn into_inner(self) -> S {
        self.sink
    }
}

impl<'d, S: EventSink<'d>> EventSink<'d> for Annotator<S> {
    fn emit(&mut self, event: Event<'d>) {
        match event {
            Event::Text { text, .. } => {
                self.position += str_width(text);
                self.sink.emit(Event::Text {
                    text,
                    hpos: Some(self.position),
                });
            }
            Event::Cond {
                small, tail, cont, ..
            } => {
                // In flat layout only `small` contributes.
                self.position += str_width(small);
                self.sink.emit(Event::Cond {
                    small,
                    tail,
                    cont,
                    hpos: Some(self.position),
                });
            }
            Event::NestEnd { .. } => self.sink.emit(Event::NestEnd {
                hpos: Some(self.position),
            }),
            Event::GroupEnd { .. } => self.sink.emit(Event::GroupEnd {
                hpos: Some(self.position),
            }),
            Event::NestBegin | Event::GroupBegin { .. } => self.sink.emit(event),
        }
    }
}
