//! The renderer and the top-level pipeline.

use crate::annotate::Annotator;
use crate::correct::GroupCorrector;
use crate::doc::Doc;
use crate::geometry::{str_width, Width};
use crate::stream::{generate, Event, EventSink};

#[cfg(feature = "profile")]
use no_nonsense_flamegraphs::span;

/// Pretty print `doc`, breaking lines as needed to fit within `width`
/// columns where possible.
///
/// A group renders flat when it would end within the page width measuring
/// from the current column; otherwise every cond directly inside it breaks.
/// A width of 0 is valid: every cond breaks, and indentation still applies.
///
/// # Example
///
/// ```
/// use streaming_pretty_printer::combinators::funcall;
/// use streaming_pretty_printer::constructors::text;
/// use streaming_pretty_printer::pretty_print;
///
/// let doc = funcall("f", [text("a"), text("b")]);
/// assert_eq!(pretty_print(80, &doc), "f(a, b)");
/// assert_eq!(pretty_print(3, &doc), "f(a,\n  b)");
/// ```
pub fn pretty_print(width: Width, doc: &Doc) -> String {
    #[cfg(feature = "profile")]
    span!("pretty_print");

    let renderer = Renderer::new(width);
    let corrector = GroupCorrector::new(renderer);
    let mut annotator = Annotator::new(corrector);
    generate(doc, &mut annotator);
    annotator.into_inner().into_inner().finish()
}

/// Renders the corrected stream left to right.
///
/// `right_edge` lives in the stream's flat-layout coordinate system, not
/// the output's. Invariant: at every event, `right_edge - p == width -
/// hpos`, where `p` is the flat-layout position the stream has reached.
/// Both sides start equal (`width - 0`), flat output advances `p` and
/// `hpos` in lockstep, and every break re-establishes the equation by
/// shifting `right_edge`. A group therefore fits exactly when its end
/// position is at most `right_edge`, a single comparison.
struct Renderer {
    width: Width,
    /// Signed: after a break, deep indentation or a long continuation
    /// prefix can push the output column past `width`, making the margin
    /// negative.
    right_edge: isize,
    /// How many enclosing groups are currently rendering flat.
    fitting: usize,
    /// Current output column.
    hpos: Width,
    /// Indentation anchors, one per open nest.
    indent: Vec<Width>,
    result: String,
}

impl Renderer {
    fn new(width: Width) -> Renderer {
        Renderer {
            width,
            right_edge: width as isize,
            fitting: 0,
            hpos: 0,
            indent: Vec::new(),
            result: String::new(),
        }
    }

    fn finish(self) -> String {
        self.result
    }
}

impl<'d> EventSink<'d> for Renderer {
    fn emit(&mut self, event: Event<'d>) {
        match event {
            Event::Text { text, .. } => {
                self.result.push_str(text);
                self.hpos += str_width(text);
            }
            Event::Cond {
                small,
                tail,
                cont,
                hpos,
            } => {
                if self.fitting != 0 {
                    self.result.push_str(small);
                    self.hpos += str_width(small);
                } else {
                    let p = expect_pos(hpos, "cond");
                    let indent = self.indent.last().copied().unwrap_or(0);
                    self.result.push_str(tail);
                    self.result.push('\n');
                    self.result.push_str(&" ".repeat(indent));
                    self.result.push_str(cont);
                    self.hpos = indent + str_width(cont);
                    self.right_edge = self.width as isize - self.hpos as isize + p as isize;
                }
            }
            Event::GroupBegin { hpos } => {
                let p = expect_pos(hpos, "group begin");
                if self.fitting != 0 || p as isize <= self.right_edge {
                    // Groups nested inside a fitting group render flat
                    // without re-measuring.
                    self.fitting += 1;
                } else {
                    self.fitting = 0;
                }
            }
            Event::GroupEnd { .. } => {
                // A group end while nothing fits belongs to a broken group.
                if self.fitting != 0 {
                    self.fitting -= 1;
                }
            }
            Event::NestBegin => self.indent.push(self.hpos),
            Event::NestEnd { .. } => {
                self.indent.pop();
            }
        }
    }
}

fn expect_pos(hpos: Option<Width>, what: &str) -> Width {
    match hpos {
        Some(p) => p,
        None => panic!("bug in corrector: {} reached the renderer unannotated", what),
    }
}
