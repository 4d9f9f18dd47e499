//! Random documents, together with a shadow model of their text and cond
//! pieces for predicting renderings.

use super::generative::{Generator, Picker};
use streaming_pretty_printer::constructors::{
    br, concat, cond_with_tail, dot, group, nest, text,
};
use streaming_pretty_printer::Doc;

const TEXTS: &[&str] = &["a", "bb", "cccc"];

/// The tail marker: it may appear in broken output, never in flat output.
pub const TAIL_MARKER: &str = "$";

/// A text or cond of a generated document, in stream order.
#[derive(Debug, Clone)]
pub enum Piece {
    Text(&'static str),
    Cond {
        small: &'static str,
        tail: &'static str,
        cont: &'static str,
    },
}

/// A generated document plus its pieces in stream order.
#[derive(Debug)]
pub struct TestDoc {
    pub doc: Doc,
    pub pieces: Vec<Piece>,
}

impl TestDoc {
    /// What rendering the document flat must produce: every text, and every
    /// cond's `small`, in stream order.
    pub fn flat_text(&self) -> String {
        let mut flat = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(s) => flat.push_str(s),
                Piece::Cond { small, .. } => flat.push_str(small),
            }
        }
        flat
    }
}

pub struct DocGen;

impl Generator for DocGen {
    type Value = TestDoc;

    fn generate<P: Picker>(&self, size: u32, picker: &mut P) -> TestDoc {
        let mut pieces = Vec::new();
        let doc = gen_doc(size, picker, &mut pieces);
        TestDoc { doc, pieces }
    }
}

fn gen_doc<P: Picker>(mut size: u32, picker: &mut P, pieces: &mut Vec<Piece>) -> Doc {
    assert_ne!(size, 0);
    if size == 1 {
        match picker.pick_int(7) {
            i @ (0 | 1 | 2) => {
                let s = TEXTS[i as usize];
                pieces.push(Piece::Text(s));
                text(s)
            }
            3 => {
                pieces.push(Piece::Cond {
                    small: " ",
                    tail: "",
                    cont: "",
                });
                br()
            }
            4 => {
                pieces.push(Piece::Cond {
                    small: ".",
                    tail: "",
                    cont: ".",
                });
                dot()
            }
            5 => {
                pieces.push(Piece::Cond {
                    small: ",",
                    tail: TAIL_MARKER,
                    cont: "",
                });
                cond_with_tail(",", "", TAIL_MARKER)
            }
            6 => concat([]),
            _ => unreachable!(),
        }
    } else if size == 2 {
        match picker.pick_int(2) {
            0 => group(gen_doc(1, picker, pieces)),
            1 => nest(gen_doc(1, picker, pieces)),
            _ => unreachable!(),
        }
    } else {
        size -= 1;
        match picker.pick_int(3) {
            0 => {
                let left_size = picker.pick_int(size - 1) + 1;
                let right_size = size - left_size;
                let left = gen_doc(left_size, picker, pieces);
                let right = gen_doc(right_size, picker, pieces);
                concat([left, right])
            }
            1 => group(gen_doc(size, picker, pieces)),
            2 => nest(gen_doc(size, picker, pieces)),
            _ => unreachable!(),
        }
    }
}

/// Does `output` read back as the pieces in order, with each cond rendered
/// either flat (`small`) or broken (`tail`, a newline, any indentation,
/// `cont`)? Backtracks over both choices and over how much leading
/// whitespace belongs to the indentation.
pub fn output_matches_pieces(output: &str, pieces: &[Piece]) -> bool {
    match pieces.split_first() {
        None => output.is_empty(),
        Some((Piece::Text(s), rest)) => output
            .strip_prefix(s)
            .map_or(false, |o| output_matches_pieces(o, rest)),
        Some((Piece::Cond { small, tail, cont }, rest)) => {
            if let Some(o) = output.strip_prefix(small) {
                if output_matches_pieces(o, rest) {
                    return true;
                }
            }
            if let Some(o) = output.strip_prefix(tail).and_then(|o| o.strip_prefix('\n')) {
                let mut o = o;
                loop {
                    if let Some(after_cont) = o.strip_prefix(cont) {
                        if output_matches_pieces(after_cont, rest) {
                            return true;
                        }
                    }
                    match o.strip_prefix(' ') {
                        Some(next) => o = next,
                        None => break,
                    }
                }
            }
            false
        }
    }
}
