use crate::doc::{Doc, DocNode};
use crate::geometry::{str_width, Width};

/// Print the document by walking the tree directly, re-measuring each group
/// as it is reached. Quadratic in document size, but entirely independent
/// of the streaming pipeline; [`pretty_print`](crate::pretty_print) must
/// always produce the same output, so this function is used for automated
/// cross-checking of the single-pass algorithm.
pub fn oracular_pretty_print(width: Width, doc: &Doc) -> String {
    let mut oracle = Oracle {
        width,
        hpos: 0,
        indent: Vec::new(),
        result: String::new(),
    };
    oracle.render(doc, false);
    oracle.result
}

struct Oracle {
    width: Width,
    hpos: Width,
    indent: Vec<Width>,
    result: String,
}

impl Oracle {
    /// `flat` is true when some enclosing group fits; conds then render
    /// small, and nested groups inherit the decision without re-measuring.
    fn render(&mut self, doc: &Doc, flat: bool) {
        match &*doc.0 {
            DocNode::Text(text) => {
                self.result.push_str(text);
                self.hpos += str_width(text);
            }
            DocNode::Cond { small, cont, tail } => {
                if flat {
                    self.result.push_str(small);
                    self.hpos += str_width(small);
                } else {
                    let indent = self.indent.last().copied().unwrap_or(0);
                    self.result.push_str(tail);
                    self.result.push('\n');
                    self.result.push_str(&" ".repeat(indent));
                    self.result.push_str(cont);
                    self.hpos = indent + str_width(cont);
                }
            }
            DocNode::Concat(children) => {
                for child in children {
                    self.render(child, flat);
                }
            }
            DocNode::Group(child) => self.render_scope(child, flat),
            DocNode::Nest(child) => {
                self.indent.push(self.hpos);
                self.render_scope(child, flat);
                self.indent.pop();
            }
        }
    }

    fn render_scope(&mut self, child: &Doc, flat: bool) {
        let fits = flat || self.hpos + child.width() <= self.width;
        self.render(child, fits);
    }
}
