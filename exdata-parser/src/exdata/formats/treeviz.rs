//! Treeviz formatter for AST nodes
//!
//! One line per node, nesting shown as indentation with 2 white spaces per level:
//! <indentation>(per level) <icon><space><label>
//!
//! Example, for `%{name: [1, :a]} true`:
//!
//!   ⧉ 2 items
//!     ⊞ 1 pair
//!       ⇒ name: => 2 items
//!         ⚷ name:
//!         ☰ 2 items
//!           # 1
//!           ∴ :a
//!     ◐ true
//!
//! Icons
//!     Sentence: ⧉
//!     List: ☰
//!     Tuple: ⦃
//!     Map: ⊞
//!     KeyPair: ⇒
//!     Integer: #
//!     Atom: ∴
//!     Key: ⚷
//!     Boolean: ◐
//!     Value: ❝

use crate::exdata::ast::{AstNode, DataLiteral, KeyPair, Sentence, Visitor};

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Sentence" => "⧉",
        "List" => "☰",
        "Tuple" => "⦃",
        "Map" => "⊞",
        "KeyPair" => "⇒",
        "Integer" => "#",
        "Atom" => "∴",
        "Key" => "⚷",
        "Boolean" => "◐",
        "Value" => "❝",
        _ => "○",
    }
}

struct TreevizVisitor {
    output: String,
    depth: usize,
}

impl TreevizVisitor {
    fn open(&mut self, node: &dyn AstNode) {
        self.output.push_str(&"  ".repeat(self.depth));
        self.output.push_str(get_icon(node.node_type()));
        self.output.push(' ');
        self.output.push_str(&node.display_label());
        self.output.push('\n');
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
    }
}

impl Visitor for TreevizVisitor {
    fn visit_sentence(&mut self, sentence: &Sentence) {
        self.open(sentence);
    }
    fn leave_sentence(&mut self, _: &Sentence) {
        self.close();
    }

    fn visit_literal(&mut self, literal: &DataLiteral) {
        self.open(literal);
    }
    fn leave_literal(&mut self, _: &DataLiteral) {
        self.close();
    }

    fn visit_key_pair(&mut self, pair: &KeyPair) {
        self.open(pair);
    }
    fn leave_key_pair(&mut self, _: &KeyPair) {
        self.close();
    }
}

/// Render a sentence as a treeviz string.
pub fn to_treeviz_str(sentence: &Sentence) -> String {
    let mut visitor = TreevizVisitor {
        output: String::new(),
        depth: 0,
    };
    sentence.accept(&mut visitor);
    visitor.output
}
