//! Tagged tree serializer
//!
//! Every literal except VALUE becomes a two-entry object: `"%k"` names the kind, `"%v"` holds
//! the payload. The sentence itself is a bare array.
//!
//!     [1, :a]        →  [{"%k": "list", "%v": [{"%k": "int", "%v": 1}, {"%k": "atom", "%v": ":a"}]}]
//!     %{:a => true}  →  [{"%k": "map", "%v": [[{"%k": "atom", "%v": ":a"}, {"%k": "bool", "%v": true}]]}]
//!
//! Map entries are two element arrays rather than object members, so duplicate keys and
//! container keys survive in source order.
//!
//! Keys
//!
//!     A KEY literal (`name:`) is emitted as an atom whose text is the lexeme reversed
//!     character by character: `name:` becomes `:eman`.

use crate::exdata::ast::{DataLiteral, KeyPair, Sentence};
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use serde_json::{Map, Number, Value};
use std::io;

pub const KIND_KEY: &str = "%k";
pub const VALUE_KEY: &str = "%v";

/// Convert a sentence into its tagged tree.
pub fn to_tagged_tree(sentence: &Sentence) -> Value {
    Value::Array(sentence.items.iter().map(literal_to_tagged).collect())
}

/// Convert one literal into its tagged tree.
pub fn literal_to_tagged(literal: &DataLiteral) -> Value {
    match literal {
        DataLiteral::List(items) => tagged("list", items_to_tagged(items)),
        DataLiteral::Tuple(items) => tagged("tuple", items_to_tagged(items)),
        DataLiteral::Map(pairs) => tagged(
            "map",
            Value::Array(pairs.iter().map(key_pair_to_tagged).collect()),
        ),
        DataLiteral::Integer(text) => tagged("int", integer_value(text)),
        DataLiteral::Atom(text) => tagged("atom", Value::String(text.clone())),
        DataLiteral::Key(text) => tagged("atom", Value::String(text.chars().rev().collect())),
        DataLiteral::Boolean(text) => tagged("bool", Value::Bool(text == "true")),
        DataLiteral::Value(text) => Value::String(text.clone()),
    }
}

fn key_pair_to_tagged(pair: &KeyPair) -> Value {
    Value::Array(vec![
        literal_to_tagged(&pair.key),
        literal_to_tagged(&pair.value),
    ])
}

fn items_to_tagged(items: &[DataLiteral]) -> Value {
    Value::Array(items.iter().map(literal_to_tagged).collect())
}

fn tagged(kind: &str, value: Value) -> Value {
    let mut object = Map::new();
    object.insert(KIND_KEY.to_string(), Value::String(kind.to_string()));
    object.insert(VALUE_KEY.to_string(), value);
    Value::Object(object)
}

/// Numeric value of an INTEGER lexeme: underscores dropped, leading zeros dropped, any size.
fn integer_value(text: &str) -> Value {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    let significant = match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };
    // The lexer only admits ASCII digit runs, so this parse does not fail in practice.
    significant
        .parse::<Number>()
        .map(Value::Number)
        .unwrap_or(Value::String(digits))
}

/// Render a tagged tree as indented JSON, `indent` spaces per level, with a trailing newline.
///
/// An indent of zero renders the whole tree on one line. Non-ASCII characters in strings are
/// written as `\uXXXX` escapes, so the output is plain ASCII.
pub fn render_tagged(tree: &Value, indent: usize) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    if indent == 0 {
        let formatter = AsciiFormatter(CompactFormatter);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        tree.serialize(&mut serializer)?;
    } else {
        let indent = " ".repeat(indent);
        let formatter = AsciiFormatter(PrettyFormatter::with_indent(indent.as_bytes()));
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        tree.serialize(&mut serializer)?;
    }
    // Everything above is ASCII
    let mut rendered = String::from_utf8_lossy(&buffer).into_owned();
    rendered.push('\n');
    Ok(rendered)
}

/// Wraps a formatter and escapes every non-ASCII character in string contents as `\uXXXX`,
/// lowercase hex, with UTF-16 surrogate pairs above U+FFFF.
struct AsciiFormatter<F>(F);

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}
