use crate::node::Node;
use std::fmt::{self, Write};

pub const SNAPSHOT_FORMAT_V1: &str = "markup-snapshot-v1";

/// Deterministic line serialization of rendered markup for golden tests.
/// Not a stable public format.
///
/// - one node per line, children indented by two spaces;
/// - elements print as `<tag attr="..." ...>` with attributes in a fixed
///   order, boolean attributes bare, and the binding as `bind=...`;
/// - text prints quoted and escaped.
#[derive(Debug)]
pub struct Snapshot {
    lines: Vec<String>,
}

impl Snapshot {
    pub fn new<E>(nodes: &[Node<E>]) -> Self {
        let mut lines = Vec::new();
        for node in nodes {
            walk_snapshot(node, 0, &mut lines);
        }
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn walk_snapshot<E>(node: &Node<E>, indent_level: usize, out: &mut Vec<String>) {
    const INDENT_STEP: usize = 2;
    let mut line = " ".repeat(indent_level.saturating_mul(INDENT_STEP));
    write_node_line(&mut line, node);
    out.push(line);
    for child in node.children() {
        walk_snapshot(child, indent_level + 1, out);
    }
}

fn write_node_line<E>(out: &mut String, node: &Node<E>) {
    match node {
        Node::Text(text) => {
            out.push('"');
            write_escaped(out, text);
            out.push('"');
        }
        Node::Element {
            tag,
            attrs,
            listener,
            ..
        } => {
            out.push('<');
            out.push_str(tag.name());
            let valued = [
                ("id", attrs.id.as_deref()),
                ("name", attrs.name.as_deref()),
                ("type", attrs.input_type),
                ("value", attrs.value.as_deref()),
                ("href", attrs.href.as_deref()),
                ("src", attrs.src.as_deref()),
                ("alt", attrs.alt.as_deref()),
                ("for", attrs.for_id.as_deref()),
            ];
            for (name, value) in valued {
                if let Some(value) = value {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    write_escaped(out, value);
                    out.push('"');
                }
            }
            if attrs.checked {
                out.push_str(" checked");
            }
            if attrs.selected {
                out.push_str(" selected");
            }
            if let Some(listener) = listener {
                let _ = write!(out, " bind={}", listener.binding);
            }
            out.push('>');
        }
    }
}

/// Escapes only what would break a snapshot line or its quoting.
fn write_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        let escape = match ch {
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '"' => "\\\"",
            '\\' => "\\\\",
            _ => {
                out.push(ch);
                continue;
            }
        };
        out.push_str(escape);
    }
}
