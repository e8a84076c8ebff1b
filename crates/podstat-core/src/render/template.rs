//! Minimal HTML template engine for the index page.
//!
//! Syntax:
//! - `{{ name }}` : substitute a scalar field, HTML-escaped.
//! - `{{ range key, value in name }} ... {{ end }}` : iterate a map field in
//!   key order. `key`/`value` are bound inside the body and shadow fields of
//!   the same name.
//!
//! Data is a `serde_json::Value` object, so any `Serialize` view can feed a
//! template.

use serde_json::Value;

use crate::error::RenderError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Field(String),
    Range {
        key: String,
        value: String,
        source: String,
        body: Vec<Node>,
    },
}

enum Tag {
    Field(String),
    Range {
        key: String,
        value: String,
        source: String,
    },
    End,
}

/// Open `range` while parsing; `outer` holds the nodes collected before it.
struct Frame {
    offset: usize,
    key: String,
    value: String,
    source: String,
    outer: Vec<Node>,
}

/// Parsed template, ready to be executed against data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    pub fn parse(src: &str) -> Result<Self, RenderError> {
        let mut nodes = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut pos = 0;

        while let Some(rel) = src[pos..].find(OPEN) {
            let start = pos + rel;
            if start > pos {
                nodes.push(Node::Text(src[pos..start].to_string()));
            }
            let inner_start = start + OPEN.len();
            let close = src[inner_start..]
                .find(CLOSE)
                .ok_or_else(|| RenderError::syntax(start, "unclosed tag"))?;
            let inner = &src[inner_start..inner_start + close];
            pos = inner_start + close + CLOSE.len();

            match parse_tag(inner, start)? {
                Tag::Field(name) => nodes.push(Node::Field(name)),
                Tag::Range { key, value, source } => stack.push(Frame {
                    offset: start,
                    key,
                    value,
                    source,
                    outer: std::mem::take(&mut nodes),
                }),
                Tag::End => {
                    let frame = stack
                        .pop()
                        .ok_or_else(|| RenderError::syntax(start, "`end` without `range`"))?;
                    let body = std::mem::replace(&mut nodes, frame.outer);
                    nodes.push(Node::Range {
                        key: frame.key,
                        value: frame.value,
                        source: frame.source,
                        body,
                    });
                }
            }
        }

        if let Some(frame) = stack.last() {
            return Err(RenderError::syntax(frame.offset, "unterminated `range`"));
        }
        if pos < src.len() {
            nodes.push(Node::Text(src[pos..].to_string()));
        }
        Ok(Self { nodes })
    }

    /// Execute against `data`. Output is only returned when the whole
    /// template rendered.
    pub fn render(&self, data: &Value) -> Result<String, RenderError> {
        let mut out = String::new();
        render_nodes(&self.nodes, data, &[], &mut out)?;
        Ok(out)
    }
}

fn parse_tag(inner: &str, offset: usize) -> Result<Tag, RenderError> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Err(RenderError::syntax(offset, "empty tag"));
    }
    if inner == "end" {
        return Ok(Tag::End);
    }
    if let Some(header) = inner.strip_prefix("range ") {
        let (vars, source) = header
            .rsplit_once(" in ")
            .ok_or_else(|| RenderError::syntax(offset, "`range` expects `key, value in field`"))?;
        let (key, value) = vars
            .split_once(',')
            .ok_or_else(|| RenderError::syntax(offset, "`range` expects `key, value in field`"))?;
        let (key, value, source) = (key.trim(), value.trim(), source.trim());
        for name in [key, value, source] {
            if !is_ident(name) {
                return Err(RenderError::syntax(offset, format!("invalid name `{name}`")));
            }
        }
        return Ok(Tag::Range {
            key: key.to_string(),
            value: value.to_string(),
            source: source.to_string(),
        });
    }
    if is_ident(inner) {
        return Ok(Tag::Field(inner.to_string()));
    }
    Err(RenderError::syntax(offset, format!("unknown directive `{inner}`")))
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn lookup<'v>(root: &'v Value, bindings: &[(&str, &'v Value)], name: &str) -> Option<&'v Value> {
    bindings
        .iter()
        .rev()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
        .or_else(|| root.get(name))
}

fn render_nodes<'v>(
    nodes: &[Node],
    root: &'v Value,
    bindings: &[(&str, &'v Value)],
    out: &mut String,
) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Field(name) => {
                let v = lookup(root, bindings, name)
                    .ok_or_else(|| RenderError::MissingField(name.clone()))?;
                write_scalar(name, v, out)?;
            }
            Node::Range {
                key,
                value,
                source,
                body,
            } => {
                let map = match lookup(root, bindings, source) {
                    Some(Value::Object(map)) => map,
                    Some(_) => return Err(RenderError::NotIterable(source.clone())),
                    None => return Err(RenderError::MissingField(source.clone())),
                };
                for (k, v) in map {
                    let k = Value::String(k.clone());
                    let mut inner: Vec<(&str, &Value)> = Vec::with_capacity(bindings.len() + 2);
                    inner.extend_from_slice(bindings);
                    inner.push((key.as_str(), &k));
                    inner.push((value.as_str(), v));
                    render_nodes(body, root, &inner, out)?;
                }
            }
        }
    }
    Ok(())
}

fn write_scalar(name: &str, v: &Value, out: &mut String) -> Result<(), RenderError> {
    match v {
        Value::String(s) => escape_html(s, out),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => {}
        Value::Array(_) | Value::Object(_) => return Err(RenderError::NotScalar(name.to_string())),
    }
    Ok(())
}

fn escape_html(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
