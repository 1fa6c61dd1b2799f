use crate::query_text::append_delimited;
use crate::Argument;
use crate::QueryText;
use inherent::inherent;

/// The value half of an [`Argument`].
///
/// This is a closed set: every shape the builder can render is listed here,
/// so rendering is an exhaustive match rather than dynamic dispatch. The only
/// fallible way to produce one is [`Argument::from_json()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    /// Rendered as `"""<raw>"""`.
    BlockString(String),
    Bool(bool),
    /// Rendered as the raw bare word.
    Enum(String),
    Int(i64),
    List(ScalarList),
    /// A nested input object, rendered as `{name:value,...}`.
    Object(Vec<Argument>),
    /// A list of nested input objects, rendered as `[{...},{...}]`.
    ObjectList(Vec<Vec<Argument>>),
    /// Rendered as `"<raw>"`. Embedded quotes are not escaped.
    String(String),
}
impl ArgumentValue {
    /// The [`Argument`]s nested directly inside this value (the
    /// fields of an `Object`, or of every element of an `ObjectList`).
    pub fn nested_arguments(&self) -> Vec<&Argument> {
        match self {
            Self::Object(fields) => fields.iter().collect(),
            Self::ObjectList(objects) => objects.iter().flatten().collect(),
            _ => vec![],
        }
    }
}

#[inherent]
impl QueryText for ArgumentValue {
    pub fn append_query_text(&self, sink: &mut String) {
        match self {
            Self::BlockString(value) => append_block_string(sink, value),
            Self::Bool(value) => append_bool(sink, *value),
            Self::Enum(value) => sink.push_str(value),
            Self::Int(value) => append_int(sink, *value),
            Self::List(list) => list.append_query_text(sink),
            Self::Object(fields) => append_object(sink, fields),
            Self::ObjectList(objects) => append_delimited(
                sink,
                '[',
                ']',
                objects,
                |fields, sink| append_object(sink, fields),
            ),
            Self::String(value) => append_string(sink, value),
        }
    }
}

/// A homogeneous list of scalar values.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarList {
    BlockString(Vec<String>),
    Bool(Vec<bool>),
    Enum(Vec<String>),
    Int(Vec<i64>),
    String(Vec<String>),
}
impl ScalarList {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Self::BlockString(values)
            | Self::Enum(values)
            | Self::String(values) => values.len(),
            Self::Bool(values) => values.len(),
            Self::Int(values) => values.len(),
        }
    }
}

#[inherent]
impl QueryText for ScalarList {
    pub fn append_query_text(&self, sink: &mut String) {
        match self {
            Self::BlockString(values) => append_delimited(
                sink, '[', ']', values,
                |v, sink| append_block_string(sink, v),
            ),
            Self::Bool(values) => append_delimited(
                sink, '[', ']', values,
                |v, sink| append_bool(sink, *v),
            ),
            Self::Enum(values) => append_delimited(
                sink, '[', ']', values,
                |v, sink| sink.push_str(v),
            ),
            Self::Int(values) => append_delimited(
                sink, '[', ']', values,
                |v, sink| append_int(sink, *v),
            ),
            Self::String(values) => append_delimited(
                sink, '[', ']', values,
                |v, sink| append_string(sink, v),
            ),
        }
    }
}

fn append_block_string(sink: &mut String, value: &str) {
    sink.push_str("\"\"\"");
    sink.push_str(value);
    sink.push_str("\"\"\"");
}

fn append_bool(sink: &mut String, value: bool) {
    sink.push_str(if value { "true" } else { "false" });
}

fn append_int(sink: &mut String, value: i64) {
    sink.push_str(&value.to_string());
}

fn append_object(sink: &mut String, fields: &[Argument]) {
    append_delimited(sink, '{', '}', fields, |arg, sink| {
        arg.append_query_text(sink)
    });
}

fn append_string(sink: &mut String, value: &str) {
    sink.push('"');
    sink.push_str(value);
    sink.push('"');
}
