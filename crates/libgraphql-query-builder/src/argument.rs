use crate::name_validator::check_name;
use crate::ArgumentValue;
use crate::NameKind;
use crate::QueryBuildError;
use crate::QueryText;
use crate::ScalarList;
use inherent::inherent;
use serde_json::Value as JsonValue;

/// A single `name:value` argument on a field, or a field of a nested input
/// object value.
///
/// The name is not validated here. Names are checked (along with every other
/// name in the tree) when the owning operation or selection is validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) value: ArgumentValue,
}
impl Argument {
    pub fn new(name: impl Into<String>, value: ArgumentValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn block_string(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(name, ArgumentValue::BlockString(value.into()))
    }

    pub fn block_string_list<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(name, ArgumentValue::List(ScalarList::BlockString(
            values.into_iter().map(Into::into).collect(),
        )))
    }

    pub fn bool(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, ArgumentValue::Bool(value))
    }

    pub fn bool_list(
        name: impl Into<String>,
        values: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self::new(name, ArgumentValue::List(ScalarList::Bool(
            values.into_iter().collect(),
        )))
    }

    /// An unquoted enum value, e.g. `Argument::enum_value("order", "DESC")`
    /// renders as `order:DESC`.
    pub fn enum_value(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(name, ArgumentValue::Enum(value.into()))
    }

    pub fn enum_list<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(name, ArgumentValue::List(ScalarList::Enum(
            values.into_iter().map(Into::into).collect(),
        )))
    }

    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, ArgumentValue::Int(value))
    }

    pub fn int_list(
        name: impl Into<String>,
        values: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self::new(name, ArgumentValue::List(ScalarList::Int(
            values.into_iter().collect(),
        )))
    }

    /// A nested input object value whose fields are themselves
    /// [`Argument`]s, e.g. `input:{title:"what",tagIds:[]}`.
    pub fn object(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = Argument>,
    ) -> Self {
        Self::new(name, ArgumentValue::Object(fields.into_iter().collect()))
    }

    /// A list of nested input objects, e.g. `items:[{a:1},{a:2}]`.
    pub fn object_list<I: IntoIterator<Item = Argument>>(
        name: impl Into<String>,
        objects: impl IntoIterator<Item = I>,
    ) -> Self {
        Self::new(name, ArgumentValue::ObjectList(
            objects.into_iter()
                .map(|fields| fields.into_iter().collect())
                .collect(),
        ))
    }

    pub fn string(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(name, ArgumentValue::String(value.into()))
    }

    pub fn string_list<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(name, ArgumentValue::List(ScalarList::String(
            values.into_iter().map(Into::into).collect(),
        )))
    }

    /// Convert a dynamically-typed JSON value into an [`Argument`].
    ///
    /// Only booleans, integers that fit in an `i64`, strings, and arrays
    /// made up entirely of one of those three are accepted. An empty array
    /// becomes an empty list. Everything else (`null`, floats, integers above
    /// `i64::MAX`, objects, mixed or nested arrays) produces
    /// [`QueryBuildError::UnsupportedArgumentType`], whose `type_name` is one
    /// of `null`, `float`, `u64`, `object`, or `array`.
    pub fn from_json(
        name: impl Into<String>,
        value: &JsonValue,
    ) -> Result<Self, QueryBuildError> {
        let arg_value = match value {
            JsonValue::Bool(b) => ArgumentValue::Bool(*b),

            JsonValue::Number(num) => match num.as_i64() {
                Some(i) => ArgumentValue::Int(i),
                None => return Err(unsupported(
                    value,
                    if num.is_f64() { "float" } else { "u64" },
                )),
            },

            JsonValue::String(s) => ArgumentValue::String(s.to_owned()),

            JsonValue::Array(values) =>
                ArgumentValue::List(scalar_list_from_json(values).ok_or_else(
                    || unsupported(value, "array"),
                )?),

            JsonValue::Null => return Err(unsupported(value, "null")),

            JsonValue::Object(_) => return Err(unsupported(value, "object")),
        };

        Ok(Self::new(name, arg_value))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }

    /// Check this argument's name, then every name nested inside its value
    /// (depth-first, in order), returning the first invalid one.
    pub(crate) fn check_names(&self) -> Result<(), QueryBuildError> {
        check_name(NameKind::Argument, &self.name)?;
        for nested in self.value.nested_arguments() {
            nested.check_names()?;
        }
        Ok(())
    }
}

#[inherent]
impl QueryText for Argument {
    pub fn append_query_text(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push(':');
        self.value.append_query_text(sink);
    }
}

fn scalar_list_from_json(values: &[JsonValue]) -> Option<ScalarList> {
    let Some(first) = values.first() else {
        return Some(ScalarList::String(vec![]));
    };

    match first {
        JsonValue::Bool(_) =>
            values.iter()
                .map(JsonValue::as_bool)
                .collect::<Option<Vec<_>>>()
                .map(ScalarList::Bool),

        JsonValue::Number(_) =>
            values.iter()
                .map(JsonValue::as_i64)
                .collect::<Option<Vec<_>>>()
                .map(ScalarList::Int),

        JsonValue::String(_) =>
            values.iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(ScalarList::String),

        _ => None,
    }
}

fn unsupported(value: &JsonValue, type_name: &'static str) -> QueryBuildError {
    QueryBuildError::UnsupportedArgumentType {
        type_name,
        value: value.to_string(),
    }
}
