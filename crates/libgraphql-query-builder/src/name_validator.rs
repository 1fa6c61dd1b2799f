use crate::NameKind;
use crate::QueryBuildError;

/// Returns `true` iff `name` is a valid GraphQL
/// [name](https://spec.graphql.org/October2021/#sec-Names), i.e. the whole
/// string matches `/^[_A-Za-z][_0-9A-Za-z]*$/`.
///
/// The same rule applies to operation names, aliases, field names, and
/// argument names.
pub fn is_valid_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first == b'_' || first.is_ascii_alphabetic() =>
            bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Check `name` against [`is_valid_name`], producing an
/// [`InvalidName`](QueryBuildError::InvalidName) error tagged with `kind` on
/// failure.
pub(crate) fn check_name(
    kind: NameKind,
    name: &str,
) -> Result<(), QueryBuildError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(QueryBuildError::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}
