use crate::NameKind;
use crate::SelectionId;
use thiserror::Error;

/// Every way building query text from a selection tree can fail.
///
/// Validation stops at the first problem it finds, and an error raised while
/// checking a nested [`Selection`](crate::Selection) reaches the caller
/// unchanged.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryBuildError {
    #[error(
        "A selection handle does not refer to any selection in this arena. \
        Create selections with `SelectionArena::add()` or \
        `Operation::new_selection()`."
    )]
    AbsentSelection,

    #[error("Selection `{name}` ({selection}) is reachable from itself")]
    CyclicSelection {
        name: String,
        selection: SelectionId,
    },

    #[error(
        "'{name}' is an invalid {kind} name in GraphQL. A valid name matches \
        /[_A-Za-z][_0-9A-Za-z]*/"
    )]
    InvalidName {
        kind: NameKind,
        name: String,
    },

    #[error(
        "'{kind}' is an invalid operation type in GraphQL. A valid type is one \
        of 'query', 'mutation', 'subscription'"
    )]
    InvalidOperationKind {
        kind: String,
    },

    #[error("Argument {value} of type {type_name} is not supported")]
    UnsupportedArgumentType {
        type_name: &'static str,
        value: String,
    },
}
