//! Programmatically build GraphQL operation text.
//!
//! Calling code assembles a tree of [`Selection`]s (fields with optional
//! aliases, arguments, and child selections) inside an [`Operation`], and
//! the library validates the tree and serializes it into compact GraphQL
//! text or a `{"query":"..."}` JSON request body.
//!
//! ```
//! use libgraphql_query_builder::Argument;
//! use libgraphql_query_builder::Operation;
//!
//! let mut op = Operation::query();
//! let a = op.new_selection("a");
//! op[a].set_arguments([Argument::string("s", "hi")]);
//! op.set_selections([a]);
//!
//! assert_eq!(op.to_graphql_string().unwrap(), r#"query{a(s:"hi")}"#);
//! assert_eq!(
//!     op.to_request_body().unwrap(),
//!     r#"{"query":"query{a(s:\"hi\")}"}"#,
//! );
//! ```
//!
//! Selections live in a [`SelectionArena`] and refer to their children by
//! [`SelectionId`], so the tree can be mutated freely. Validation (names,
//! dangling handles, and cycles) happens on every serialization call.

mod argument;
mod argument_value;
mod name_kind;
mod name_validator;
mod operation;
mod operation_kind;
pub mod options;
mod query_build_error;
mod query_text;
mod query_tokens;
mod selection;
mod selection_arena;
mod selection_id;
mod selection_validator;

pub use argument::Argument;
pub use argument_value::ArgumentValue;
pub use argument_value::ScalarList;
pub use name_kind::NameKind;
pub use name_validator::is_valid_name;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use query_build_error::QueryBuildError;
pub use query_text::QueryText;
pub use query_tokens::QueryTokens;
pub use selection::Selection;
pub use selection_arena::SelectionArena;
pub use selection_id::SelectionId;

#[cfg(test)]
mod tests;
