//! The JSON shape the CLI accepts as a description of an operation.
//!
//! ```json
//! { "kind": "query", "name": "Op",
//!   "selections": [ { "name": "f", "alias": "a", "arguments": { "x": 1 },
//!                     "selections": [ { "name": "id" } ] } ] }
//! ```

use libgraphql_query_builder::Argument;
use libgraphql_query_builder::Operation;
use libgraphql_query_builder::QueryBuildError;
use libgraphql_query_builder::SelectionArena;
use libgraphql_query_builder::SelectionId;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct OperationDescription {
    pub kind: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub selections: Vec<SelectionDescription>,
}
impl OperationDescription {
    /// Assemble the described operation.
    ///
    /// Only argument values are checked here (via [`Argument::from_json()`]);
    /// names, the operation kind, and everything else are left for the
    /// operation's own validation.
    pub fn into_operation(self) -> Result<Operation, QueryBuildError> {
        let mut operation = Operation::new(self.kind);
        if let Some(name) = self.name {
            operation.set_name(name);
        }
        for selection in self.selections {
            let id = selection.add_to(operation.arena_mut())?;
            operation.add_selections([id]);
        }
        Ok(operation)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct SelectionDescription {
    pub name: String,

    #[serde(default)]
    pub alias: Option<String>,

    /// Key order is preserved, so arguments are emitted in the order they
    /// were written.
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,

    #[serde(default)]
    pub selections: Vec<SelectionDescription>,
}
impl SelectionDescription {
    // serde_json's recursion limit bounds how deep this can go.
    fn add_to(
        self,
        arena: &mut SelectionArena,
    ) -> Result<SelectionId, QueryBuildError> {
        let arguments = self.arguments
            .iter()
            .map(|(name, value)| Argument::from_json(name.as_str(), value))
            .collect::<Result<Vec<_>, _>>()?;

        let id = arena.add(self.name);
        arena[id]
            .set_alias(self.alias.unwrap_or_default())
            .set_arguments(arguments);
        for child in self.selections {
            let child_id = child.add_to(arena)?;
            arena[id].add_children([child_id]);
        }
        Ok(id)
    }
}
