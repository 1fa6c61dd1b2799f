use crate::name_validator::check_name;
use crate::selection_validator::SelectionValidator;
use crate::NameKind;
use crate::OperationKind;
use crate::QueryBuildError;
use crate::QueryTokens;
use crate::Selection;
use crate::SelectionArena;
use crate::SelectionId;

/// A GraphQL operation: a kind, an optional name, and an ordered list of
/// top-level selections, together with the [`SelectionArena`] that owns every
/// selection in the tree.
///
/// Nothing is checked while the operation is being assembled. Each call to
/// [`Operation::to_graphql_string()`] (or any other output method) validates
/// the whole tree from scratch, so an operation can be mutated and
/// re-serialized freely.
///
/// ```
/// use libgraphql_query_builder::Argument;
/// use libgraphql_query_builder::Operation;
///
/// let mut op = Operation::mutation();
/// let f = op.new_selection("f");
/// let leaves = op.arena_mut().add_fields(["p", "q"]);
/// op[f]
///     .set_alias("al")
///     .set_arguments([Argument::int_list("arg", [1, 2, 3])])
///     .set_children(leaves);
/// op.set_name("M").set_selections([f]);
///
/// assert_eq!(
///     op.to_graphql_string().unwrap(),
///     "mutation M{al:f(arg:[1,2,3]){p,q}}",
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    arena: SelectionArena,
    kind: String,
    name: Option<String>,
    selections: Vec<SelectionId>,
}
impl Operation {
    /// Create an operation of the given kind.
    ///
    /// `kind` is kept as given and only checked (case-insensitively) when the
    /// operation is validated; output always uses the lower-case keyword.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            arena: SelectionArena::new(),
            kind: kind.into(),
            name: None,
            selections: vec![],
        }
    }

    pub fn from_kind(kind: OperationKind) -> Self {
        Self::new(kind.as_str())
    }

    pub fn mutation() -> Self {
        Self::from_kind(OperationKind::Mutation)
    }

    pub fn query() -> Self {
        Self::from_kind(OperationKind::Query)
    }

    pub fn subscription() -> Self {
        Self::from_kind(OperationKind::Subscription)
    }

    /// Append `selections` after any previously added top-level selections.
    pub fn add_selections(
        &mut self,
        selections: impl IntoIterator<Item = SelectionId>,
    ) -> &mut Self {
        self.selections.extend(selections);
        self
    }

    pub fn arena(&self) -> &SelectionArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut SelectionArena {
        &mut self.arena
    }

    /// The kind exactly as it was given to [`Operation::new()`].
    pub fn kind(&self) -> &str {
        self.kind.as_str()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Create a new [`Selection`] in this operation's arena and return its
    /// handle. The selection is not attached anywhere until it is passed to
    /// [`Operation::set_selections()`] or [`Selection::set_children()`].
    pub fn new_selection(&mut self, name: impl Into<String>) -> SelectionId {
        self.arena.add(name)
    }

    /// Recognize the operation's kind, failing with
    /// [`QueryBuildError::InvalidOperationKind`] if it is not one of
    /// `query`, `mutation`, or `subscription` (ignoring case).
    pub fn operation_kind(&self) -> Result<OperationKind, QueryBuildError> {
        OperationKind::from_keyword(&self.kind).ok_or_else(|| {
            QueryBuildError::InvalidOperationKind {
                kind: self.kind.to_owned(),
            }
        })
    }

    /// The first top-level selection of the field `name`, if any.
    pub fn selection_named(&self, name: &str) -> Option<SelectionId> {
        self.selections.iter().copied().find(|id| {
            self.arena.get(*id).is_some_and(|sel| sel.name() == name)
        })
    }

    pub fn selections(&self) -> &[SelectionId] {
        &self.selections
    }

    /// Set the operation name. An empty string clears it.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    /// NOTE: Replaces any previously set or added top-level selections.
    pub fn set_selections(
        &mut self,
        selections: impl IntoIterator<Item = SelectionId>,
    ) -> &mut Self {
        self.selections = selections.into_iter().collect();
        self
    }

    /// Validate the operation and serialize it as GraphQL text, e.g.
    /// `query Name{field(arg:1){child}}`.
    ///
    /// Nothing is returned but the error if validation fails.
    pub fn to_graphql_string(&self) -> Result<String, QueryBuildError> {
        Ok(self.tokens()?.collect())
    }

    /// Validate and serialize the operation, then wrap it as a JSON request
    /// body of the form `{"query":"..."}`.
    ///
    /// Only `"` is escaped (as `\"`). Backslashes, control characters, and
    /// non-ASCII text are passed through untouched, so argument strings
    /// containing those characters will not produce valid JSON.
    pub fn to_request_body(&self) -> Result<String, QueryBuildError> {
        let query = self.to_graphql_string()?;
        Ok(format!(r#"{{"query":"{}"}}"#, query.replace('"', r#"\""#)))
    }

    /// Validate the operation, then return the lazy token stream for it.
    pub fn tokens(&self) -> Result<QueryTokens<'_>, QueryBuildError> {
        let kind = self.validate_impl()?;
        Ok(QueryTokens::for_operation(
            &self.arena,
            kind.as_str(),
            self.name(),
            &self.selections,
        ))
    }

    /// Check, in order: the operation kind, the operation name (if any), and
    /// then each top-level selection in order, as
    /// [`SelectionArena::validate()`] would. Subtrees shared between
    /// top-level selections are only walked once. The first problem found is
    /// returned.
    pub fn validate(&self) -> Result<(), QueryBuildError> {
        self.validate_impl().map(|_| ())
    }

    fn validate_impl(&self) -> Result<OperationKind, QueryBuildError> {
        let kind = self.operation_kind()?;
        if let Some(name) = &self.name {
            check_name(NameKind::Operation, name)?;
        }
        let mut validator = SelectionValidator::new(&self.arena);
        for selection in &self.selections {
            validator.validate(*selection)?;
        }
        Ok(kind)
    }
}

/// Panics if `id` does not resolve in this operation's arena.
impl std::ops::Index<SelectionId> for Operation {
    type Output = Selection;

    fn index(&self, id: SelectionId) -> &Selection {
        &self.arena[id]
    }
}

/// Panics if `id` does not resolve in this operation's arena.
impl std::ops::IndexMut<SelectionId> for Operation {
    fn index_mut(&mut self, id: SelectionId) -> &mut Selection {
        &mut self.arena[id]
    }
}
