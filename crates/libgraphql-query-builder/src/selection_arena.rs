use crate::selection_validator::SelectionValidator;
use crate::QueryBuildError;
use crate::QueryTokens;
use crate::Selection;
use crate::SelectionId;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(0);

/// Owns every [`Selection`] of a tree and hands out [`SelectionId`] handles
/// to them.
///
/// Selections refer to their children by handle rather than by reference, so
/// any shape of graph can be expressed (including, by mistake, cyclic ones).
/// The shape is only checked by [`SelectionArena::validate()`], which every
/// serialization path runs first.
///
/// Each arena is tagged with a process-unique id that its handles carry, so
/// a handle minted by a different arena never resolves here. A clone keeps
/// the id, so handles keep working on the copy.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionArena {
    id: u32,
    pub(crate) selections: Vec<Selection>,
}
impl SelectionArena {
    pub fn new() -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            selections: vec![],
        }
    }

    /// Create a new [`Selection`] for the field `name` and return its handle.
    pub fn add(&mut self, name: impl Into<String>) -> SelectionId {
        self.insert(Selection::new(name))
    }

    /// Create one leaf [`Selection`] per name, in order.
    ///
    /// Handy for the common `{ id, name, ... }` case:
    ///
    /// ```
    /// use libgraphql_query_builder::SelectionArena;
    ///
    /// let mut arena = SelectionArena::new();
    /// let users = arena.add("users");
    /// let leaves = arena.add_fields(["id", "name"]);
    /// arena[users].set_children(leaves);
    ///
    /// assert_eq!(arena.to_graphql_string(users).unwrap(), "users{id,name}");
    /// ```
    pub fn add_fields<S: Into<String>>(
        &mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Vec<SelectionId> {
        names.into_iter().map(|name| self.add(name)).collect()
    }

    /// `None` if `id` was produced by a different arena.
    pub fn get(&self, id: SelectionId) -> Option<&Selection> {
        if id.arena != self.id {
            return None;
        }
        self.selections.get(id.index)
    }

    pub fn get_mut(&mut self, id: SelectionId) -> Option<&mut Selection> {
        if id.arena != self.id {
            return None;
        }
        self.selections.get_mut(id.index)
    }

    /// Move an already-configured [`Selection`] into the arena and return its
    /// handle.
    pub fn insert(&mut self, selection: Selection) -> SelectionId {
        let id = SelectionId {
            arena: self.id,
            index: self.selections.len(),
        };
        self.selections.push(selection);
        id
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Validate the selection `id` and serialize it (and everything below
    /// it) on its own, without an enclosing operation.
    pub fn to_graphql_string(
        &self,
        id: SelectionId,
    ) -> Result<String, QueryBuildError> {
        Ok(self.tokens(id)?.collect())
    }

    /// Validate the selection `id`, then return the lazy token stream for it.
    pub fn tokens(
        &self,
        id: SelectionId,
    ) -> Result<QueryTokens<'_>, QueryBuildError> {
        self.validate(id)?;
        Ok(QueryTokens::for_selection(self, id))
    }

    /// Check the subtree rooted at `id`.
    ///
    /// In order: `id` resolves in this arena; no selection reachable from
    /// `id` is reachable from itself and every reachable handle resolves;
    /// every field name, alias, and argument name in the subtree is valid.
    /// The first problem found is returned.
    pub fn validate(&self, id: SelectionId) -> Result<(), QueryBuildError> {
        SelectionValidator::new(self).validate(id)
    }

    pub(crate) fn resolve(
        &self,
        id: SelectionId,
    ) -> Result<&Selection, QueryBuildError> {
        self.get(id).ok_or(QueryBuildError::AbsentSelection)
    }
}

/// Panics if `id` does not resolve in this arena.
impl std::ops::Index<SelectionId> for SelectionArena {
    type Output = Selection;

    fn index(&self, id: SelectionId) -> &Selection {
        match self.get(id) {
            Some(selection) => selection,
            None => panic!("{id} does not belong to this arena"),
        }
    }
}

/// Panics if `id` does not resolve in this arena.
impl std::ops::IndexMut<SelectionId> for SelectionArena {
    fn index_mut(&mut self, id: SelectionId) -> &mut Selection {
        match self.get_mut(id) {
            Some(selection) => selection,
            None => panic!("{id} does not belong to this arena"),
        }
    }
}

impl Default for SelectionArena {
    fn default() -> Self {
        Self::new()
    }
}
