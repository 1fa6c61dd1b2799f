use crate::SelectionArena;
use crate::SelectionId;
use std::borrow::Cow;
use std::iter::FusedIterator;

#[derive(Debug)]
enum Pending<'a> {
    Selection(SelectionId),
    Token(Cow<'a, str>),
}

/// A lazy, single-pass stream of the text tokens that make up a serialized
/// operation or selection.
///
/// Concatenating every token yields exactly the output of
/// [`Operation::to_graphql_string()`](crate::Operation::to_graphql_string)
/// (or [`SelectionArena::to_graphql_string()`] for a single selection). Each
/// call to `next()` expands at most one selection; the stream holds nothing
/// but borrowed data and a stack of pending work, so it may be dropped at any
/// point.
///
/// A `QueryTokens` is only ever handed out for a tree that has already passed
/// validation. Streams are single-pass and cannot be cloned mid-way; ask for
/// a fresh one to start over:
///
/// ```compile_fail
/// use libgraphql_query_builder::Operation;
/// use libgraphql_query_builder::QueryTokens;
///
/// let mut op = Operation::query();
/// let a = op.new_selection("a");
/// op.set_selections([a]);
///
/// let mut tokens = op.tokens().unwrap();
/// tokens.next();
/// let replay: QueryTokens<'_> = tokens.clone();
/// ```
#[derive(Debug)]
pub struct QueryTokens<'a> {
    arena: &'a SelectionArena,
    // Top of the stack is the next thing to emit.
    pending: Vec<Pending<'a>>,
}
impl<'a> QueryTokens<'a> {
    pub(crate) fn for_operation(
        arena: &'a SelectionArena,
        kind: &'static str,
        name: Option<&'a str>,
        selections: &'a [SelectionId],
    ) -> Self {
        let mut tokens = Self {
            arena,
            pending: vec![],
        };
        tokens.push_selection_list(selections);
        if let Some(name) = name {
            tokens.push_token(name);
            tokens.push_token(" ");
        }
        tokens.push_token(kind);
        tokens
    }

    pub(crate) fn for_selection(
        arena: &'a SelectionArena,
        selection: SelectionId,
    ) -> Self {
        Self {
            arena,
            pending: vec![Pending::Selection(selection)],
        }
    }

    fn expand_selection(&mut self, id: SelectionId) {
        let arena = self.arena;
        let Some(selection) = arena.get(id) else {
            return;
        };

        if !selection.children.is_empty() {
            self.push_selection_list(&selection.children);
        }

        if !selection.arguments.is_empty() {
            let mut arguments = String::new();
            for (i, argument) in selection.arguments.iter().enumerate() {
                if i != 0 {
                    arguments.push(',');
                }
                argument.append_query_text(&mut arguments);
            }
            self.push_token(")");
            self.pending.push(Pending::Token(Cow::Owned(arguments)));
            self.push_token("(");
        }

        self.push_token(&selection.name);

        if let Some(alias) = selection.alias() {
            self.push_token(":");
            self.push_token(alias);
        }
    }

    /// Pushes `{child,child,...}` so that it pops in order.
    fn push_selection_list(&mut self, selections: &[SelectionId]) {
        self.push_token("}");
        for (i, child) in selections.iter().enumerate().rev() {
            self.pending.push(Pending::Selection(*child));
            if i != 0 {
                self.push_token(",");
            }
        }
        self.push_token("{");
    }

    fn push_token(&mut self, token: &'a str) {
        self.pending.push(Pending::Token(Cow::Borrowed(token)));
    }
}

impl<'a> Iterator for QueryTokens<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.pending.pop()? {
                Pending::Token(token) => return Some(token),
                Pending::Selection(id) => self.expand_selection(id),
            }
        }
    }
}

impl FusedIterator for QueryTokens<'_> {}
