use crate::name_validator::check_name;
use crate::NameKind;
use crate::QueryBuildError;
use crate::SelectionArena;
use crate::SelectionId;

#[derive(Clone, Copy, Debug, PartialEq)]
enum VisitState {
    Finished,
    OnPath,
    Unvisited,
}

/// Validates subtrees of one [`SelectionArena`]: first that every reachable
/// handle resolves and no selection can reach itself through child edges,
/// then that every name in the subtree is valid.
///
/// Visit state is kept across calls to [`SelectionValidator::validate()`],
/// so validating several roots that share subtrees (e.g. every top-level
/// selection of an operation) walks each shared selection only once.
///
/// Both walks use explicit stacks, so arbitrarily deep trees (and malformed
/// cyclic ones) never overflow the call stack.
pub(crate) struct SelectionValidator<'a> {
    arena: &'a SelectionArena,
    names_checked: Vec<bool>,
    states: Vec<VisitState>,
}
impl<'a> SelectionValidator<'a> {
    pub fn new(arena: &'a SelectionArena) -> Self {
        Self {
            arena,
            names_checked: vec![false; arena.len()],
            states: vec![VisitState::Unvisited; arena.len()],
        }
    }

    pub fn validate(&mut self, root: SelectionId) -> Result<(), QueryBuildError> {
        self.check_acyclic(root)?;
        self.check_names(root)
    }

    /// Depth-first over children in stored order. A child that is still on
    /// the current path closes a cycle; a finished child was already proven
    /// acyclic and is skipped, so shared subtrees are walked once.
    fn check_acyclic(&mut self, root: SelectionId) -> Result<(), QueryBuildError> {
        self.arena.resolve(root)?;
        if self.states[root.index()] == VisitState::Finished {
            return Ok(());
        }
        self.states[root.index()] = VisitState::OnPath;

        // (selection, index of the next child to visit)
        let mut stack = vec![(root, 0usize)];
        while let Some((id, next_child)) = stack.last_mut() {
            let id = *id;
            let child =
                self.arena.selections[id.index()]
                    .children
                    .get(*next_child)
                    .copied();
            *next_child += 1;

            let Some(child) = child else {
                self.states[id.index()] = VisitState::Finished;
                stack.pop();
                continue;
            };

            let child_selection = self.arena.resolve(child)?;
            match self.states[child.index()] {
                VisitState::OnPath => return Err(
                    QueryBuildError::CyclicSelection {
                        name: child_selection.name.to_owned(),
                        selection: child,
                    }
                ),
                VisitState::Finished => (),
                VisitState::Unvisited => {
                    self.states[child.index()] = VisitState::OnPath;
                    stack.push((child, 0));
                },
            }
        }

        Ok(())
    }

    /// Pre-order: at each selection the field name, then the alias, then
    /// each argument (including names nested in its value), then the
    /// children in order. Must only run once `check_acyclic()` has passed.
    fn check_names(&mut self, root: SelectionId) -> Result<(), QueryBuildError> {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let selection = self.arena.resolve(id)?;
            if self.names_checked[id.index()] {
                continue;
            }
            self.names_checked[id.index()] = true;

            check_name(NameKind::Field, &selection.name)?;
            if let Some(alias) = selection.alias() {
                check_name(NameKind::Alias, alias)?;
            }
            for argument in &selection.arguments {
                argument.check_names()?;
            }
            stack.extend(selection.children.iter().rev());
        }

        Ok(())
    }
}
