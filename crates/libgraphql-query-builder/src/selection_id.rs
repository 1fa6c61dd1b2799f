/// A stable handle to a [`Selection`](crate::Selection) stored in a
/// [`SelectionArena`](crate::SelectionArena).
///
/// Two handles denote the same selection iff they are equal. A handle
/// remembers which arena produced it (clones of that arena included) and
/// resolves nowhere else: anywhere else it is reported as
/// [`QueryBuildError::AbsentSelection`](crate::QueryBuildError::AbsentSelection)
/// during validation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SelectionId {
    pub(crate) arena: u32,
    pub(crate) index: usize,
}
impl SelectionId {
    pub fn index(&self) -> usize {
        self.index
    }
}
impl std::fmt::Display for SelectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "selection #{}", self.index)
    }
}
