use crate::Argument;
use crate::SelectionId;

/// A field selection: a named, optionally aliased field with arguments and an
/// ordered list of child selections.
///
/// Children are [`SelectionId`] handles into the
/// [`SelectionArena`](crate::SelectionArena) that owns this selection. Nothing
/// is validated on mutation; names and the shape of the graph are checked when
/// the tree is serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) children: Vec<SelectionId>,
    pub(crate) name: String,
}
impl Selection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            children: vec![],
            name: name.into(),
        }
    }

    /// Append `arguments` after any previously added arguments. Duplicate
    /// argument names are kept as-is.
    pub fn add_arguments(
        &mut self,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> &mut Self {
        self.arguments.extend(arguments);
        self
    }

    /// Append `children` after any previously added children.
    pub fn add_children(
        &mut self,
        children: impl IntoIterator<Item = SelectionId>,
    ) -> &mut Self {
        self.children.extend(children);
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn children(&self) -> &[SelectionId] {
        &self.children
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or(self.name())
    }

    /// Set the alias. An empty string clears it.
    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    /// NOTE: Replaces any previously set or added arguments.
    pub fn set_arguments(
        &mut self,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> &mut Self {
        self.arguments = arguments.into_iter().collect();
        self
    }

    /// NOTE: Replaces any previously set or added children.
    pub fn set_children(
        &mut self,
        children: impl IntoIterator<Item = SelectionId>,
    ) -> &mut Self {
        self.children = children.into_iter().collect();
        self
    }
}
