//! A functional-options layer for assembling operations declaratively.
//!
//! Each `of_*` function returns a plain data value describing one change.
//! [`Operation::from_options()`] and [`SelectionArena::add_with_options()`]
//! apply those changes in order to a freshly created operation or selection.
//!
//! ```
//! use libgraphql_query_builder::options::*;
//! use libgraphql_query_builder::Argument;
//! use libgraphql_query_builder::Operation;
//!
//! let op = Operation::from_options("query", [
//!     of_name("Books"),
//!     of_field("books", [
//!         of_arguments([Argument::string("author", "William Shakespeare")]),
//!         of_fields(["title", "price"]),
//!     ]).into(),
//! ]).unwrap();
//!
//! assert_eq!(
//!     op.to_graphql_string().unwrap(),
//!     r#"query Books{books(author:"William Shakespeare"){title,price}}"#,
//! );
//! ```
//!
//! Names given to [`of_name()`] and [`of_alias()`] are checked as soon as the
//! option is applied; everything else is checked when the operation is
//! serialized.

use crate::name_validator::check_name;
use crate::Argument;
use crate::NameKind;
use crate::Operation;
use crate::QueryBuildError;
use crate::SelectionArena;
use crate::SelectionId;

/// A nested field together with the options to apply to it. Usable both as a
/// top-level selection ([`OperationOption`]) and as a child selection
/// ([`SelectionOption`]).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    name: String,
    options: Vec<SelectionOption>,
}
impl FieldDef {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn options(&self) -> &[SelectionOption] {
        &self.options
    }
}

/// A change applied to an [`Operation`] by [`Operation::from_options()`].
#[derive(Clone, Debug, PartialEq)]
pub enum OperationOption {
    /// Append a top-level selection.
    Field(FieldDef),
    /// Set the operation name (validated when applied).
    Name(String),
}
impl From<FieldDef> for OperationOption {
    fn from(value: FieldDef) -> Self {
        Self::Field(value)
    }
}

/// A change applied to a [`Selection`](crate::Selection) by
/// [`SelectionArena::add_with_options()`].
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionOption {
    /// Set the alias (validated when applied).
    Alias(String),
    /// Replace the arguments.
    Arguments(Vec<Argument>),
    /// Append a nested child selection.
    Field(FieldDef),
    /// Append one leaf child selection per name.
    Fields(Vec<String>),
}
impl From<FieldDef> for SelectionOption {
    fn from(value: FieldDef) -> Self {
        Self::Field(value)
    }
}

pub fn of_alias(alias: impl Into<String>) -> SelectionOption {
    SelectionOption::Alias(alias.into())
}

pub fn of_arguments(
    arguments: impl IntoIterator<Item = Argument>,
) -> SelectionOption {
    SelectionOption::Arguments(arguments.into_iter().collect())
}

pub fn of_field(
    name: impl Into<String>,
    options: impl IntoIterator<Item = SelectionOption>,
) -> FieldDef {
    FieldDef {
        name: name.into(),
        options: options.into_iter().collect(),
    }
}

pub fn of_fields<S: Into<String>>(
    names: impl IntoIterator<Item = S>,
) -> SelectionOption {
    SelectionOption::Fields(names.into_iter().map(Into::into).collect())
}

pub fn of_name(name: impl Into<String>) -> OperationOption {
    OperationOption::Name(name.into())
}

impl Operation {
    /// Create an operation of the given kind and apply `options` to it in
    /// order. The first option that fails aborts construction.
    pub fn from_options(
        kind: impl Into<String>,
        options: impl IntoIterator<Item = OperationOption>,
    ) -> Result<Self, QueryBuildError> {
        let mut operation = Self::new(kind);
        for option in options {
            match option {
                OperationOption::Field(field_def) => {
                    let id = operation.arena_mut().add_field_def(field_def)?;
                    operation.add_selections([id]);
                },

                OperationOption::Name(name) => {
                    if !name.is_empty() {
                        check_name(NameKind::Operation, &name)?;
                    }
                    operation.set_name(name);
                },
            }
        }
        Ok(operation)
    }
}

impl SelectionArena {
    /// Create a new selection for the field `name` and apply `options` to it
    /// in order.
    ///
    /// If an option fails, the error is returned and any selections created
    /// up to that point stay in the arena unattached.
    pub fn add_with_options(
        &mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = SelectionOption>,
    ) -> Result<SelectionId, QueryBuildError> {
        let id = self.add(name);
        for option in options {
            self.apply_selection_option(id, option)?;
        }
        Ok(id)
    }

    fn add_field_def(
        &mut self,
        field_def: FieldDef,
    ) -> Result<SelectionId, QueryBuildError> {
        self.add_with_options(field_def.name, field_def.options)
    }

    fn apply_selection_option(
        &mut self,
        id: SelectionId,
        option: SelectionOption,
    ) -> Result<(), QueryBuildError> {
        match option {
            SelectionOption::Alias(alias) => {
                if !alias.is_empty() {
                    check_name(NameKind::Alias, &alias)?;
                }
                self[id].set_alias(alias);
            },

            SelectionOption::Arguments(arguments) => {
                self[id].set_arguments(arguments);
            },

            SelectionOption::Field(field_def) => {
                let child = self.add_field_def(field_def)?;
                self[id].add_children([child]);
            },

            SelectionOption::Fields(names) => {
                let leaves = self.add_fields(names);
                self[id].add_children(leaves);
            },
        }
        Ok(())
    }
}
