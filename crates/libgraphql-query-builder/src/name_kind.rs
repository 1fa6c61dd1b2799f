/// The role an identifier plays in an operation. Carried by
/// [`QueryBuildError::InvalidName`](crate::QueryBuildError::InvalidName) so
/// that callers can tell which name was rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NameKind {
    Alias,
    Argument,
    Field,
    Operation,
}
impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::Argument => "argument",
            Self::Field => "field",
            Self::Operation => "operation",
        }
    }
}
impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
