/// The three kinds of GraphQL operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The canonical (lower-case) keyword emitted for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// Recognize an operation kind keyword, ignoring ASCII case. Anything
    /// other than `query`, `mutation`, or `subscription` yields `None`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Mutation, Self::Query, Self::Subscription]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(keyword))
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
