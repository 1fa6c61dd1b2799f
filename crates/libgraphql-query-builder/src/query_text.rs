/// Implemented by every piece of an argument value that knows how to render
/// itself as GraphQL literal text.
///
/// Implementations use `#[inherent] impl QueryText`, so the methods are
/// callable without importing the trait while still being usable as a bound
/// in generic code.
///
/// Rendering never inserts whitespace and never escapes: string contents are
/// written verbatim between their quotes. Escaping for transport only happens
/// in [`Operation::to_request_body()`](crate::Operation::to_request_body).
pub trait QueryText {
    /// Append this value's literal text to `sink`.
    fn append_query_text(&self, sink: &mut String);

    /// Return this value's literal text.
    ///
    /// Convenience wrapper around
    /// [`append_query_text`](QueryText::append_query_text).
    fn to_query_text(&self) -> String {
        let mut s = String::new();
        self.append_query_text(&mut s);
        s
    }
}

/// Append `items` to `sink` separated by `,` and surrounded by `open` and
/// `close`, rendering each item with `append_item`.
pub(crate) fn append_delimited<T>(
    sink: &mut String,
    open: char,
    close: char,
    items: &[T],
    mut append_item: impl FnMut(&T, &mut String),
) {
    sink.push(open);
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            sink.push(',');
        }
        append_item(item, sink);
    }
    sink.push(close);
}
