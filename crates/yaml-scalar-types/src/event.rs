//! Scalar events as delivered by the event parser

/// A scalar node isolated by the parser.
///
/// `implicit` is true when the scalar was written plain, without quotes or
/// an explicit tag, so its type must be inferred from its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarEvent<'a> {
    pub value: &'a str,
    pub tag: Option<&'a str>,
    pub implicit: bool,
}

impl<'a> ScalarEvent<'a> {
    pub const fn new(value: &'a str, tag: Option<&'a str>, implicit: bool) -> Self {
        Self {
            value,
            tag,
            implicit,
        }
    }

    /// A plain, untagged scalar
    pub const fn plain(value: &'a str) -> Self {
        Self::new(value, None, true)
    }

    /// A quoted, untagged scalar
    pub const fn quoted(value: &'a str) -> Self {
        Self::new(value, None, false)
    }

    /// A scalar carrying an explicit tag
    pub const fn tagged(value: &'a str, tag: &'a str) -> Self {
        Self::new(value, Some(tag), false)
    }

    /// The tag, treating an empty tag as absent
    pub fn tag(&self) -> Option<&'a str> {
        self.tag.filter(|t| !t.is_empty())
    }

    /// Check if the scalar was quoted without a tag, which pins it to a string
    pub fn is_quoted_untagged(&self) -> bool {
        self.tag().is_none() && !self.implicit
    }
}
