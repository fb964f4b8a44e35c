//! Node events handed to the resolver by the parser

/// Presentation style of a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    /// Style not known; `plain_implicit` decides
    #[default]
    Any,
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

/// A scalar node event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub value: String,
    /// Explicit tag as written in the document, if any
    pub tag: Option<String>,
    pub style: ScalarStyle,
    /// Set by the parser when the scalar may be resolved as a plain scalar
    pub plain_implicit: bool,
}

impl Scalar {
    /// An untagged plain scalar
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tag: None,
            style: ScalarStyle::Plain,
            plain_implicit: true,
        }
    }

    /// An untagged double-quoted scalar
    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tag: None,
            style: ScalarStyle::DoubleQuoted,
            plain_implicit: false,
        }
    }

    /// An untagged scalar in the given style
    pub fn with_style(value: impl Into<String>, style: ScalarStyle) -> Self {
        Self {
            value: value.into(),
            tag: None,
            style,
            plain_implicit: style == ScalarStyle::Plain,
        }
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Whether implicit type inference applies to this scalar.
    ///
    /// Only plain scalars are inferred; quoted and block scalars are strings.
    pub fn is_plain(&self) -> bool {
        match self.style {
            ScalarStyle::Plain => true,
            ScalarStyle::Any => self.plain_implicit,
            _ => false,
        }
    }
}

/// Start of a mapping or sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionStart {
    /// Explicit tag as written in the document, if any
    pub tag: Option<String>,
}

impl CollectionStart {
    pub fn untagged() -> Self {
        Self { tag: None }
    }

    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }
}

/// A node event that carries a tag decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeEvent {
    Scalar(Scalar),
    MappingStart(CollectionStart),
    SequenceStart(CollectionStart),
}

impl NodeEvent {
    /// Explicit tag on the event, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            NodeEvent::Scalar(scalar) => scalar.tag.as_deref(),
            NodeEvent::MappingStart(start) | NodeEvent::SequenceStart(start) => {
                start.tag.as_deref()
            }
        }
    }
}
