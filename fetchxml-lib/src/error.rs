//! Error types

/// Errors that can occur while parsing FetchXML documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document text is not well-formed XML.
    #[error("malformed XML: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// A well-formed document lacks the expected `<entity>` element.
    #[error("no <entity> element found in document")]
    MissingEntity,

    /// The `<entity>` element carries no `name` attribute.
    #[error("<entity> element has no name attribute")]
    MissingEntityName,
}

impl Error {
    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Returns `true` if this error indicates malformed input text.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Self::parse(error.to_string())
    }
}
