pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when searching for books.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The query string was empty.
    InvalidQuery,
    /// The offset was negative.
    InvalidOffset,
    /// The limit was outside of the accepted range.
    InvalidLimit,
    /// The name given is not one of the searchable fields.
    InvalidField,
    /// The request URL could not be built from the query and options.
    InvalidUrl,
    /// The request could not be sent or the response could not be read.
    IO,
    /// The API answered with a status other than `200 OK`.
    Status(u16),
    /// An error caused when parsing/deserialization fails.
    Deserialize,
}

impl ErrorKind {
    /// Returns `true` when the error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidQuery
                | Self::InvalidOffset
                | Self::InvalidLimit
                | Self::InvalidField
                | Self::InvalidUrl
        )
    }
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::InvalidQuery => f.write_str("Invalid query")?,
            ErrorKind::InvalidOffset => f.write_str("Invalid offset")?,
            ErrorKind::InvalidLimit => f.write_str("Invalid limit")?,
            ErrorKind::InvalidField => f.write_str("Invalid field")?,
            ErrorKind::IO => f.write_str("IO error")?,
            ErrorKind::Status(code) => write!(f, "Unexpected response status {code}")?,
            ErrorKind::Deserialize => f.write_str("Deserialize error")?,
            ErrorKind::InvalidUrl => f.write_str("Invalid URL")?,
        }

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
