use std::fmt::Display;

use thiserror::Error as ThisError;

/// Classification tag carried by every [`Error`]
///
/// The display name of each kind doubles as the problem-detail title
/// returned to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ErrorKind {
    /// A required field was missing or empty
    #[error("invalid argument")]
    InvalidArgument,
    /// The request payload could not be decoded
    #[error("invalid body")]
    InvalidBody,
    /// A uniqueness constraint was violated on insert
    #[error("duplicate key")]
    DuplicateKey,
    /// The lookup or delete target does not exist
    #[error("not found")]
    NotFound,
    /// Anything else; treated as an internal failure
    #[error("unknown")]
    Unknown,
}

/// Error type shared by the domain, application and storage layers
///
/// Holds a fixed [`ErrorKind`] plus a message that each layer extends with
/// [`Error::context`]. The message reads outermost context first and ends
/// with the innermost cause, e.g.
/// `error on insert domain team: duplicate key`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Creates a bare error whose message is the kind name
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.to_string(),
        }
    }

    /// Creates an `InvalidArgument` error wrapped with `context`
    pub fn invalid_argument(context: impl Display) -> Self {
        Self::new(ErrorKind::InvalidArgument).context(context)
    }

    /// Creates a `NotFound` error wrapped with `context`
    pub fn not_found(context: impl Display) -> Self {
        Self::new(ErrorKind::NotFound).context(context)
    }

    /// Creates an `Unknown` error from a native failure
    ///
    /// The native text is kept in the message for server-side logs; it is
    /// never rendered to clients.
    pub fn unknown(source: impl Display) -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: source.to_string(),
        }
    }

    /// Prefixes the message with `context`, keeping the kind
    pub fn context(self, context: impl Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{}: {}", context, self.message),
        }
    }

    /// Returns the classification of this error
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns true if this error carries `kind`
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Returns the full contextual message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
