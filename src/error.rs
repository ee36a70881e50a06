use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be attributed to the key sheet or the
    /// message, such as I/O on the files being enciphered.
    Internal,

    /// The key sheet (rotor order, ring settings, start positions,
    /// reflector or plugboard) is invalid. No machine was built.
    Settings,

    /// The message contains no letters or contains characters that the
    /// machine has no key for.
    Input,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Rotor order does not name exactly three rotors.
    RotorCount,
    /// A rotor number is outside 1..=5.
    RotorOutOfRange,
    /// The same rotor appears more than once in the rotor order.
    RotorRepeated,
    /// A plugboard pairing is not two distinct letters.
    PlugboardPairing,
    /// A letter is plugged into more than one pairing.
    PlugboardRepeated,
    /// Ring settings or start positions do not have exactly three entries.
    DialCount,
    /// A ring setting or start position is neither a letter nor 1..=26.
    DialInvalid,
    /// The reflector is not one of A, B or C.
    ReflectorInvalid,
    /// A key sheet file could not be parsed.
    KeySheetFormat,
    /// The message has no letters once whitespace is removed.
    EmptyMessage,
    /// The message contains a character other than a letter or whitespace.
    InvalidCharacter,
    /// Interaction with the filesystem, stdin/stdout, or other I/O failed.
    Io,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct EnigmaError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag. Any code consuming errors MUST
    /// handle the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl EnigmaError {
    /// Creates a new error with a required category and display message.
    pub fn new(category: ErrorCategory, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: None,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// Shorthand for a key sheet failure.
    pub(crate) fn settings(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self::with_kind(ErrorCategory::Settings, kind, msg)
    }

    /// Shorthand for a message failure.
    pub(crate) fn input(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self::with_kind(ErrorCategory::Input, kind, msg)
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving the original as source.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        Self {
            category,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, EnigmaError>;
