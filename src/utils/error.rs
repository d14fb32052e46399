use thiserror::Error;

/// Why an identifier string could not be turned into a PESEL or NIP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("character {found:?} at position {position} is not a digit")]
    NonDigit { position: usize, found: char },

    #[error("control digit is {found}, checksum gives {expected}")]
    ChecksumMismatch { expected: u32, found: u32 },
}

#[derive(Debug, Error)]
pub enum ContractorError {
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} rejected the submission with status {status}: {body}")]
    Rejected {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Form error: {0}")]
    Form(String),
}
