pub mod error;

pub use error::{ContractorError, IdentifierError};
