pub mod models;
pub mod processing;
pub mod registration;
pub mod submission;
pub mod utils;
pub mod validation;

pub use registration::{ContractorRegistration, SubmissionOutcome};
pub use validation::{is_valid_nip, is_valid_pesel};
