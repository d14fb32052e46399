mod digits;
pub mod form;
pub mod format;
pub mod nip;
pub mod pesel;

pub use form::FormValidator;
pub use format::FormatValidator;
pub use nip::{is_valid_nip, is_valid_nip_value, Nip};
pub use pesel::{is_valid_pesel, is_valid_pesel_value, Pesel, Sex};
