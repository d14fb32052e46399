pub mod image;

pub use self::image::{ImageAttachment, ImagePreview};
