use crate::utils::ContractorError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};

/// A JPEG chosen by the user for the contractor record.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    path: PathBuf,
    bytes: Vec<u8>,
}

/// What the form shows in place of the "Add Image" button.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    pub data_url: String,
    pub dimensions: Option<(u32, u32)>,
}

impl ImageAttachment {
    /// Only `.jpg` and `.jpeg` files are accepted. The check is on the file
    /// name; contents are not inspected.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ContractorError> {
        let path = path.as_ref();

        match ImageFormat::from_path(path) {
            Ok(ImageFormat::Jpeg) => {}
            _ => {
                return Err(ContractorError::UnsupportedImage(format!(
                    "{} is not a .jpg/.jpeg file",
                    path.display()
                )))
            }
        }

        let bytes = std::fs::read(path)?;
        log::debug!("Selected image {:?} ({} bytes)", path, bytes.len());

        Ok(ImageAttachment {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File contents decoded as UTF-8, invalid sequences replaced with
    /// U+FFFD. This is the `image` value sent to the save endpoint.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    pub fn preview(&self) -> ImagePreview {
        let data_url = format!("data:image/jpeg;base64,{}", STANDARD.encode(&self.bytes));

        let dimensions = match image::load_from_memory_with_format(&self.bytes, ImageFormat::Jpeg) {
            Ok(img) => Some(img.dimensions()),
            Err(e) => {
                log::warn!("Could not decode {:?} for preview: {}", self.path, e);
                None
            }
        };

        ImagePreview {
            data_url,
            dimensions,
        }
    }
}
