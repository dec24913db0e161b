use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};

use crate::consts::CLIPBOARD_IMAGE_NAME;
use crate::error::{ConvertError, Result};

/// A single image held by the converter view.
///
/// The bytes are shared so that state snapshots and in-flight uploads can
/// clone the selection without copying the payload.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    name: String,
    mime: String,
    bytes: Arc<[u8]>,
}

impl SelectedImage {
    /// Build a selection from raw bytes.
    ///
    /// A declared MIME type is trusted when present: `image/*` is accepted
    /// as-is and anything else is rejected. Without one, the bytes are
    /// sniffed for a known image signature.
    pub fn from_bytes(
        name: impl Into<String>,
        declared_mime: Option<&str>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self> {
        let name = name.into();
        let bytes = bytes.into();

        let mime = match declared_mime.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) if is_image_mime(m) => m.to_ascii_lowercase(),
            Some(_) => return Err(ConvertError::NotAnImage { name }),
            None => match sniff_format(&bytes) {
                Some(format) => format.to_mime_type().to_string(),
                None => return Err(ConvertError::NotAnImage { name }),
            },
        };

        Ok(Self { name, mime, bytes })
    }

    /// Read a file from disk; the display name is the file name component.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, None, bytes)
    }

    /// Encode raw RGBA pixels (as handed out by the OS clipboard) to PNG.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let img = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            ConvertError::NotAnImage {
                name: CLIPBOARD_IMAGE_NAME.to_string(),
            }
        })?;

        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;

        Ok(Self {
            name: CLIPBOARD_IMAGE_NAME.to_string(),
            mime: ImageFormat::Png.to_mime_type().to_string(),
            bytes: buf.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when both selections point at the same shared payload.
    pub fn shares_payload(&self, other: &SelectedImage) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}
