use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::selection::SelectedImage;

/// Which user action produced a candidate image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcquisitionSource {
    Drop,
    Paste,
    Browse,
}

impl fmt::Display for AcquisitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => write!(f, "Drop"),
            Self::Paste => write!(f, "Paste"),
            Self::Browse => write!(f, "Browse"),
        }
    }
}

/// One item offered by a drop or paste, before filtering.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub name: String,
    /// MIME type announced by the platform, if any.
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, mime: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.map(str::to_string),
            bytes,
        }
    }

    /// Read a dropped file from disk. Native drops carry no MIME type.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            mime: None,
            bytes,
        })
    }
}

/// First candidate that is an image, in offer order.
///
/// Non-image items are skipped silently; `None` means the whole offer is
/// rejected and the current selection must be left untouched.
pub fn first_image(
    source: AcquisitionSource,
    candidates: impl IntoIterator<Item = Candidate>,
) -> Option<SelectedImage> {
    for candidate in candidates {
        let Candidate { name, mime, bytes } = candidate;
        match SelectedImage::from_bytes(name, mime.as_deref(), bytes) {
            Ok(image) => {
                debug!("{source}: accepted {} ({})", image.name(), image.mime());
                return Some(image);
            }
            Err(e) => debug!("{source}: skipped item: {e}"),
        }
    }
    None
}

/// Load the file the user picked in the native dialog.
pub fn from_browse(path: &Path) -> Result<SelectedImage> {
    SelectedImage::from_path(path)
}
