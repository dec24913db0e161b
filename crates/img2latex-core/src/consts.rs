/// Local development endpoint of the recognition service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/convert";

/// Multipart field name the local service reads the upload from.
pub const DEFAULT_FIELD_NAME: &str = "file";

/// JSON field carrying the recognised LaTeX in a success response.
pub const LATEX_FIELD: &str = "latex";

/// Shown when the service answered but returned no LaTeX.
pub const NO_OUTPUT_MESSAGE: &str = "No LaTeX output received.";

/// Shown for any transport, status or body failure.
pub const ERROR_MESSAGE: &str = "Error converting image. Check console or backend logs.";

/// Output surface text while `result_text` is empty.
pub const OUTPUT_PLACEHOLDER: &str = "Your LaTeX result will appear here...";

/// Dropzone text while no file is held.
pub const DROPZONE_PLACEHOLDER: &str = "Drag & Drop, Paste (Ctrl+V) Image Here\nor\nBrowse Files";

pub const SUBMIT_LABEL: &str = "Convert";
pub const SUBMIT_BUSY_LABEL: &str = "Converting...";
pub const BROWSE_LABEL: &str = "Browse files";

/// Display name given to images read from the clipboard.
pub const CLIPBOARD_IMAGE_NAME: &str = "clipboard.png";

/// File extensions offered by the native file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "img2latex";

pub const CONFIG_FILE_NAME: &str = "config.toml";
