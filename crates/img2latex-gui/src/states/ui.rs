/// Maximum number of log lines kept for the status bar.
const MAX_LOG_LINES: usize = 200;

/// Presentation-only UI state. The converter data lives in
/// `img2latex_core::state::ConverterState`.
#[derive(Default)]
pub struct UIState {
    /// Files are hovering over the window.
    pub drag_active: bool,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,

    /// A native file picker is open.
    browse_open: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    /// Claim the file picker. False while another picker is still open.
    pub fn begin_browse(&mut self) -> bool {
        !std::mem::replace(&mut self.browse_open, true)
    }

    pub fn end_browse(&mut self) {
        self.browse_open = false;
    }
}
