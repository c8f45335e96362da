//! Window title mirroring.
//!
//! The terminal title shows the same status line as the side panel. Writing
//! an OSC title sequence every frame is wasted output, so pushes are gated on
//! the text actually changing.

/// Mirrors the game status into the terminal title.
///
/// Callers feed it once per settled frame (after all pending input has been
/// applied), so a burst of intents produces at most one push.
#[derive(Debug, Clone, Default)]
pub struct TitleSync {
    enabled: bool,
    last: Option<String>,
}

impl TitleSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Decide whether the title needs updating for `status`.
    ///
    /// Returns the title to push, or None when disabled or unchanged.
    pub fn update(&mut self, status: &str) -> Option<String> {
        if !self.enabled || self.last.as_deref() == Some(status) {
            return None;
        }
        self.last = Some(status.to_string());
        Some(status.to_string())
    }

    /// Forget the last pushed title so the next update pushes again.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
