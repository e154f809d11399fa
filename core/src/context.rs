//! Host-facing context: plain data the platform reads after each key.
//!
//! Design philosophy: zero abstraction, just data transfer. The engine
//! never calls into the host; it fills these fields and returns, and the
//! platform reads them to update the preedit display and insert committed
//! text.

/// IME state the platform renders after each processed key.
#[derive(Debug, Clone, Default)]
pub struct ImeContext {
    /// Text being composed, shown underlined at the insertion point.
    pub preedit_text: String,

    /// Finalized text for the application to insert.
    pub commit_text: String,
}

impl ImeContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the preedit display state.
    /// Does NOT clear `commit_text` (the platform consumes that first).
    pub fn clear(&mut self) {
        self.preedit_text.clear();
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Check if there is text to commit.
    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }

    /// Check if anything is visible at the insertion point.
    pub fn has_visible_state(&self) -> bool {
        !self.preedit_text.is_empty()
    }
}
