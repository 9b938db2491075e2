/// Blocking notices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Advance was requested on the last item
    EndOfList,
    /// A failed operation
    Error { title: String, message: String },
    /// Key reference
    Help,
}

/// Modal state
#[derive(Debug, Default)]
pub struct ModalState {
    /// The open modal, if any
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }
}
