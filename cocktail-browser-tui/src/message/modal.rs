/// Modal messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// Dismiss (Esc, Ctrl+C)
    Close,
    /// Acknowledge (Enter)
    Confirm,
}
