//! Per-page state

mod modal;
mod preferences;
mod session;

pub use modal::{Modal, ModalState};
pub use preferences::PreferencesForm;
pub use session::SessionState;
