//! Model layer
//!
//! Everything the view reads and the update layer writes lives in [`App`].
//! There is no other mutable state: background tasks only talk back through
//! messages, so the model is only ever touched from the main loop.
//!
//! ```text
//! App
//!  ├── current_page   Preferences | Cocktails   (the active component)
//!  ├── navigation     entries + cursor
//!  ├── preferences    last submitted / loaded
//!  ├── form           category, slider, focused field
//!  ├── session        items, cursor, fetch generation
//!  └── modal          end-of-list | error | help
//! ```

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::{FocusPanel, FormField};
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{Modal, ModalState, PreferencesForm, SessionState};
