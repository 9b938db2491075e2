//! View layer
//!
//! Rendering is a pure function of [`App`](crate::model::App): nothing here
//! mutates state, so any model can be drawn into a `TestBackend` and
//! inspected.
//!
//! ```text
//! ┌──────────────────────── title bar ────────────────────────┐
//! ├──────────┬────────────────────────────────────────────────┤
//! │ Menu     │ Preferences | Cocktails                        │
//! │ ≡ Prefs •│                                                │
//! │ ● Cockt. │                                                │
//! ├──────────┴────────────────────────────────────────────────┤
//! │ key hints │ status message                      status bar│
//! └───────────────────────────────────────────────────────────┘
//! ```

mod components;
mod layout;
mod pages;
mod text;
pub mod theme;

pub use layout::render;
