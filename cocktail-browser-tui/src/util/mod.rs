//! Terminal and process plumbing
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           main loop (app.rs)                            │
//! │                                                                         │
//! │    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//! │    │ keypress│ ──▶ │  Event  │ ──▶ │ Message  │ ──▶ │ Update  │         │
//! │    └─────────┘     │  layer  │     │  layer   │     │  layer  │         │
//! │         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//! │         │                                                │              │
//! │         │          ┌─────────┐     ┌──────────┐          ▼              │
//! │         │          │  Util   │     │  Model   │ ◀────────┘              │
//! │         │          │  layer  │     │  layer   │                         │
//! │         │          └─────────┘     └────┬─────┘                         │
//! │         │                               │                               │
//! │         │          ┌─────────┐          ▼                               │
//! │         └──────────│  View   │ ◀── reads state                          │
//! │           screen   │  layer  │                                          │
//! │                    └─────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Util owns the terminal (raw mode, alternate screen) and the log file.

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
