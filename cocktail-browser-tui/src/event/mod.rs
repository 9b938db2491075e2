//! Event layer
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                              main loop (app.rs)                             │
//! │                                                                             │
//! │  ┌──────────────────────────────── UI ──────────────────────────────────┐   │
//! │  │                                                                      │   │
//! │  │   ┌─────────┐          ┌───────────┐          ┌──────────┐           │   │
//! │  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │           │   │
//! │  │   │  layer  │ translate│   layer   │  consume │  layer   │           │   │
//! │  │   └─────────┘          │           │          └────┬─────┘           │   │
//! │  │        ▲               │ AppMessage│               │ mutates         │   │
//! │  │        │               │ ContentMsg│               ▼                 │   │
//! │  │   ┌─────────┐          │ ModalMsg  │          ┌──────────┐           │   │
//! │  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │           │   │
//! │  │   │  layer  │          └───────────┘   │      │  layer   │           │   │
//! │  │   └────┬────┘ ◀──────── reads ─────────┘      └──────────┘           │   │
//! │  │        │                                           ▲                 │   │
//! │  └────────│───────────────────────────────────────────│─────────────────┘   │
//! │           │                                 TaskMsg   │ Command             │
//! │           ▼                                           ▼                     │
//! │      ┌─────────┐                                ┌──────────┐                │
//! │      │terminal │                                │ Backend  │                │
//! │      │ (Util)  │                                │  layer   │                │
//! │      └─────────┘                                └────┬─────┘                │
//! │                                                      ▼                      │
//! │                                           ┌─────────────────────┐           │
//! │                                           │ cocktail-browser-app│           │
//! │                                           └─────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are read with a 100ms poll so the loop can also drain finished tasks.
//! An open modal captures all input until dismissed.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
