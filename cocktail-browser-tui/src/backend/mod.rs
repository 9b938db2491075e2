//! Backend layer
//!
//! Bridges the synchronous UI loop and the async services in
//! `cocktail-browser-app`. Commands go in, task messages come back over an
//! unbounded channel.

mod executor;

pub use executor::Executor;
