//! Logging abstractions for runtime-agnostic logging
//!
//! Callers hand the provider a `SharedLogger`; the provider scopes it with
//! `NamedLogger` and times each resolution with `defer`.

mod traits;
mod noop;
mod console;
mod named;
mod timer;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use named::NamedLogger;
pub use timer::{defer, DeferGuard};
