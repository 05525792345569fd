//! Turn the `[Service]` section of a systemd unit into a `systemd-run`
//! command line, so the service can be tried out as a transient unit.

pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod translate;
pub mod unit;

pub use error::TranslateError;
pub use translate::{render, translate, Invocation, RunOptions};
