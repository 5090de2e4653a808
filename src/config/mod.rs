//! Configuration loading
//!
//! Built-in defaults ship in `indexkit.toml`; a user file can override any
//! of its keys.

mod settings;

pub use settings::Settings;
