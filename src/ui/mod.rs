//! UI models
//!
//! State and hit-testing only; drawing happens in `renderer`.

pub mod menu;

pub use menu::{HeroMenu, MenuCommand};
