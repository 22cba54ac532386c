//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (platforms bottom to top)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod deform;
pub mod field;
pub mod kinematics;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::Landing;
pub use deform::Deformation;
pub use field::{FieldPlatform, PlatformField, UniformSource};
pub use session::GameSession;
pub use snapshot::{MenuView, PlayerView, Snapshot};
pub use state::{GameEvent, GamePhase, Platform, Player, RngState};
pub use tick::{TickInput, tick};
