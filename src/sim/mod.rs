//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module stays pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawn::Spawner;
pub use state::{
    Assist, Enemy, EnemyKind, Entities, FloatingText, GamePhase, GameState, Player, Projectile,
    Snapshot, TextView,
};
pub use tick::{TickInput, tick};
