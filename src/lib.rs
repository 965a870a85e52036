//! Sky Siege - a wave-defense arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game state)
//! - `highscores`: In-memory score table for the process lifetime
//!
//! Rendering, asset loading and keyboard capture are external collaborators:
//! the embedder calls `notify_assets_ready`/`start_game`, feeds a `TickInput`
//! into each `tick`, and draws from `GameState::snapshot`.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const PLAY_WIDTH: f32 = 1920.0;
    pub const PLAY_HEIGHT: f32 = 1080.0;

    /// Fixed simulation timestep (60 Hz)
    pub const TICK_MS: f32 = 1000.0 / 60.0;
    /// Frame duration the floating-text fade math assumes (legacy 60fps)
    pub const TEXT_FRAME_MS: f32 = 16.67;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Horizontal speed, pixels per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Health lost per overlapping enemy per tick
    pub const CONTACT_DAMAGE: i32 = 10;
    /// Session lives. The game is a score chase, so this is effectively unlimited.
    pub const STARTING_LIVES: u32 = 5_000_000;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;
    pub const PROJECTILE_DAMAGE: i32 = 50;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 50.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    pub const ENEMY_SPEED: f32 = 3.0;
    /// Spawn cadence
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;
    /// Probability a spawn is the elite variant
    pub const ELITE_CHANCE: f64 = 0.2;

    /// Assist defaults
    pub const ASSIST_WIDTH: f32 = 50.0;
    pub const ASSIST_HEIGHT: f32 = 50.0;
    pub const ASSIST_SPEED: f32 = 3.0;
    pub const ASSIST_DAMAGE: i32 = 100;
    pub const ASSIST_SLOTS: usize = 3;

    /// Floating feedback text lifetime
    pub const TEXT_DURATION_MS: f32 = 2000.0;
}
