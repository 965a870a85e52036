//! Game state and core simulation types
//!
//! All per-session state lives in `GameState`; nothing gameplay-relevant is
//! ambient. The tick orchestration in `tick.rs` mutates it, the embedder
//! reads it back through `Snapshot`.

use glam::Vec2;
use serde::Serialize;

use super::collision::Aabb;
use super::spawn::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Waiting in the menu for a start command
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, score frozen until acknowledged
    GameOver,
}

/// Enemy variants. They share movement and size and differ only in stats,
/// so the differences live in this table rather than in separate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnemyKind {
    Standard,
    Elite,
}

impl EnemyKind {
    /// Health pool at spawn
    pub fn max_health(&self) -> i32 {
        match self {
            EnemyKind::Standard => 100,
            EnemyKind::Elite => 200,
        }
    }

    /// Score awarded on kill
    pub fn score_value(&self) -> u64 {
        match self {
            EnemyKind::Standard => 100,
            EnemyKind::Elite => 200,
        }
    }

    /// Floating feedback text shown where the enemy died
    pub fn reward_text(&self) -> &'static str {
        match self {
            EnemyKind::Standard => "+100",
            EnemyKind::Elite => "+200",
        }
    }
}

/// The player's avatar
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Current health, [0, PLAYER_MAX_HEALTH]; may dip to 0 for the instant
    /// before a life is consumed
    pub health: i32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                PLAY_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                PLAY_HEIGHT - 60.0,
            ),
            health: PLAYER_MAX_HEALTH,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Apply held movement keys for one tick, clamped to the play area
    pub fn apply_movement(&mut self, left: bool, right: bool) {
        if left {
            self.pos.x -= PLAYER_SPEED;
        }
        if right {
            self.pos.x += PLAYER_SPEED;
        }
        self.pos.x = self.pos.x.clamp(0.0, PLAY_WIDTH - PLAYER_WIDTH);
    }

    /// Top-center spawn point for projectiles
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + PLAYER_WIDTH / 2.0 - PROJECTILE_WIDTH / 2.0,
            self.pos.y,
        )
    }

    pub fn reset_health(&mut self) {
        self.health = PLAYER_MAX_HEALTH;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A player projectile, moving straight up
#[derive(Debug, Clone, Serialize)]
pub struct Projectile {
    pub pos: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    pub fn advance(&mut self) {
        self.pos.y -= PROJECTILE_SPEED;
    }

    /// Fully above the top edge of the play area
    pub fn is_off_top(&self) -> bool {
        self.pos.y + PROJECTILE_HEIGHT < 0.0
    }
}

/// A descending enemy
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub health: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            health: kind.max_health(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }

    pub fn advance(&mut self) {
        self.pos.y += ENEMY_SPEED;
    }

    /// Exited below the bottom edge
    pub fn is_off_bottom(&self) -> bool {
        self.pos.y > PLAY_HEIGHT
    }
}

/// A reusable assist ally. The three slots exist for the whole session and
/// toggle between active and inactive instead of being recreated.
#[derive(Debug, Clone, Serialize)]
pub struct Assist {
    pub pos: Vec2,
    /// Slot index, 1..=3
    pub slot: u8,
    pub active: bool,
}

impl Assist {
    pub fn new(slot: u8) -> Self {
        Self {
            pos: Vec2::new(50.0 + 100.0 * (slot as f32 - 1.0), PLAY_HEIGHT - 60.0),
            slot,
            active: true,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, ASSIST_WIDTH, ASSIST_HEIGHT)
    }

    /// Drift upward while active; deactivate once past the top edge
    pub fn advance(&mut self) {
        if self.active {
            self.pos.y -= ASSIST_SPEED;
            if self.pos.y < 0.0 {
                self.active = false;
            }
        }
    }
}

/// Floating feedback text, purely cosmetic.
///
/// Fade is tick-coupled to match the legacy per-frame decrement: lifetime is
/// derived from the duration at the assumed frame length, and opacity is
/// computed from integer counters so float drift can never shift the removal
/// tick.
#[derive(Debug, Clone, Serialize)]
pub struct FloatingText {
    pub text: String,
    pub pos: Vec2,
    pub age_ticks: u32,
    pub lifetime_ticks: u32,
}

impl FloatingText {
    pub fn new(text: impl Into<String>, pos: Vec2, duration_ms: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            age_ticks: 0,
            lifetime_ticks: (duration_ms / TEXT_FRAME_MS).ceil().max(1.0) as u32,
        }
    }

    /// Current opacity in [0, 1], strictly decreasing each tick
    pub fn opacity(&self) -> f32 {
        1.0 - self.age_ticks as f32 / self.lifetime_ticks as f32
    }

    pub fn age_one_tick(&mut self) {
        self.age_ticks += 1;
    }

    pub fn is_expired(&self) -> bool {
        self.age_ticks >= self.lifetime_ticks
    }
}

/// The live entity collections for one session.
///
/// Projectiles, enemies and texts are insertion-ordered dynamic sequences;
/// the assist slots are a fixed array. Removal mid-pass uses mark-and-compact
/// (`retain_by_mask`) so that no survivor is skipped or processed twice.
#[derive(Debug, Clone, Serialize)]
pub struct Entities {
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub assists: [Assist; ASSIST_SLOTS],
    pub texts: Vec<FloatingText>,
}

impl Entities {
    pub fn new() -> Self {
        Self {
            projectiles: Vec::new(),
            enemies: Vec::new(),
            assists: [Assist::new(1), Assist::new(2), Assist::new(3)],
            texts: Vec::new(),
        }
    }

    pub fn add_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn add_text(&mut self, text: FloatingText) {
        self.texts.push(text);
    }

    /// No projectiles, enemies or texts alive (assist slots always exist)
    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty() && self.enemies.is_empty() && self.texts.is_empty()
    }

    /// First inactive assist slot, lowest slot number first
    pub fn first_inactive_assist_mut(&mut self) -> Option<&mut Assist> {
        self.assists.iter_mut().find(|a| !a.active)
    }

    /// Compact a collection against a keep-mask collected during a pass.
    /// The mask must be as long as the collection was when the pass started.
    pub fn retain_by_mask<T>(items: &mut Vec<T>, keep: &[bool]) {
        debug_assert_eq!(items.len(), keep.len());
        let mut index = 0;
        items.retain(|_| {
            let kept = keep[index];
            index += 1;
            kept
        });
    }
}

impl Default for Entities {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state for one process
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Session score, frozen at game over
    pub score: u64,
    /// Remaining lives
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set once the embedder reports all assets loaded; gates `start_game`
    pub assets_ready: bool,
    pub player: Player,
    pub entities: Entities,
    pub spawner: Spawner,
    seed: u64,
}

impl GameState {
    /// Create a fresh state in the menu phase with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: STARTING_LIVES,
            time_ticks: 0,
            assets_ready: false,
            player: Player::new(),
            entities: Entities::new(),
            spawner: Spawner::new(seed),
            seed,
        }
    }

    /// External signal that all assets finished loading
    pub fn notify_assets_ready(&mut self) {
        if !self.assets_ready {
            self.assets_ready = true;
            log::info!("assets ready, start enabled");
        }
    }

    /// Menu -> Playing. No-op unless in the menu with assets ready.
    pub fn start_game(&mut self) {
        if self.phase != GamePhase::Menu {
            return;
        }
        if !self.assets_ready {
            log::warn!("start requested before assets ready, ignoring");
            return;
        }
        self.phase = GamePhase::Playing;
        log::info!("session started (seed {})", self.seed);
    }

    /// GameOver -> Menu. Rebuilds all per-session entities, resets the assist
    /// slots to active and re-arms the spawn timer. No-op in other phases.
    pub fn acknowledge_game_over(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        log::info!("game over acknowledged, final score {}", self.score);
        self.reset_session();
        self.phase = GamePhase::Menu;
    }

    /// Fresh player, empty collections, full lives and score zero. The
    /// spawner is rebuilt too, so no pending spawn interval leaks across
    /// sessions.
    fn reset_session(&mut self) {
        // Fold the previous session's length into the seed so the next run
        // draws a different spawn sequence
        self.seed = self.seed.wrapping_add(self.time_ticks).wrapping_add(1);
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_ticks = 0;
        self.player = Player::new();
        self.entities = Entities::new();
        self.spawner = Spawner::new(self.seed);
    }

    /// Spawn a projectile at the player's muzzle. No-op outside Playing.
    pub fn fire_projectile(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let muzzle = self.player.muzzle();
        self.entities.add_projectile(Projectile::new(muzzle));
    }

    /// Reposition the first inactive assist at the player and reactivate it,
    /// restoring player health. All slots active: total no-op.
    pub fn summon_assist(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let anchor = Vec2::new(
            self.player.pos.x + PLAYER_WIDTH / 2.0 - ASSIST_WIDTH / 2.0,
            self.player.pos.y - ASSIST_HEIGHT,
        );
        if let Some(assist) = self.entities.first_inactive_assist_mut() {
            assist.pos = anchor;
            assist.active = true;
            self.player.reset_health();
            log::debug!("assist {} summoned", assist.slot);
        }
    }

    /// Reactivate a specific assist slot in place (1..=3). Unlike summoning
    /// this neither repositions the assist nor restores health.
    pub fn activate_assist_slot(&mut self, slot: u8) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(assist) = self
            .entities
            .assists
            .iter_mut()
            .find(|a| a.slot == slot)
        {
            assist.active = true;
        }
    }

    /// Per-tick view for the renderer and HUD
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            health: self.player.health.max(0),
            player: self.player.clone(),
            projectiles: self.entities.projectiles.clone(),
            enemies: self.entities.enemies.clone(),
            assists: self.entities.assists.clone(),
            texts: self
                .entities
                .texts
                .iter()
                .map(|t| TextView {
                    text: t.text.clone(),
                    pos: t.pos,
                    opacity: t.opacity(),
                })
                .collect(),
        }
    }
}

/// A floating text as the HUD sees it
#[derive(Debug, Clone, Serialize)]
pub struct TextView {
    pub text: String,
    pub pos: Vec2,
    pub opacity: f32,
}

/// Immutable per-tick snapshot published for rendering and HUD display.
/// Health is clamped non-negative here so health bars never render negative.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub health: i32,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub assists: [Assist; ASSIST_SLOTS],
    pub texts: Vec<TextView>,
}
