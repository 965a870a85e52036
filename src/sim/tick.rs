//! Fixed timestep simulation tick
//!
//! One call advances the world by one 60 Hz step: spawn timer, input
//! commands, movement, collision resolution, pruning, in that order. All
//! passes that remove entities collect a keep-mask first and compact
//! afterwards, so removal never skips or double-processes a survivor.

use super::state::{Entities, FloatingText, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left movement key held
    pub left: bool,
    /// Right movement key held
    pub right: bool,
    /// Fire a projectile (one-shot)
    pub fire: bool,
    /// Summon the first inactive assist at the player (one-shot)
    pub summon: bool,
    /// Reactivate a specific assist slot in place, 1..=3 (one-shot)
    pub activate_slot: Option<u8>,
}

/// Advance the game state by one fixed timestep. No-op outside Playing.
///
/// If lives run out mid-tick the phase flips to GameOver and the tick stops
/// immediately: the score is frozen and nothing else is processed.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // Spawn timer, cooperatively interleaved with the update
    if let Some(enemy) = state.spawner.poll(TICK_MS) {
        state.entities.add_enemy(enemy);
    }

    // One-shot commands
    if input.fire {
        state.fire_projectile();
    }
    if input.summon {
        state.summon_assist();
    }
    if let Some(slot) = input.activate_slot {
        state.activate_assist_slot(slot);
    }

    // Player movement from held keys, clamped to the play area
    state.player.apply_movement(input.left, input.right);

    // Projectiles advance; prune the ones fully above the top edge
    for projectile in &mut state.entities.projectiles {
        projectile.advance();
    }
    state.entities.projectiles.retain(|p| !p.is_off_top());

    // Enemy pass: movement, player contact, projectile hits, pruning
    let mut enemy_alive = vec![true; state.entities.enemies.len()];
    let mut projectile_alive = vec![true; state.entities.projectiles.len()];

    for idx in 0..state.entities.enemies.len() {
        state.entities.enemies[idx].advance();
        let enemy_box = state.entities.enemies[idx].aabb();

        // Contact damage to the player
        if enemy_box.overlaps(&state.player.aabb()) {
            state.player.health -= CONTACT_DAMAGE;
            if state.player.health <= 0 {
                state.lives = state.lives.saturating_sub(1);
                if state.lives == 0 {
                    state.phase = GamePhase::GameOver;
                    log::info!(
                        "game over at tick {}, final score {}",
                        state.time_ticks,
                        state.score
                    );
                    return;
                }
                state.player.reset_health();
            }
        }

        // First unconsumed overlapping projectile hits; one hit per enemy
        // per tick, and a projectile never damages two enemies
        let hit = state
            .entities
            .projectiles
            .iter()
            .enumerate()
            .find(|(pidx, projectile)| {
                projectile_alive[*pidx] && projectile.aabb().overlaps(&enemy_box)
            })
            .map(|(pidx, _)| pidx);
        if let Some(pidx) = hit {
            projectile_alive[pidx] = false;
            state.entities.enemies[idx].health -= PROJECTILE_DAMAGE;
        }

        let enemy = &state.entities.enemies[idx];
        if enemy.health <= 0 {
            enemy_alive[idx] = false;
            award_kill(state, idx);
        } else if enemy.is_off_bottom() {
            // Exited cleanly below the play area, no penalty
            enemy_alive[idx] = false;
        }
    }
    Entities::retain_by_mask(&mut state.entities.enemies, &enemy_alive);
    Entities::retain_by_mask(&mut state.entities.projectiles, &projectile_alive);

    // Assist pass: drift up, deactivate past the top edge, then each
    // still-active assist trades itself for damage on one enemy
    for assist in &mut state.entities.assists {
        assist.advance();
    }
    let mut enemy_alive = vec![true; state.entities.enemies.len()];
    for aidx in 0..ASSIST_SLOTS {
        if !state.entities.assists[aidx].active {
            continue;
        }
        let assist_box = state.entities.assists[aidx].aabb();
        let hit = state
            .entities
            .enemies
            .iter()
            .enumerate()
            .find(|(eidx, enemy)| enemy_alive[*eidx] && assist_box.overlaps(&enemy.aabb()))
            .map(|(eidx, _)| eidx);
        if let Some(eidx) = hit {
            state.entities.assists[aidx].active = false;
            state.entities.enemies[eidx].health -= ASSIST_DAMAGE;
            if state.entities.enemies[eidx].health <= 0 {
                enemy_alive[eidx] = false;
                award_kill(state, eidx);
            }
        }
    }
    Entities::retain_by_mask(&mut state.entities.enemies, &enemy_alive);

    // Floating texts fade out
    for text in &mut state.entities.texts {
        text.age_one_tick();
    }
    state.entities.texts.retain(|t| !t.is_expired());
}

/// Score a kill and drop the feedback text at the enemy's last position.
/// The caller marks the enemy dead in its keep-mask.
fn award_kill(state: &mut GameState, idx: usize) {
    let (kind, pos) = {
        let enemy = &state.entities.enemies[idx];
        (enemy.kind, enemy.pos)
    };
    state.score += kind.score_value();
    state
        .entities
        .add_text(FloatingText::new(kind.reward_text(), pos, TEXT_DURATION_MS));
    log::debug!("{kind:?} destroyed, score {}", state.score);
}
