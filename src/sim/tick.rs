//! Fixed-rate simulation tick
//!
//! Advances a match by exactly one step. Movement is per tick; only the AI
//! fire timer looks at elapsed milliseconds.

use super::ai;
use super::input::{InputEvent, KeySet, MoveIntent, fire_presses, move_intent};
use super::movement::apply_movement;
use super::projectile::{advance_and_collide, fire};
use super::state::{GameEvent, GameMode, MatchState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: MoveIntent,
    pub right: MoveIntent,
    /// Fire key presses drained this tick
    pub fire_left: u8,
    pub fire_right: u8,
    /// Wall-clock time since the previous tick
    pub elapsed_ms: u32,
}

impl TickInput {
    /// Map this tick's events and held keys for the given mode. In single
    /// player the right-hand controls are ignored.
    pub fn from_input(events: &[InputEvent], keys: &KeySet, mode: GameMode, elapsed_ms: u32) -> Self {
        let dual = mode == GameMode::Dual;
        Self {
            left: move_intent(keys, Side::Left),
            right: if dual {
                move_intent(keys, Side::Right)
            } else {
                MoveIntent::default()
            },
            fire_left: fire_presses(events, Side::Left),
            fire_right: if dual { fire_presses(events, Side::Right) } else { 0 },
            elapsed_ms,
        }
    }
}

/// Decide the round if a ship is out of health.
///
/// The right side is checked first, so when both ships reach zero on the
/// same tick the left side is named the winner.
pub fn check_winner(state: &mut MatchState) -> Option<Side> {
    if state.winner.is_some() {
        return state.winner;
    }
    let winner = if state.right_health <= 0 {
        Some(Side::Left)
    } else if state.left_health <= 0 {
        Some(Side::Right)
    } else {
        None
    };
    if let Some(side) = winner {
        state.winner = Some(side);
        state.events.push(GameEvent::RoundOver { winner: side });
        log::info!(
            "Round over: {} (health {}/{})",
            side.winner_label(),
            state.left_health,
            state.right_health
        );
    }
    winner
}

/// Advance the match by one tick. Does nothing once the round is decided.
pub fn tick(state: &mut MatchState, input: &TickInput) {
    if state.winner.is_some() {
        return;
    }
    state.time_ticks += 1;

    for _ in 0..input.fire_left {
        fire(state, Side::Left);
    }
    if state.mode == GameMode::Dual {
        for _ in 0..input.fire_right {
            fire(state, Side::Right);
        }
    }

    let arena = state.arena;
    apply_movement(&mut state.left, input.left, &arena);
    match state.mode {
        GameMode::Single => ai::update(state, input.elapsed_ms),
        GameMode::Dual => apply_movement(&mut state.right, input.right, &arena),
    }

    advance_and_collide(state);
    check_winner(state);
}
