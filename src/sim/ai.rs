//! Single-player opponent
//!
//! A proportional vertical tracker plus a fixed-interval autofire. The AI
//! keeps no state of its own; the fire timer lives on the match.

use super::projectile::fire;
use super::state::{Arena, MatchState, Ship, Side};
use crate::consts::{AI_FIRE_INTERVAL_MS, MAX_BULLETS, SHIP_VEL};

/// Side the AI plays
pub const AI_SIDE: Side = Side::Right;

/// Step `ai` one velocity unit toward `target`'s vertical center, then clamp
/// it to the arena's vertical bounds. Stops only on exact alignment.
pub fn track(ai: &mut Ship, target: &Ship, arena: &Arena) {
    let (own, goal) = (ai.center_y(), target.center_y());
    if own < goal {
        ai.rect.y += SHIP_VEL;
    } else if own > goal {
        ai.rect.y -= SHIP_VEL;
    }
    ai.rect.y = ai.rect.y.clamp(0, arena.height - ai.rect.height);
}

/// Advance the AI fire timer and shoot if the interval has passed and a
/// bullet slot is free. Returns whether a bullet was spawned.
pub fn update_fire(state: &mut MatchState, elapsed_ms: u32) -> bool {
    state.ai_fire_timer_ms = state.ai_fire_timer_ms.saturating_add(elapsed_ms);
    if state.bullets(AI_SIDE).len() < MAX_BULLETS && state.ai_fire_timer_ms > AI_FIRE_INTERVAL_MS {
        return fire(state, AI_SIDE);
    }
    false
}

/// One AI tick: track the opponent, then try to fire
pub fn update(state: &mut MatchState, elapsed_ms: u32) {
    let target = state.ship(AI_SIDE.opponent()).clone();
    let arena = state.arena;
    track(state.ship_mut(AI_SIDE), &target, &arena);
    update_fire(state, elapsed_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, GameMode};
    use glam::IVec2;

    #[test]
    fn test_tracks_toward_target() {
        let arena = Arena::default();
        let target = Ship::at(Side::Left, IVec2::new(100, 100));
        let mut ai = Ship::at(Side::Right, IVec2::new(700, 300));
        track(&mut ai, &target, &arena);
        assert_eq!(ai.rect.y, 295);

        let target = Ship::at(Side::Left, IVec2::new(100, 380));
        track(&mut ai, &target, &arena);
        assert_eq!(ai.rect.y, 300);
    }

    #[test]
    fn test_stops_on_exact_alignment() {
        let arena = Arena::default();
        let target = Ship::at(Side::Left, IVec2::new(100, 250));
        let mut ai = Ship::at(Side::Right, IVec2::new(700, 250));
        for _ in 0..10 {
            track(&mut ai, &target, &arena);
            assert_eq!(ai.rect.y, 250);
        }

        // Resumes once the target moves
        let target = Ship::at(Side::Left, IVec2::new(100, 260));
        track(&mut ai, &target, &arena);
        assert_eq!(ai.rect.y, 255);
    }

    #[test]
    fn test_oscillates_when_offset_is_not_a_step_multiple() {
        let arena = Arena::default();
        let target = Ship::at(Side::Left, IVec2::new(100, 202));
        let mut ai = Ship::at(Side::Right, IVec2::new(700, 200));
        track(&mut ai, &target, &arena);
        assert_eq!(ai.rect.y, 205);
        track(&mut ai, &target, &arena);
        assert_eq!(ai.rect.y, 200);
    }

    #[test]
    fn test_clamped_to_arena() {
        let arena = Arena::default();
        let target = Ship::at(Side::Left, IVec2::new(100, 0));
        let mut ai = Ship::at(Side::Right, IVec2::new(700, 3));
        track(&mut ai, &target, &arena);
        // Target center is 55, own center 58: steps up 5 then clamps at 0
        assert_eq!(ai.rect.y, 0);

        let target = Ship::at(Side::Left, IVec2::new(100, 400));
        let mut ai = Ship::at(Side::Right, IVec2::new(700, 388));
        track(&mut ai, &target, &arena);
        assert_eq!(ai.rect.bottom(), 500);
    }

    #[test]
    fn test_fires_after_interval() {
        let mut state = MatchState::new(GameMode::Single);
        assert!(!update_fire(&mut state, 800));
        assert!(state.right_bullets.is_empty());

        assert!(update_fire(&mut state, 17));
        assert_eq!(state.right_bullets.len(), 1);
        assert_eq!(state.ai_fire_timer_ms, 0);
        assert_eq!(state.events, vec![GameEvent::BulletFired(Side::Right)]);
    }

    #[test]
    fn test_holds_fire_at_cap() {
        let mut state = MatchState::new(GameMode::Single);
        for _ in 0..3 {
            assert!(update_fire(&mut state, 801));
        }
        assert!(!update_fire(&mut state, 5000));
        assert_eq!(state.right_bullets.len(), 3);
        // Timer keeps running so the next free slot is used immediately
        state.right_bullets.pop();
        assert!(update_fire(&mut state, 0));
    }
}
