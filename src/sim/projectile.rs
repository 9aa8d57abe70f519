//! Bullet spawning, flight and hit resolution

use super::state::{Arena, Bullet, GameEvent, MatchState, Ship, Side};
use crate::consts::MAX_BULLETS;

/// Spawn a bullet for `side` if it is under the cap.
///
/// Returns false (and raises no event) when the side already has
/// `MAX_BULLETS` in flight.
pub fn fire(state: &mut MatchState, side: Side) -> bool {
    let bullet = Bullet::from_ship(state.ship(side));
    let bullets = match side {
        Side::Left => &mut state.left_bullets,
        Side::Right => &mut state.right_bullets,
    };
    if bullets.len() >= MAX_BULLETS {
        return false;
    }
    bullets.push(bullet);

    if side == super::ai::AI_SIDE {
        state.ai_fire_timer_ms = 0;
    }
    state.events.push(GameEvent::BulletFired(side));
    log::debug!("{} fired ({} in flight)", side.as_str(), state.bullets(side).len());
    true
}

/// Move one side's bullets and resolve them against the opposing ship.
///
/// Every bullet is visited exactly once, in fire order. A hit removes the
/// bullet and costs the target one health; a bullet past the far edge is
/// dropped without scoring.
fn advance_side(
    bullets: &mut Vec<Bullet>,
    target: &Ship,
    target_health: &mut i32,
    arena: &Arena,
    events: &mut Vec<GameEvent>,
) {
    bullets.retain_mut(|bullet| {
        bullet.advance();
        if target.rect.overlaps(&bullet.rect) {
            *target_health -= 1;
            events.push(GameEvent::ShipHit(target.side));
            false
        } else {
            !bullet.has_exited(arena)
        }
    });
}

/// Advance every bullet one tick and apply hits. Left bullets resolve
/// before right bullets.
pub fn advance_and_collide(state: &mut MatchState) {
    let MatchState {
        arena,
        left,
        right,
        left_bullets,
        right_bullets,
        left_health,
        right_health,
        events,
        ..
    } = state;

    advance_side(left_bullets, right, right_health, arena, events);
    advance_side(right_bullets, left, left_health, arena, events);
}
