//! Player ship movement under arena constraints
//!
//! Each axis is stepped independently. A step that would leave the ship's
//! half of the arena is dropped for the tick; there is no clamping.

use super::input::MoveIntent;
use super::state::{Arena, Ship};
use crate::consts::SHIP_VEL;

/// Try to move the ship by `(dx, dy)`. Returns whether the step was taken.
fn try_step(ship: &mut Ship, dx: i32, dy: i32, arena: &Arena) -> bool {
    let moved = ship.rect.translated(dx, dy);
    if arena.permits(ship.side, &moved) {
        ship.rect = moved;
        true
    } else {
        false
    }
}

/// Apply one tick of player movement
pub fn apply_movement(ship: &mut Ship, intent: MoveIntent, arena: &Arena) {
    if intent.left {
        try_step(ship, -SHIP_VEL, 0, arena);
    }
    if intent.right {
        try_step(ship, SHIP_VEL, 0, arena);
    }
    if intent.up {
        try_step(ship, 0, -SHIP_VEL, arena);
    }
    if intent.down {
        try_step(ship, 0, SHIP_VEL, arena);
    }
}
