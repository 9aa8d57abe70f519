//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, movement counted in ticks
//! - Stable iteration order (bullets in fire order)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod movement;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use input::{InputEvent, Key, KeySet, MoveIntent};
pub use projectile::{advance_and_collide, fire};
pub use state::{Arena, Bullet, GameEvent, GameMode, MatchState, Ship, Side};
pub use tick::{TickInput, check_winner, tick};
