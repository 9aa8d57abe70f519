//! Match state and core simulation types
//!
//! Everything a running match owns lives in [`MatchState`]: both ships, both
//! bullet collections and both health counters.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// One of the two competing ships, by starting position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }

    /// Horizontal direction this side's bullets travel in
    pub fn heading(self) -> i32 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }

    /// Banner shown when this side wins the round
    pub fn winner_label(self) -> String {
        format!("{} Wins!", self.as_str())
    }
}

/// Who controls the right-hand ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Right ship is driven by the AI
    Single,
    /// Both ships are driven from the keyboard
    Dual,
}

/// The playfield, split in two by a vertical border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub border: Rect,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            border: Rect::new(
                ARENA_WIDTH / 2 - BORDER_WIDTH / 2,
                0,
                BORDER_WIDTH,
                ARENA_HEIGHT,
            ),
        }
    }
}

impl Arena {
    /// The half of the arena a side's ship must stay inside
    pub fn half(&self, side: Side) -> Rect {
        match side {
            Side::Left => Rect::new(0, 0, self.border.x, self.height),
            Side::Right => Rect::new(
                self.border.right(),
                0,
                self.width - self.border.right(),
                self.height,
            ),
        }
    }

    /// Whether a player-driven ship may occupy `rect`.
    ///
    /// Edges are exclusive: a ship may approach a wall or the border but a
    /// step that would land exactly on it is refused.
    pub fn permits(&self, side: Side, rect: &Rect) -> bool {
        let half = self.half(side);
        rect.x > half.x
            && rect.right() < half.right()
            && rect.y > half.y
            && rect.bottom() < half.bottom()
    }
}

/// A player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub side: Side,
    pub rect: Rect,
}

impl Ship {
    /// Spawn a ship at its side's starting position
    pub fn new(side: Side) -> Self {
        let start = match side {
            Side::Left => LEFT_START,
            Side::Right => RIGHT_START,
        };
        Self::at(side, start)
    }

    pub fn at(side: Side, pos: IVec2) -> Self {
        Self {
            side,
            rect: Rect::new(pos.x, pos.y, SHIP_WIDTH, SHIP_HEIGHT),
        }
    }

    pub fn center_y(&self) -> i32 {
        self.rect.y + self.rect.height / 2
    }

    /// X coordinate bullets leave from: the edge facing the opponent
    pub fn muzzle_x(&self) -> i32 {
        match self.side {
            Side::Left => self.rect.right(),
            Side::Right => self.rect.x,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub side: Side,
    pub rect: Rect,
}

impl Bullet {
    /// Spawn a bullet at the ship's leading edge, vertically centered
    pub fn from_ship(ship: &Ship) -> Self {
        Self {
            side: ship.side,
            rect: Rect::new(
                ship.muzzle_x(),
                ship.center_y() - 2,
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ),
        }
    }

    /// Move one tick toward the opposing side
    pub fn advance(&mut self) {
        self.rect.x += BULLET_VEL * self.side.heading();
    }

    /// True once the bullet has flown past the arena's far edge
    pub fn has_exited(&self, arena: &Arena) -> bool {
        match self.side {
            Side::Left => self.rect.x > arena.width,
            Side::Right => self.rect.x < 0,
        }
    }
}

/// Simulation events, drained each tick by the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet was spawned by this side
    BulletFired(Side),
    /// This side's ship took a hit
    ShipHit(Side),
    /// A ship's health reached zero
    RoundOver { winner: Side },
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub mode: GameMode,
    pub arena: Arena,
    pub left: Ship,
    pub right: Ship,
    /// Live bullets in fire order
    pub left_bullets: Vec<Bullet>,
    pub right_bullets: Vec<Bullet>,
    pub left_health: i32,
    pub right_health: i32,
    /// Milliseconds since the right ship last fired (drives the AI)
    pub ai_fire_timer_ms: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set once the round is decided
    pub winner: Option<Side>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Fresh match: ships at their start positions, full health, no bullets
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            arena: Arena::default(),
            left: Ship::new(Side::Left),
            right: Ship::new(Side::Right),
            left_bullets: Vec::new(),
            right_bullets: Vec::new(),
            left_health: START_HEALTH,
            right_health: START_HEALTH,
            ai_fire_timer_ms: 0,
            time_ticks: 0,
            winner: None,
            events: Vec::new(),
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut Ship {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn bullets(&self, side: Side) -> &[Bullet] {
        match side {
            Side::Left => &self.left_bullets,
            Side::Right => &self.right_bullets,
        }
    }

    pub fn health(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_health,
            Side::Right => self.right_health,
        }
    }

    /// Whether the right ship is driven by the AI
    pub fn is_single_player(&self) -> bool {
        self.mode == GameMode::Single
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
