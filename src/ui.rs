//! Screen layouts: HUD, menu, end screen and intro
//!
//! Drawing goes through the presentation port. Buttons report back the
//! regions they were drawn at so clicks can be hit-tested next tick.

use glam::IVec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, INTRO_COLOR_CHANGE_MS, INTRO_PROMPT_BLINK_MS};
use crate::presentation::{Align, Color, Presentation, TextStyle};
use crate::sim::{MatchState, Rect, Side};

/// Button size in pixels
pub const BUTTON_SIZE: IVec2 = IVec2::new(300, 70);

/// Loading bar colors, cycled while the intro runs
pub const BAR_COLORS: [Color; 3] = [[0, 200, 255], [0, 255, 255], [0, 150, 200]];

pub const TITLE: &str = "Space Battle SAGA";

/// Every clickable button in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    SinglePlayer,
    DualPlayer,
    PlayAgain,
    Quit,
}

impl ButtonId {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonId::SinglePlayer => "Single Player",
            ButtonId::DualPlayer => "Dual Player",
            ButtonId::PlayAgain => "Play Again",
            ButtonId::Quit => "Quit",
        }
    }

    /// Fixed screen position; each screen stacks two buttons
    pub fn center(&self) -> IVec2 {
        let y = match self {
            ButtonId::SinglePlayer | ButtonId::PlayAgain => 300,
            ButtonId::DualPlayer | ButtonId::Quit => 400,
        };
        IVec2::new(ARENA_WIDTH / 2, y)
    }
}

pub const MENU_BUTTONS: [ButtonId; 2] = [ButtonId::SinglePlayer, ButtonId::DualPlayer];
pub const END_BUTTONS: [ButtonId; 2] = [ButtonId::PlayAgain, ButtonId::Quit];

/// Clickable regions from the last drawn frame
pub type HitRegions = Vec<(ButtonId, Rect)>;

/// First button whose region contains `point`
pub fn hit_test(regions: &[(ButtonId, Rect)], point: IVec2) -> Option<ButtonId> {
    regions
        .iter()
        .find(|(_, rect)| rect.contains_point(point))
        .map(|(id, _)| *id)
}

fn draw_buttons(port: &mut impl Presentation, buttons: &[ButtonId]) -> HitRegions {
    buttons
        .iter()
        .map(|id| (*id, port.draw_button(id.label(), id.center())))
        .collect()
}

/// Loading screen progress, advanced once per tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntroState {
    /// Percent, 0..=100
    pub progress: f32,
    pub elapsed_ms: u64,
    color_index: usize,
    color_timer_ms: u64,
}

impl IntroState {
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.elapsed_ms += u64::from(elapsed_ms);
        self.color_timer_ms += u64::from(elapsed_ms);
        if self.color_timer_ms > INTRO_COLOR_CHANGE_MS {
            self.color_index = (self.color_index + 1) % BAR_COLORS.len();
            self.color_timer_ms = 0;
        }
        if self.progress < 100.0 {
            self.progress = (self.progress + crate::consts::INTRO_PROGRESS_PER_TICK).min(100.0);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    pub fn bar_color(&self) -> Color {
        BAR_COLORS[self.color_index]
    }

    /// The continue prompt blinks once loading is done
    pub fn prompt_visible(&self) -> bool {
        self.is_complete() && (self.elapsed_ms / INTRO_PROMPT_BLINK_MS) % 2 == 0
    }
}

pub fn draw_intro(port: &mut impl Presentation, intro: &IntroState) {
    port.render_text(TITLE, IVec2::new(ARENA_WIDTH / 2, ARENA_HEIGHT / 4), TextStyle::TITLE);
    port.draw_progress_bar(intro.progress / 100.0, intro.bar_color());
    if intro.prompt_visible() {
        port.render_text(
            "Press any key to continue",
            IVec2::new(ARENA_WIDTH / 2, ARENA_HEIGHT / 2 + 60),
            TextStyle::PROMPT,
        );
    }
}

pub fn draw_menu(port: &mut impl Presentation) -> HitRegions {
    draw_buttons(port, &MENU_BUTTONS)
}

/// Health readouts in the top corners
pub fn draw_hud(port: &mut impl Presentation, state: &MatchState) {
    port.render_text(
        &format!("Health: {}", state.health(Side::Left)),
        IVec2::new(10, 10),
        TextStyle::HEALTH,
    );
    port.render_text(
        &format!("Health: {}", state.health(Side::Right)),
        IVec2::new(ARENA_WIDTH - 10, 10),
        TextStyle::HEALTH.aligned(Align::Right),
    );
}

pub fn draw_round_end(port: &mut impl Presentation, winner: Side) -> HitRegions {
    port.render_text(
        &winner.winner_label(),
        IVec2::new(ARENA_WIDTH / 2, 50),
        TextStyle::WINNER,
    );
    draw_buttons(port, &END_BUTTONS)
}
