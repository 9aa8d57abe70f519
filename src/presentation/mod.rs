//! Presentation port
//!
//! The core never draws, plays audio or reads devices itself. It talks to an
//! implementation of [`Presentation`], which owns every loaded asset for the
//! lifetime of the process.

pub mod background;
pub mod headless;

pub use background::BackgroundCycler;
pub use headless::{HeadlessPresentation, SoundCall};

use glam::IVec2;

use crate::audio::SoundEffect;
use crate::error::GameError;
use crate::sim::{InputEvent, KeySet, MatchState, Rect};

/// Which animated background a screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    Intro,
    Menu,
    Battle,
    End,
}

impl Scene {
    pub const ALL: [Scene; 4] = [Scene::Intro, Scene::Menu, Scene::Battle, Scene::End];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Intro => "intro",
            Scene::Menu => "menu",
            Scene::Battle => "battle",
            Scene::End => "end",
        }
    }
}

/// Horizontal anchor for text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// RGB color
pub type Color = [u8; 3];

pub const WHITE: Color = [255, 255, 255];

/// How a line of text is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: u16,
    pub color: Color,
    pub align: Align,
    /// Draw a dark drop shadow under the text
    pub shadow: bool,
}

impl TextStyle {
    pub const HEALTH: TextStyle = TextStyle {
        size: 40,
        color: WHITE,
        align: Align::Left,
        shadow: false,
    };
    pub const TITLE: TextStyle = TextStyle {
        size: 90,
        color: WHITE,
        align: Align::Center,
        shadow: true,
    };
    pub const WINNER: TextStyle = TextStyle {
        size: 100,
        color: WHITE,
        align: Align::Center,
        shadow: false,
    };
    pub const PROMPT: TextStyle = TextStyle {
        size: 40,
        color: WHITE,
        align: Align::Center,
        shadow: false,
    };

    pub fn aligned(self, align: Align) -> Self {
        Self { align, ..self }
    }
}

/// Everything needed to draw one frame's backdrop and playfield
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub scene: Scene,
    /// Index into the scene's background sequence
    pub background: usize,
    /// Ships, bullets and healths while a match is on screen
    pub state: Option<&'a MatchState>,
}

/// Rendering, audio and input services consumed by the game loop
pub trait Presentation {
    /// Drain all pending input events
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Keys held down right now
    fn held_keys(&self) -> KeySet;

    /// Number of frames in a scene's background animation
    fn background_frames(&self, scene: Scene) -> usize;

    /// Draw the background and, during a match, the border, ships and bullets
    fn render_frame(&mut self, frame: &Frame<'_>);

    fn render_text(&mut self, text: &str, position: IVec2, style: TextStyle);

    /// Draw the intro loading bar, `fraction` in 0.0..=1.0
    fn draw_progress_bar(&mut self, fraction: f32, color: Color);

    /// Draw a button centered on `center`; returns its clickable region
    fn draw_button(&mut self, label: &str, center: IVec2) -> Rect;

    fn play_sound(&mut self, effect: SoundEffect, volume: f32);

    fn stop_sound(&mut self, effect: SoundEffect);

    fn play_music(&mut self, looped: bool, volume: f32);

    /// Show the finished frame
    fn present(&mut self) -> Result<(), GameError>;

    /// Release every acquired resource. Called once on exit.
    fn shutdown(&mut self);
}
