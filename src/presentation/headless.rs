//! Window-less presentation
//!
//! Plays back a scripted list of input events and records what the game
//! asked it to draw and play. Used by the demo binary and the loop tests.

use std::collections::{BTreeMap, HashMap};

use glam::IVec2;

use super::{Color, Frame, Presentation, Scene, TextStyle};
use crate::audio::SoundEffect;
use crate::error::GameError;
use crate::sim::{InputEvent, Key, KeySet, Rect};
use crate::ui::{BUTTON_SIZE, ButtonId};

/// A recorded audio request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCall {
    Play(SoundEffect),
    Stop(SoundEffect),
}

#[derive(Debug, Default)]
pub struct HeadlessPresentation {
    /// Events keyed by the poll (1-based) on which they arrive
    script: BTreeMap<u64, Vec<InputEvent>>,
    held: KeySet,
    polls: u64,
    frame_counts: HashMap<Scene, usize>,
    texts: Vec<String>,
    buttons: Vec<(String, Rect)>,

    pub frames_presented: u64,
    pub last_scene: Option<Scene>,
    pub last_background: usize,
    /// Text drawn in the most recently presented frame
    pub last_texts: Vec<String>,
    /// Buttons drawn in the most recently presented frame
    pub last_buttons: Vec<(String, Rect)>,
    /// Left/right health shown in the most recent battle frame
    pub last_health: Option<(i32, i32)>,
    pub last_progress: Option<f32>,
    pub sound_log: Vec<SoundCall>,
    pub music_playing: bool,
    pub shut_down: bool,
    /// Make `present` fail, to exercise the error path
    pub fail_present: bool,
}

impl HeadlessPresentation {
    pub fn new() -> Self {
        let frame_counts = Scene::ALL
            .into_iter()
            .map(|scene| {
                let frames = match scene {
                    Scene::Menu => 1,
                    _ => 8,
                };
                (scene, frames)
            })
            .collect();
        Self {
            frame_counts,
            ..Default::default()
        }
    }

    /// Override a scene's background length (0 simulates a missing asset)
    pub fn with_frames(mut self, scene: Scene, frames: usize) -> Self {
        self.frame_counts.insert(scene, frames);
        self
    }

    /// Queue `event` for delivery on poll number `poll`
    pub fn at(mut self, poll: u64, event: InputEvent) -> Self {
        self.script.entry(poll).or_default().push(event);
        self
    }

    /// Queue a click on a standard button
    pub fn click_at(self, poll: u64, button: ButtonId) -> Self {
        self.at(poll, InputEvent::MouseDown(button.center()))
    }

    pub fn hold(&mut self, key: Key) {
        self.held.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.release(key);
    }

    /// Number of polls so far (one per loop iteration)
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Scripted single-player round: skip the intro, pick single player, fire
    /// steadily from the left ship, then quit from the end screen.
    pub fn demo() -> Self {
        let intro_done = (100.0 / crate::consts::INTRO_PROGRESS_PER_TICK) as u64;
        let start = intro_done + 10;
        let mut port = Self::new()
            .at(start - 5, InputEvent::KeyDown(Key::Space))
            .click_at(start, ButtonId::SinglePlayer);

        let mut poll = start + 5;
        while poll < start + 1200 {
            port = port.at(poll, InputEvent::KeyDown(Key::LCtrl));
            poll += 20;
        }
        // The round is long over by now
        port.click_at(start + 1300, ButtonId::Quit)
            .at(start + 1400, InputEvent::Quit)
    }
}

impl Presentation for HeadlessPresentation {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        self.script.remove(&self.polls).unwrap_or_default()
    }

    fn held_keys(&self) -> KeySet {
        self.held.clone()
    }

    fn background_frames(&self, scene: Scene) -> usize {
        self.frame_counts.get(&scene).copied().unwrap_or(0)
    }

    fn render_frame(&mut self, frame: &Frame<'_>) {
        self.last_scene = Some(frame.scene);
        self.last_background = frame.background;
        if let Some(state) = frame.state {
            self.last_health = Some((state.left_health, state.right_health));
            log::trace!(
                "tick {}: left {:?} right {:?}, {} + {} bullets",
                state.time_ticks,
                state.left.rect.position(),
                state.right.rect.position(),
                state.left_bullets.len(),
                state.right_bullets.len()
            );
        }
    }

    fn render_text(&mut self, text: &str, _position: IVec2, _style: TextStyle) {
        self.texts.push(text.to_string());
    }

    fn draw_progress_bar(&mut self, fraction: f32, _color: Color) {
        self.last_progress = Some(fraction);
    }

    fn draw_button(&mut self, label: &str, center: IVec2) -> Rect {
        let rect = Rect::from_center(center, BUTTON_SIZE);
        self.buttons.push((label.to_string(), rect));
        rect
    }

    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {:?} at {:.2}", effect, volume);
        self.sound_log.push(SoundCall::Play(effect));
    }

    fn stop_sound(&mut self, effect: SoundEffect) {
        self.sound_log.push(SoundCall::Stop(effect));
    }

    fn play_music(&mut self, looped: bool, volume: f32) {
        log::debug!("music on (looped: {}, volume {:.2})", looped, volume);
        self.music_playing = true;
    }

    fn present(&mut self) -> Result<(), GameError> {
        if self.fail_present {
            return Err(GameError::Presentation("headless present failure".into()));
        }
        self.frames_presented += 1;
        self.last_texts = std::mem::take(&mut self.texts);
        self.last_buttons = std::mem::take(&mut self.buttons);
        Ok(())
    }

    fn shutdown(&mut self) {
        self.music_playing = false;
        self.shut_down = true;
        log::info!(
            "Headless presentation shut down after {} frames",
            self.frames_presented
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui;

    #[test]
    fn test_script_delivers_on_poll() {
        let mut port = HeadlessPresentation::new()
            .at(2, InputEvent::KeyDown(Key::A))
            .at(2, InputEvent::Quit);
        assert!(port.poll_events().is_empty());
        assert_eq!(
            port.poll_events(),
            vec![InputEvent::KeyDown(Key::A), InputEvent::Quit]
        );
        assert!(port.poll_events().is_empty());
        assert_eq!(port.polls(), 3);
    }

    #[test]
    fn test_buttons_match_layout() {
        let mut port = HeadlessPresentation::new();
        let rect = port.draw_button("Quit", ButtonId::Quit.center());
        assert!(rect.contains_point(ButtonId::Quit.center()));
        assert_eq!(
            ui::hit_test(&[(ButtonId::Quit, rect)], ButtonId::Quit.center()),
            Some(ButtonId::Quit)
        );
    }
}
