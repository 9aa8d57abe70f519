//! Screen state machine and main loop
//!
//! `Intro -> Menu -> Playing -> RoundEnd -> Menu ...`, with `Terminated`
//! reachable from every screen through a quit request.

use std::collections::HashMap;

use crate::audio::AudioManager;
use crate::error::GameError;
use crate::platform::Pacer;
use crate::presentation::{BackgroundCycler, Frame, Presentation, Scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameMode, InputEvent, KeySet, MatchState, Side, TickInput, tick};
use crate::ui::{self, ButtonId, HitRegions, IntroState};

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Loading bar, shown once per process
    Intro,
    /// Mode selection
    Menu,
    /// A match is running
    Playing,
    /// Winner banner with play again / quit
    RoundEnd,
    /// Loop exits
    Terminated,
}

impl Phase {
    fn scene(self) -> Option<Scene> {
        match self {
            Phase::Intro => Some(Scene::Intro),
            Phase::Menu => Some(Scene::Menu),
            Phase::Playing => Some(Scene::Battle),
            Phase::RoundEnd => Some(Scene::End),
            Phase::Terminated => None,
        }
    }
}

/// Game instance holding all state
#[derive(Debug)]
pub struct App {
    phase: Phase,
    intro: IntroState,
    game: Option<MatchState>,
    winner: Option<Side>,
    /// Buttons drawn last frame, for click hit-testing
    hit_regions: HitRegions,
    background: BackgroundCycler,
    scene_frames: HashMap<Scene, usize>,
    audio: AudioManager,
    /// Simulation events waiting for the audio layer
    pending: Vec<GameEvent>,
}

impl App {
    /// Set up the state machine. Fails if any scene has no background frames.
    pub fn new(settings: &Settings, port: &impl Presentation) -> Result<Self, GameError> {
        let mut scene_frames = HashMap::new();
        for scene in Scene::ALL {
            let frames = port.background_frames(scene);
            if frames == 0 {
                return Err(GameError::AssetUnavailable(format!(
                    "{} background has no frames",
                    scene.as_str()
                )));
            }
            scene_frames.insert(scene, frames);
        }

        let phase = if settings.show_intro {
            Phase::Intro
        } else {
            Phase::Menu
        };
        let background = phase
            .scene()
            .and_then(|scene| scene_frames.get(&scene))
            .copied()
            .unwrap_or(1);

        Ok(Self {
            phase,
            intro: IntroState::default(),
            game: None,
            winner: None,
            hit_regions: Vec::new(),
            background: BackgroundCycler::new(background),
            scene_frames,
            audio: AudioManager::from_settings(settings),
            pending: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The running (or just finished) match
    pub fn game(&self) -> Option<&MatchState> {
        self.game.as_ref()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    fn enter(&mut self, phase: Phase) {
        log::info!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.hit_regions.clear();
        if let Some(scene) = phase.scene() {
            let frames = self.scene_frames.get(&scene).copied().unwrap_or(1);
            self.background.reset(frames);
        }
    }

    fn start_match(&mut self, mode: GameMode) {
        log::info!("Starting {:?} match", mode);
        self.game = Some(MatchState::new(mode));
        self.winner = None;
        self.enter(Phase::Playing);
    }

    /// First button clicked among this tick's events
    fn clicked(&self, events: &[InputEvent]) -> Option<ButtonId> {
        events.iter().find_map(|event| match event {
            InputEvent::MouseDown(pos) => ui::hit_test(&self.hit_regions, *pos),
            _ => None,
        })
    }

    /// Process one tick's worth of events and advance the current screen
    pub fn update(&mut self, events: &[InputEvent], held: &KeySet, elapsed_ms: u32) {
        if self.phase == Phase::Terminated {
            return;
        }
        // Quit wins over every other event in the same batch
        if events.contains(&InputEvent::Quit) {
            log::info!("Quit requested");
            self.enter(Phase::Terminated);
            return;
        }
        self.background.advance(elapsed_ms);

        match self.phase {
            Phase::Intro => {
                self.intro.advance(elapsed_ms);
                let key_pressed = events.iter().any(|e| matches!(e, InputEvent::KeyDown(_)));
                if self.intro.is_complete() && key_pressed {
                    self.enter(Phase::Menu);
                }
            }
            Phase::Menu => match self.clicked(events) {
                Some(ButtonId::SinglePlayer) => self.start_match(GameMode::Single),
                Some(ButtonId::DualPlayer) => self.start_match(GameMode::Dual),
                _ => {}
            },
            Phase::Playing => self.update_match(events, held, elapsed_ms),
            Phase::RoundEnd => match self.clicked(events) {
                Some(ButtonId::PlayAgain) => {
                    self.game = None;
                    self.winner = None;
                    self.enter(Phase::Menu);
                }
                Some(ButtonId::Quit) => self.enter(Phase::Terminated),
                _ => {}
            },
            Phase::Terminated => {}
        }
    }

    fn update_match(&mut self, events: &[InputEvent], held: &KeySet, elapsed_ms: u32) {
        let winner = {
            let Some(state) = self.game.as_mut() else {
                return;
            };
            let input = TickInput::from_input(events, held, state.mode, elapsed_ms);
            tick(state, &input);
            self.pending.extend(state.drain_events());
            state.winner
        };

        if let Some(side) = winner {
            self.winner = Some(side);
            self.enter(Phase::RoundEnd);
        }
    }

    /// Draw the current screen and present it
    pub fn render(&mut self, port: &mut impl Presentation) -> Result<(), GameError> {
        let Some(scene) = self.phase.scene() else {
            return Ok(());
        };
        let state = match self.phase {
            Phase::Playing => self.game.as_ref(),
            _ => None,
        };
        port.render_frame(&Frame {
            scene,
            background: self.background.current(),
            state,
        });

        match self.phase {
            Phase::Intro => ui::draw_intro(port, &self.intro),
            Phase::Menu => self.hit_regions = ui::draw_menu(port),
            Phase::Playing => {
                if let Some(state) = &self.game {
                    ui::draw_hud(port, state);
                }
            }
            Phase::RoundEnd => {
                if let Some(winner) = self.winner {
                    self.hit_regions = ui::draw_round_end(port, winner);
                }
            }
            Phase::Terminated => {}
        }
        port.present()
    }

    /// Run until the player quits. The presentation is always shut down,
    /// including when a frame fails.
    pub fn run(&mut self, port: &mut impl Presentation, pacer: &mut impl Pacer) -> Result<(), GameError> {
        log::info!("Entering main loop in {:?}", self.phase);
        self.audio.start_music(port);
        let result = self.run_loop(port, pacer);
        if let Err(e) = &result {
            log::error!("Main loop aborted: {}", e);
        }
        port.shutdown();
        result
    }

    fn run_loop(&mut self, port: &mut impl Presentation, pacer: &mut impl Pacer) -> Result<(), GameError> {
        while self.phase != Phase::Terminated {
            let elapsed_ms = pacer.wait();
            let events = port.poll_events();
            let held = port.held_keys();

            self.update(&events, &held, elapsed_ms);
            self.audio.dispatch(self.pending.drain(..), port);
            self.render(port)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::platform::FixedStep;
    use crate::presentation::{HeadlessPresentation, SoundCall};
    use crate::sim::{Bullet, Key, Rect};
    use glam::IVec2;

    const FRAME_MS: u32 = 16;

    fn no_intro() -> Settings {
        Settings {
            show_intro: false,
            ..Default::default()
        }
    }

    /// App sitting on the menu with its buttons drawn
    fn at_menu(port: &mut HeadlessPresentation) -> App {
        let mut app = App::new(&no_intro(), &*port).unwrap();
        app.render(port).unwrap();
        app
    }

    fn click(app: &mut App, button: ButtonId) {
        app.update(&[InputEvent::MouseDown(button.center())], &KeySet::new(), FRAME_MS);
    }

    #[test]
    fn test_quit_during_intro() {
        let mut port = HeadlessPresentation::new().at(3, InputEvent::Quit);
        let mut app = App::new(&Settings::default(), &port).unwrap();
        assert_eq!(app.phase(), Phase::Intro);

        app.run(&mut port, &mut FixedStep::new(60)).unwrap();
        assert_eq!(app.phase(), Phase::Terminated);
        assert_eq!(port.polls(), 3);
        assert!(port.shut_down);
    }

    #[test]
    fn test_intro_waits_for_load_then_key() {
        let mut port = HeadlessPresentation::new();
        let mut app = App::new(&Settings::default(), &port).unwrap();
        let key = [InputEvent::KeyDown(Key::Space)];

        // Key presses before the bar is full are ignored
        app.update(&key, &KeySet::new(), FRAME_MS);
        assert_eq!(app.phase(), Phase::Intro);
        for _ in 0..198 {
            app.update(&[], &KeySet::new(), FRAME_MS);
        }
        app.render(&mut port).unwrap();
        assert!(port.last_texts.contains(&ui::TITLE.to_string()));
        assert!(port.last_progress.is_some_and(|p| p < 1.0));

        app.update(&[], &KeySet::new(), FRAME_MS);
        assert_eq!(app.phase(), Phase::Intro);
        app.update(&key, &KeySet::new(), FRAME_MS);
        assert_eq!(app.phase(), Phase::Menu);
    }

    #[test]
    fn test_menu_starts_fresh_match() {
        let mut port = HeadlessPresentation::new();
        let mut app = at_menu(&mut port);
        assert_eq!(port.last_buttons.len(), 2);

        // A click outside both buttons does nothing
        app.update(&[InputEvent::MouseDown(IVec2::new(10, 10))], &KeySet::new(), FRAME_MS);
        assert_eq!(app.phase(), Phase::Menu);

        click(&mut app, ButtonId::DualPlayer);
        assert_eq!(app.phase(), Phase::Playing);
        let game = app.game().unwrap();
        assert_eq!(game.mode, GameMode::Dual);
        assert_eq!(game.left.rect.position(), IVec2::new(100, 300));
        assert_eq!(game.right.rect.position(), IVec2::new(700, 300));
    }

    #[test]
    fn test_final_hit_shows_winner() {
        let mut port = HeadlessPresentation::new();
        let mut app = at_menu(&mut port);
        click(&mut app, ButtonId::SinglePlayer);

        let game = app.game.as_mut().unwrap();
        game.right_health = 1;
        game.left_bullets.push(Bullet {
            side: Side::Left,
            rect: Rect::new(690, 350, 10, 5),
        });
        app.update(&[], &KeySet::new(), FRAME_MS);
        assert_eq!(app.phase(), Phase::RoundEnd);
        assert_eq!(app.winner(), Some(Side::Left));
        assert_eq!(
            app.pending,
            vec![
                GameEvent::ShipHit(Side::Right),
                GameEvent::RoundOver { winner: Side::Left }
            ]
        );

        app.render(&mut port).unwrap();
        assert_eq!(port.last_scene, Some(Scene::End));
        assert!(port.last_texts.contains(&"Left Wins!".to_string()));
    }

    #[test]
    fn test_play_again_resets_everything() {
        let mut port = HeadlessPresentation::new();
        let mut app = at_menu(&mut port);
        click(&mut app, ButtonId::DualPlayer);

        let game = app.game.as_mut().unwrap();
        game.left.rect.y = 20;
        game.left_health = 0;
        game.right_health = 3;
        game.right_bullets.push(Bullet::from_ship(&game.right));
        app.update(&[], &KeySet::new(), FRAME_MS);
        assert_eq!(app.phase(), Phase::RoundEnd);
        assert_eq!(app.winner(), Some(Side::Right));

        app.render(&mut port).unwrap();
        click(&mut app, ButtonId::PlayAgain);
        assert_eq!(app.phase(), Phase::Menu);
        assert!(app.game().is_none());

        app.render(&mut port).unwrap();
        click(&mut app, ButtonId::SinglePlayer);
        let game = app.game().unwrap();
        assert_eq!((game.left_health, game.right_health), (10, 10));
        assert!(game.left_bullets.is_empty() && game.right_bullets.is_empty());
        assert_eq!(game.left.rect.position(), IVec2::new(100, 300));
        assert_eq!(game.right.rect.position(), IVec2::new(700, 300));
        assert_eq!(app.winner(), None);
    }

    #[test]
    fn test_quit_from_end_screen() {
        let mut port = HeadlessPresentation::new();
        let mut app = at_menu(&mut port);
        click(&mut app, ButtonId::DualPlayer);
        app.game.as_mut().unwrap().right_health = 0;
        app.update(&[], &KeySet::new(), FRAME_MS);
        app.render(&mut port).unwrap();

        click(&mut app, ButtonId::Quit);
        assert_eq!(app.phase(), Phase::Terminated);
    }

    #[test]
    fn test_held_keys_move_ship() {
        let mut port = HeadlessPresentation::new();
        let mut app = at_menu(&mut port);
        click(&mut app, ButtonId::DualPlayer);

        let keys: KeySet = [Key::W, Key::Down].into_iter().collect();
        app.update(&[], &keys, FRAME_MS);
        let game = app.game().unwrap();
        assert_eq!(game.left.rect.y, 295);
        assert_eq!(game.right.rect.y, 305);
    }

    #[test]
    fn test_loop_reads_held_keys_and_shows_health() {
        let mut port = HeadlessPresentation::new()
            .click_at(2, ButtonId::DualPlayer)
            .at(13, InputEvent::Quit);
        port.hold(Key::W);
        let mut app = App::new(&no_intro(), &port).unwrap();
        app.run(&mut port, &mut FixedStep::new(60)).unwrap();

        // Ten match ticks (polls 3..=12) of holding W
        let game = app.game().unwrap();
        assert_eq!(game.left.rect.y, 250);
        assert_eq!(port.last_scene, Some(Scene::Battle));
        assert_eq!(port.last_health, Some((10, 10)));
        assert!(port.last_texts.contains(&"Health: 10".to_string()));
        // 160 ms on the battle screen moves the background on one frame
        assert_eq!(port.last_background, 1);
    }

    #[test]
    fn test_hud_tracks_hits_after_release() {
        let mut port = HeadlessPresentation::new();
        let mut app = at_menu(&mut port);
        click(&mut app, ButtonId::DualPlayer);

        port.hold(Key::W);
        app.update(&[], &port.held_keys(), FRAME_MS);
        port.release(Key::W);
        let game = app.game.as_mut().unwrap();
        assert_eq!(game.left.rect.y, 295);
        game.left_bullets.push(Bullet {
            side: Side::Left,
            rect: Rect::new(690, 350, 10, 5),
        });

        app.update(&[], &port.held_keys(), FRAME_MS);
        app.render(&mut port).unwrap();
        assert_eq!(app.game().unwrap().left.rect.y, 295);
        assert_eq!(port.last_health, Some((10, 9)));
        assert!(port.last_texts.contains(&"Health: 9".to_string()));
    }

    #[test]
    fn test_missing_background_is_fatal() {
        let port = HeadlessPresentation::new().with_frames(Scene::End, 0);
        let result = App::new(&Settings::default(), &port);
        assert!(matches!(result, Err(GameError::AssetUnavailable(_))));
    }

    #[test]
    fn test_present_failure_still_shuts_down() {
        let mut port = HeadlessPresentation::new();
        port.fail_present = true;
        let mut app = App::new(&Settings::default(), &port).unwrap();
        let result = app.run(&mut port, &mut FixedStep::new(60));
        assert!(matches!(result, Err(GameError::Presentation(_))));
        assert!(port.shut_down);
    }

    #[test]
    fn test_demo_round_plays_to_the_end() {
        let mut port = HeadlessPresentation::demo();
        let mut app = App::new(&Settings::default(), &port).unwrap();
        app.run(&mut port, &mut FixedStep::new(60)).unwrap();

        assert_eq!(app.phase(), Phase::Terminated);
        assert_eq!(app.winner(), Some(Side::Left));
        assert!(!port.music_playing && port.shut_down);
        assert!(port.sound_log.contains(&SoundCall::Play(SoundEffect::Fire)));
        assert!(port.sound_log.contains(&SoundCall::Play(SoundEffect::Hit)));
        assert_eq!(
            port.sound_log
                .iter()
                .filter(|c| **c == SoundCall::Play(SoundEffect::GameOver))
                .count(),
            1
        );
    }
}
