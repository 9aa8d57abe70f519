//! Audio routing
//!
//! Turns simulation events into sound requests on the presentation layer.
//! Decoding and mixing belong to the presentation implementation.

use crate::presentation::Presentation;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bullet launched
    Fire,
    /// Bullet struck a ship
    Hit,
    /// Round decided
    GameOver,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioManager {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective effect volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Start the looping soundtrack
    pub fn start_music(&self, port: &mut impl Presentation) {
        let vol = self.effective_music_volume();
        if vol <= 0.0 {
            return;
        }
        port.play_music(true, vol);
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect, port: &mut impl Presentation) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        port.play_sound(effect, vol);
    }

    /// Play the cue for each event in order
    pub fn dispatch<I>(&self, events: I, port: &mut impl Presentation)
    where
        I: IntoIterator<Item = GameEvent>,
    {
        for event in events {
            match event {
                GameEvent::BulletFired(_) => {
                    // Rapid fire restarts the clip instead of layering it
                    port.stop_sound(SoundEffect::Fire);
                    self.play(SoundEffect::Fire, port);
                }
                GameEvent::ShipHit(_) => self.play(SoundEffect::Hit, port),
                GameEvent::RoundOver { .. } => self.play(SoundEffect::GameOver, port),
            }
        }
    }
}
