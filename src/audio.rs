//! Audio triggers
//!
//! The core only decides *when* a sound plays. Playback belongs to the host;
//! on native the manager logs each trigger and keeps a history.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Player crashed (one per game over)
    GameOver,
}

impl SoundEffect {
    /// Asset the host loads for this effect
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::GameOver => "game_over_music.wav",
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: Vec<SoundEffect>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioManager {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: settings.muted,
            played: Vec::new(),
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Fire-and-forget playback. Returns false when the effect was silenced.
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            log::debug!("Muted: {:?}", effect);
            return false;
        }
        log::info!("Playing {} at volume {:.2}", effect.asset_name(), volume);
        self.played.push(effect);
        true
    }

    /// Play every sound trigger found in a batch of game events
    pub fn handle_events(&mut self, events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter_map(|event| match event {
                GameEvent::PlaySound(effect) => Some(*effect),
                _ => None,
            })
            .filter(|&effect| self.play(effect))
            .count()
    }

    /// Effects played so far (oldest first)
    pub fn history(&self) -> &[SoundEffect] {
        &self.played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_events_plays_sound_triggers_only() {
        let mut audio = AudioManager::default();
        let events = vec![
            GameEvent::ScoreChanged { score: 1 },
            GameEvent::PlaySound(SoundEffect::GameOver),
            GameEvent::LifeLost { remaining: 2 },
        ];
        assert_eq!(audio.handle_events(&events), 1);
        assert_eq!(audio.history(), &[SoundEffect::GameOver]);
    }

    #[test]
    fn test_muted_manager_plays_nothing() {
        let mut audio = AudioManager::default();
        audio.set_muted(true);
        assert!(!audio.play(SoundEffect::GameOver));
        assert!(audio.history().is_empty());
    }

    #[test]
    fn test_zero_master_volume_silences() {
        let mut audio = AudioManager::default();
        audio.set_master_volume(-1.0);
        assert!(!audio.play(SoundEffect::GameOver));
    }
}
