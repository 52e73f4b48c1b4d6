//! Player preferences that outlive a run.
//!
//! Preferences are plain flags persisted through a [`SettingsStore`]. The
//! engine never reads them itself; they are kept here so every front end
//! stores them the same way.

mod store;

pub use store::{JsonSettingsStore, MemorySettingsStore, SettingsStore};

use serde::{Deserialize, Serialize};

const MUTE_MUSIC: &str = "muteMusic";
const MUTE_SOUNDS: &str = "muteSounds";
const ENABLE_CAMERA_FOLLOW: &str = "enableCameraFollow";

/// Audio and camera preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub mute_music: bool,
    pub mute_sounds: bool,
    pub enable_camera_follow: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mute_music: false,
            mute_sounds: false,
            enable_camera_follow: true,
        }
    }
}

impl Settings {
    /// Read settings from `store`.
    ///
    /// A store that has never been saved to yields the defaults. Once saved,
    /// a missing flag reads as `false`.
    pub fn load(store: &impl SettingsStore) -> Self {
        if !store.has_key(MUTE_MUSIC) {
            tracing::debug!("No saved settings, using defaults");
            return Self::default();
        }
        Self {
            mute_music: store.get_bool(MUTE_MUSIC).unwrap_or(false),
            mute_sounds: store.get_bool(MUTE_SOUNDS).unwrap_or(false),
            enable_camera_follow: store.get_bool(ENABLE_CAMERA_FOLLOW).unwrap_or(false),
        }
    }

    /// Write every flag to `store`.
    pub fn save(&self, store: &mut impl SettingsStore) {
        store.set_bool(MUTE_MUSIC, self.mute_music);
        store.set_bool(MUTE_SOUNDS, self.mute_sounds);
        store.set_bool(ENABLE_CAMERA_FOLLOW, self.enable_camera_follow);
        tracing::debug!(settings = ?self, "Saved settings");
    }
}
