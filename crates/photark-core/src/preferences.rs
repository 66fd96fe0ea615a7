//! User preferences.
//!
//! Preferences are persisted as a sparse JSON patch in user metadata and
//! merged with defaults at read time. Two pure operations live here:
//!
//! - [`Preferences::from_patch`] — derive the effective preferences from a
//!   stored patch.
//! - [`preferences_patch`] — compute the minimal patch to persist for a set
//!   of effective preferences.
//!
//! The stored metadata value is replaced wholesale on every upsert, so the
//! persisted patch is always a diff against defaults.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Avatar colors a user can pick (or be assigned by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAvatarColor {
    Primary,
    Pink,
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
    Gray,
    Amber,
}

/// Memories-related preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoriesPreferences {
    /// Whether "on this day" memories are generated for the user.
    pub enabled: bool,
}

impl Default for MemoriesPreferences {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Avatar-related preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvatarPreferences {
    /// Selected avatar color. `None` falls back to the client default.
    pub color: Option<UserAvatarColor>,
}

/// Effective user preferences: defaults overlaid with the stored patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub memories: MemoriesPreferences,
    pub avatar: AvatarPreferences,
}

/// Sparse mirror of [`Preferences`] used to decode stored patches.
///
/// Unknown keys are ignored so patches written by newer versions of the
/// backend still decode.
#[derive(Debug, Default, Deserialize)]
struct PreferencesPatch {
    #[serde(default)]
    memories: MemoriesPatch,
    #[serde(default)]
    avatar: AvatarPatch,
}

#[derive(Debug, Default, Deserialize)]
struct MemoriesPatch {
    enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct AvatarPatch {
    color: Option<UserAvatarColor>,
}

impl Preferences {
    /// Derive effective preferences from a stored sparse patch.
    ///
    /// A missing, null, or malformed patch yields the defaults.
    #[must_use]
    pub fn from_patch(patch: &Value) -> Self {
        let patch: PreferencesPatch =
            serde_json::from_value(patch.clone()).unwrap_or_default();

        let mut prefs = Self::default();
        if let Some(enabled) = patch.memories.enabled {
            prefs.memories.enabled = enabled;
        }
        if let Some(color) = patch.avatar.color {
            prefs.avatar.color = Some(color);
        }
        prefs
    }
}

/// Compute the minimal patch to persist for the given effective preferences.
///
/// Fields equal to their default value are omitted, so a user who never
/// changed anything stores an empty object.
#[must_use]
pub fn preferences_patch(prefs: &Preferences) -> Value {
    let defaults = Preferences::default();
    let mut patch = serde_json::Map::new();

    if prefs.memories.enabled != defaults.memories.enabled {
        patch.insert(
            "memories".to_string(),
            json!({ "enabled": prefs.memories.enabled }),
        );
    }
    if prefs.avatar.color != defaults.avatar.color {
        patch.insert("avatar".to_string(), json!({ "color": prefs.avatar.color }));
    }

    Value::Object(patch)
}
