//! Explicit configuration and resume state.
//!
//! Preferences and the last-seen UI state are passed down from startup
//! instead of read from ambient storage; the key-value store behind them is
//! an injected interface so the core never touches a concrete storage
//! mechanism.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Language;

const KEY_LANGUAGE: &str = "language";
const KEY_ENRICHMENT: &str = "feedback_enrichment";
const KEY_MODEL: &str = "explanation_model";
const KEY_THEME: &str = "theme";
const KEY_SCREEN: &str = "screen";
const KEY_REGISTERED: &str = "registered";

/// Minimal persisted key-value storage seam.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Player-tunable settings consumed by the session constructor and the
/// feedback composer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub language: Language,
    pub enrichment_enabled: bool,
    pub explanation_model: String,
    pub explanation_timeout: Duration,
    pub theme: Theme,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            enrichment_enabled: true,
            explanation_model: "default".to_string(),
            explanation_timeout: Duration::from_secs(8),
            theme: Theme::Light,
        }
    }
}

impl GameSettings {
    /// Load settings from the store, filling gaps with defaults. Unparseable
    /// values fall back to the default rather than failing startup.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let defaults = Self::default();
        Self {
            language: store
                .get(KEY_LANGUAGE)
                .and_then(|s| Language::try_from(s).ok())
                .unwrap_or(defaults.language),
            enrichment_enabled: store
                .get(KEY_ENRICHMENT)
                .map(|s| s == "true")
                .unwrap_or(defaults.enrichment_enabled),
            explanation_model: store.get(KEY_MODEL).unwrap_or(defaults.explanation_model),
            explanation_timeout: defaults.explanation_timeout,
            theme: store
                .get(KEY_THEME)
                .and_then(|s| serde_json::from_value(serde_json::Value::String(s)).ok())
                .unwrap_or(defaults.theme),
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(KEY_LANGUAGE, self.language.as_str());
        store.set(
            KEY_ENRICHMENT,
            if self.enrichment_enabled { "true" } else { "false" },
        );
        store.set(KEY_MODEL, &self.explanation_model);
        let theme = match self.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        store.set(KEY_THEME, theme);
    }
}

/// Which top-level screen the player was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Game,
    Progress,
}

/// State restored once at startup and passed down to the UI, replacing
/// scattered ambient reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeState {
    pub screen: Screen,
    pub language: Language,
    pub registered: bool,
}

impl ResumeState {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            screen: store
                .get(KEY_SCREEN)
                .and_then(|s| serde_json::from_value(serde_json::Value::String(s)).ok())
                .unwrap_or_default(),
            language: store
                .get(KEY_LANGUAGE)
                .and_then(|s| Language::try_from(s).ok())
                .unwrap_or_default(),
            registered: store
                .get(KEY_REGISTERED)
                .map(|s| s == "true")
                .unwrap_or(false),
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        let screen = match self.screen {
            Screen::Home => "home",
            Screen::Game => "game",
            Screen::Progress => "progress",
        };
        store.set(KEY_SCREEN, screen);
        store.set(KEY_LANGUAGE, self.language.as_str());
        store.set(KEY_REGISTERED, if self.registered { "true" } else { "false" });
    }
}
