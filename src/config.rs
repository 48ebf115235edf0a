//! User configuration: keybindings, preview preferences and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/rotation-stack/config.toml`
//! (default `~/.config/rotation-stack/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

pub const DEFAULT_ITEM_COUNT: usize = 5;
pub const DEFAULT_EASE_SPEED: f64 = 0.3;
pub const DEFAULT_FRAME_MS: u64 = 33;

// ───────────────────────────────────────── errors ────────────

/// A config line that could not be applied.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("line {line}: expected `key = value`")]
    Malformed { line: usize },
    #[error("line {line}: unknown key `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: invalid value `{value}` for `{key}`")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the stack view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Prev,
    Next,
    First,
    Last,
    ToggleReadout,
    OpenSettings,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for serialisation).
    pub const ALL: &[Action] = &[
        Action::Prev,
        Action::Next,
        Action::First,
        Action::Last,
        Action::ToggleReadout,
        Action::OpenSettings,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::Prev => "prev",
            Action::Next => "next",
            Action::First => "first",
            Action::Last => "last",
            Action::ToggleReadout => "toggle_readout",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    const MASK: KeyModifiers = KeyModifiers::CONTROL
        .union(KeyModifiers::ALT)
        .union(KeyModifiers::SHIFT);

    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && (self.modifiers & Self::MASK) == (event.modifiers & Self::MASK)
    }

    /// Short label for the status bar (e.g. `"←"`, `"Ctrl+q"`).
    pub fn display(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&match self.code {
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            _ => self.code_name(),
        });
        s
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s
    }

    fn code_name(&self) -> String {
        match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }

    /// Config-file form (e.g. `"Ctrl+Left"`, `"q"`).
    fn to_config_string(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&self.code_name());
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Left"`, `"q"`, `"F2"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration: keybindings and preview preferences.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Number of panels in the preview stack (≥ 1).
    pub item_count: usize,
    /// Fraction of the remaining gap closed per frame when easing.
    pub ease_speed: f64,
    /// Show the live/committed readout line.
    pub show_readout: bool,
    /// Frame interval driving animation ticks.
    pub frame_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            item_count: DEFAULT_ITEM_COUNT,
            ease_speed: DEFAULT_EASE_SPEED,
            show_readout: false,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(Prev, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(Next, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(First, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(Last, vec![KeyBind::new(End, n), KeyBind::new(Char('e'), n)]);
        m.insert(ToggleReadout, vec![KeyBind::new(Char('r'), n)]);
        m.insert(OpenSettings, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action bound to a key event.  The binding with the most
    /// modifiers wins if several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "drag / {}{}: rotate | {}: readout | {}: settings | {}: quit",
            self.short_binding(Action::Prev),
            self.short_binding(Action::Next),
            self.short_binding(Action::ToggleReadout),
            self.short_binding(Action::OpenSettings),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let (config, errors) = Self::parse(&contents);
                for err in errors {
                    tracing::warn!("{}: {err}", path.display());
                }
                config
            }
            Err(_) => Self::default(),
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Parse config text.  Bad lines are skipped and reported.
    pub fn parse(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        for (idx, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            if let Err(err) = config.apply_line(idx + 1, line) {
                errors.push(err);
            }
        }

        (config, errors)
    }

    fn apply_line(&mut self, line: usize, text: &str) -> Result<(), ConfigError> {
        let (key, value) = text
            .split_once('=')
            .ok_or(ConfigError::Malformed { line })?;
        let key = key.trim();
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            line,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "item_count" => {
                let n: usize = value.parse().map_err(|_| invalid())?;
                if n == 0 {
                    return Err(invalid());
                }
                self.item_count = n;
            }
            "ease_speed" => {
                let v: f64 = value.parse().map_err(|_| invalid())?;
                if !v.is_finite() {
                    return Err(invalid());
                }
                self.ease_speed = v.clamp(0.05, 0.95);
            }
            "show_readout" => {
                self.show_readout = value.parse().map_err(|_| invalid())?;
            }
            "frame_ms" => {
                let v: u64 = value.parse().map_err(|_| invalid())?;
                // Keep this bounded for a usable animation.
                self.frame_ms = v.clamp(8, 200);
            }
            _ => {
                let action = Action::from_config_key(key).ok_or_else(|| ConfigError::UnknownKey {
                    line,
                    key: key.to_string(),
                })?;
                let binds: Vec<KeyBind> = value
                    .split(',')
                    .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                    .collect();
                if binds.is_empty() {
                    return Err(invalid());
                }
                self.bindings.insert(action, binds);
            }
        }
        Ok(())
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# rotation-stack configuration".to_string(),
            String::new(),
            "# Preview".to_string(),
            format!("item_count = {}", self.item_count),
            format!("ease_speed = {}", self.ease_speed),
            format!("show_readout = {}", self.show_readout),
            format!("frame_ms = {}", self.frame_ms),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/rotation-stack/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("rotation-stack").join("config.toml")
}
