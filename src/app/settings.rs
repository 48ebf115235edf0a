//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and the popup renderer consume the same source of truth.

use super::state::AppState;

const ITEM_COUNTS: &[usize] = &[1, 2, 3, 5, 7, 9, 12];
const EASE_SPEEDS: &[f64] = &[0.15, 0.3, 0.45, 0.6];

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean toggle: reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value as shown in the popup.
    pub fn value(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => (if get(state) { "ON" } else { "OFF" }).to_string(),
            Self::Cycle { value, .. } => value(state),
        }
    }

    /// Toggle or advance to the next value.  Does not persist; callers
    /// save the config afterwards.
    pub fn activate(&self, state: &mut AppState) {
        match self {
            Self::Toggle { get, set, .. } => {
                let current = get(state);
                set(state, !current);
            }
            Self::Cycle { cycle, .. } => cycle(state),
        }
    }
}

/// Index of the next entry after `current` in `values`, wrapping around.
fn next_in<T: PartialEq>(values: &[T], current: &T, fallback: usize) -> usize {
    let idx = values.iter().position(|v| v == current).unwrap_or(fallback);
    (idx + 1) % values.len()
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Cycle {
        label: "Item Count",
        value: |s| s.stack.item_count().to_string(),
        cycle: |s| {
            let next = ITEM_COUNTS[next_in(ITEM_COUNTS, &s.stack.item_count(), 3)];
            s.config.item_count = next;
            s.stack.set_item_count(next);
            s.drag_anchor = None;
            s.smooth.follow(s.stack.gesture().committed());
            s.status_message = Some(format!("Items: {next}"));
        },
    },
    SettingsItem::Cycle {
        label: "Ease Speed",
        value: |s| format!("{:.2}", s.smooth.speed()),
        cycle: |s| {
            let next = EASE_SPEEDS[next_in(EASE_SPEEDS, &s.config.ease_speed, 1)];
            s.config.ease_speed = next;
            s.smooth.set_speed(next);
            s.status_message = Some(format!("Ease speed: {next:.2}"));
        },
    },
    SettingsItem::Toggle {
        label: "Transform Readout",
        get: |s| s.config.show_readout,
        set: |s, v| {
            s.config.show_readout = v;
            // The readout line steals a row from the stack pane.
            let area = s.terminal_area;
            s.resize(area);
        },
    },
];
