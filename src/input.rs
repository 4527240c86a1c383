//! Input boundary
//!
//! Key-event plumbing lives outside this crate; what the simulation consumes
//! is the set of abstract actions currently held. This module supplies that
//! set plus the raw-key normalization drivers use to fill it: key names are
//! folded to lowercase and the `"Space"`/`"Spacebar"` aliases some platforms
//! report collapse into the literal space character before lookup.

/// One abstract action the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    /// Toward the scroll front (smaller y)
    MoveUp,
    /// Away from the scroll front (larger y)
    MoveDown,
    /// Climb (z+)
    Ascend,
    /// Dive (z-)
    Descend,
    Fire,
    Restart,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Ascend,
        Action::Descend,
        Action::Fire,
        Action::Restart,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Normalize a raw key name: lowercase, with the spacebar aliases folded into
/// the literal space character.
pub fn normalize_key(raw: &str) -> String {
    let key = raw.to_lowercase();
    if key == "spacebar" || key == "space" {
        " ".to_string()
    } else {
        key
    }
}

/// Map a raw key name to the action bound to it, if any
pub fn action_for_key(raw: &str) -> Option<Action> {
    match normalize_key(raw).as_str() {
        "arrowleft" | "a" => Some(Action::MoveLeft),
        "arrowright" | "d" => Some(Action::MoveRight),
        "arrowup" | "w" => Some(Action::MoveUp),
        "arrowdown" | "s" => Some(Action::MoveDown),
        "e" => Some(Action::Ascend),
        "q" => Some(Action::Descend),
        " " => Some(Action::Fire),
        "r" => Some(Action::Restart),
        _ => None,
    }
}

/// The set of actions currently held, sampled once per step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    bits: u8,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.bits |= action.bit();
    }

    pub fn release(&mut self, action: Action) {
        self.bits &= !action.bit();
    }

    #[inline]
    pub fn contains(&self, action: Action) -> bool {
        self.bits & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Press whatever action `raw` is bound to; returns false for unbound keys
    pub fn press_key(&mut self, raw: &str) -> bool {
        match action_for_key(raw) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Release whatever action `raw` is bound to
    pub fn release_key(&mut self, raw: &str) -> bool {
        match action_for_key(raw) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Signed axis value from an opposing action pair: +1, -1, or 0
    #[inline]
    pub fn axis(&self, positive: Action, negative: Action) -> f32 {
        (self.contains(positive) as i32 - self.contains(negative) as i32) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacebar_aliases_collapse_to_fire() {
        for raw in [" ", "Space", "Spacebar", "SPACE", "spacebar"] {
            assert_eq!(action_for_key(raw), Some(Action::Fire), "key {raw:?}");
        }
    }

    #[test]
    fn key_lookup_is_case_insensitive() {
        assert_eq!(action_for_key("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(action_for_key("ARROWDOWN"), Some(Action::MoveDown));
        assert_eq!(action_for_key("R"), Some(Action::Restart));
        assert_eq!(action_for_key("W"), Some(Action::MoveUp));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(action_for_key("Escape"), None);
        assert_eq!(action_for_key("x"), None);
        assert_eq!(action_for_key(""), None);
    }

    #[test]
    fn press_and_release_round_trip() {
        let mut actions = ActionSet::new();
        assert!(actions.is_empty());

        assert!(actions.press_key("d"));
        assert!(actions.press_key("Space"));
        assert!(!actions.press_key("F1"));
        assert!(actions.contains(Action::MoveRight));
        assert!(actions.contains(Action::Fire));

        assert!(actions.release_key("ArrowRight"));
        assert!(!actions.contains(Action::MoveRight));
        assert!(actions.contains(Action::Fire));
    }

    #[test]
    fn opposing_actions_cancel_on_an_axis() {
        let mut actions = ActionSet::new();
        actions.press(Action::MoveRight);
        assert_eq!(actions.axis(Action::MoveRight, Action::MoveLeft), 1.0);

        actions.press(Action::MoveLeft);
        assert_eq!(actions.axis(Action::MoveRight, Action::MoveLeft), 0.0);

        actions.release(Action::MoveRight);
        assert_eq!(actions.axis(Action::MoveRight, Action::MoveLeft), -1.0);
    }
}
