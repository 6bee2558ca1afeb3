//! Key bindings for the dropdown's keyboard surface.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::KeymapError;
use crate::event::{Key, Modifiers};

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

impl FromStr for KeyCombo {
    type Err = KeymapError;

    /// Parse strings like `"enter"`, `"space"`, `"ctrl+n"`, `"shift+tab"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim().to_lowercase();
        let mut parts: Vec<&str> = spec.split('+').collect();
        let key_part = parts.pop().unwrap_or_default();
        if key_part.is_empty() {
            return Err(KeymapError::EmptyKey);
        }

        let mut modifiers = Modifiers::NONE;
        for modifier in parts {
            match modifier {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                other => {
                    return Err(KeymapError::UnknownModifier {
                        modifier: other.to_string(),
                        spec: s.to_string(),
                    });
                }
            }
        }

        Ok(Self::new(parse_key(key_part)?, modifiers))
    }
}

fn parse_key(s: &str) -> Result<Key, KeymapError> {
    let key = match s {
        "enter" | "return" => Key::Enter,
        "escape" | "esc" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "backtab" => Key::BackTab,
        "space" => Key::Char(' '),
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "pgup" => Key::PageUp,
        "pagedown" | "pgdn" => Key::PageDown,
        "insert" | "ins" => Key::Insert,
        "delete" | "del" => Key::Delete,
        _ => {
            if let Some(n) = s.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
                && (1..=12).contains(&n)
            {
                return Ok(Key::F(n));
            }
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return Err(KeymapError::UnknownKey(s.to_string())),
            }
        }
    };
    Ok(key)
}

/// What a bound key does to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Open, or commit the highlighted option and close
    Activate,
    /// Highlight the previous option (opens if closed)
    Previous,
    /// Highlight the next option (opens if closed)
    Next,
    /// Close without committing
    Close,
}

impl FromStr for KeyAction {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activate" | "toggle" => Ok(KeyAction::Activate),
            "previous" | "prev" | "up" => Ok(KeyAction::Previous),
            "next" | "down" => Ok(KeyAction::Next),
            "close" | "escape" => Ok(KeyAction::Close),
            _ => Err(KeymapError::UnknownAction(s.to_string())),
        }
    }
}

/// Key bindings for one dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    binds: HashMap<KeyCombo, KeyAction>,
}

impl Default for Keymap {
    /// Enter/Space activate, Up/Down navigate, Escape closes.
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyCombo::key(Key::Enter), KeyAction::Activate);
        keymap.bind(KeyCombo::key(Key::Char(' ')), KeyAction::Activate);
        keymap.bind(KeyCombo::key(Key::Up), KeyAction::Previous);
        keymap.bind(KeyCombo::key(Key::Down), KeyAction::Next);
        keymap.bind(KeyCombo::key(Key::Escape), KeyAction::Close);
        keymap
    }
}

impl Keymap {
    /// Create a keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            binds: HashMap::new(),
        }
    }

    /// Build a keymap from `(key, action)` strings, e.g. `("ctrl+n", "next")`.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, KeymapError> {
        let mut keymap = Self::empty();
        for (key, action) in pairs {
            keymap.bind(key.parse()?, action.parse()?);
        }
        Ok(keymap)
    }

    /// Bind a key, replacing any previous binding for it.
    pub fn bind(&mut self, key: KeyCombo, action: KeyAction) {
        self.binds.insert(key, action);
    }

    /// Parse and bind a key string.
    pub fn bind_str(&mut self, key: &str, action: KeyAction) -> Result<(), KeymapError> {
        self.bind(key.parse()?, action);
        Ok(())
    }

    /// Remove a binding. Returns the action it had.
    pub fn unbind(&mut self, key: &KeyCombo) -> Option<KeyAction> {
        self.binds.remove(key)
    }

    /// Look up the action for a key.
    pub fn action(&self, key: Key, modifiers: Modifiers) -> Option<KeyAction> {
        self.binds.get(&KeyCombo::new(key, modifiers)).copied()
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}
