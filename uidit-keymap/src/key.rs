use std::{fmt::Display, sync::OnceLock};

use regex::Regex;

/// A pressed key. Modifiers are kept sorted and unique, so keys compare and
/// hash equal regardless of the order their modifiers were reported in.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(code: KeyCode, mut modifiers: Vec<KeyModifier>) -> Self {
        modifiers.sort();
        modifiers.dedup();

        Self { code, modifiers }
    }

    /// Vim notation: `a`, `A`, `<C-w>`, `<esc>`. Shift on a char is written
    /// as the uppercase char.
    pub fn to_keycode_string(&self) -> String {
        let is_char = matches!(self.code, KeyCode::Char(_));
        let is_shifted_char = is_char && self.modifiers.contains(&KeyModifier::Shift);

        let code = if is_shifted_char {
            self.code.to_string().to_uppercase()
        } else {
            self.code.to_string()
        };

        let prefix: String = self
            .modifiers
            .iter()
            .filter(|modifier| !(is_shifted_char && **modifier == KeyModifier::Shift))
            .map(KeyModifier::prefix)
            .collect();

        if is_char && prefix.is_empty() {
            code
        } else {
            format!("<{}{}>", prefix, code)
        }
    }

    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        let mut parts: Vec<_> = get_keycode_regex()
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect();

        let code = match parts.pop()? {
            "--" => "-",
            code => code,
        };

        let mut modifiers: Vec<_> = parts
            .into_iter()
            .filter_map(KeyModifier::from_prefix)
            .collect();

        if code.chars().count() == 1 && code.chars().all(|c| c.is_ascii_uppercase()) {
            modifiers.push(KeyModifier::Shift);
        }

        KeyCode::from_keycode_string(code).map(|code| Self::new(code, modifiers))
    }

    /// Text a key produces when typed into a buffer. Keys with control or
    /// alt modifiers and non printable keys produce nothing.
    pub fn to_text(&self) -> Option<String> {
        let has_command_modifier = self.modifiers.iter().any(|modifier| {
            matches!(
                modifier,
                KeyModifier::Alt | KeyModifier::Command | KeyModifier::Ctrl
            )
        });

        if has_command_modifier {
            return None;
        }

        let text = match self.code {
            KeyCode::Backslash => String::from("\\"),
            KeyCode::Bar => String::from("|"),
            KeyCode::Char(c) if self.modifiers.contains(&KeyModifier::Shift) => {
                c.to_uppercase().to_string()
            }
            KeyCode::Char(c) => c.to_string(),
            KeyCode::LessThan => String::from("<"),
            KeyCode::Space => String::from(" "),
            KeyCode::Tab => String::from("\t"),
            _ => return None,
        };

        Some(text)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_keycode_string())
    }
}

fn get_keycode_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^-<>]+|^-$|--").expect("Failed to compile regex"))
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backslash,
    Backspace,
    Bar,
    Char(char),
    Delete,
    Down,
    End,
    Enter,
    Esc,
    Home,
    Left,
    LessThan,
    PageDown,
    PageUp,
    Right,
    Space,
    Tab,
    Up,
}

const NAMED_KEYS: [(&str, KeyCode); 17] = [
    ("bslash", KeyCode::Backslash),
    ("bs", KeyCode::Backspace),
    ("bar", KeyCode::Bar),
    ("del", KeyCode::Delete),
    ("down", KeyCode::Down),
    ("end", KeyCode::End),
    ("cr", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("home", KeyCode::Home),
    ("left", KeyCode::Left),
    ("lt", KeyCode::LessThan),
    ("pagedown", KeyCode::PageDown),
    ("pageup", KeyCode::PageUp),
    ("right", KeyCode::Right),
    ("space", KeyCode::Space),
    ("tab", KeyCode::Tab),
    ("up", KeyCode::Up),
];

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        if let Some((_, code)) = NAMED_KEYS.iter().find(|(name, _)| *name == keycode) {
            return Some(code.clone());
        }

        let mut chars = keycode.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self::from_char(c)),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        match c {
            '\\' => KeyCode::Backslash,
            '|' => KeyCode::Bar,
            '<' => KeyCode::LessThan,
            ' ' => KeyCode::Space,
            passed => KeyCode::Char(passed.to_ascii_lowercase()),
        }
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let KeyCode::Char(c) = self {
            return write!(f, "{}", c.to_lowercase());
        }

        match NAMED_KEYS.iter().find(|(_, code)| code == self) {
            Some((name, _)) => write!(f, "{}", name),
            None => Err(std::fmt::Error),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Command,
    Ctrl,
    Shift,
}

impl KeyModifier {
    fn prefix(&self) -> &'static str {
        match self {
            KeyModifier::Alt => "A-",
            KeyModifier::Command => "D-",
            KeyModifier::Ctrl => "C-",
            KeyModifier::Shift => "S-",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_uppercase().as_str() {
            "A" => Some(KeyModifier::Alt),
            "C" => Some(KeyModifier::Ctrl),
            "D" => Some(KeyModifier::Command),
            "S" => Some(KeyModifier::Shift),
            _ => None,
        }
    }
}
