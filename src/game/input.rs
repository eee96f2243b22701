//! Key events from physical or on-screen keyboards

/// A key press as the game sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A letter, already uppercased
    Letter(char),
    /// Backspace or delete
    Delete,
    /// Anything else; dropped without effect
    Ignored,
}

impl KeyInput {
    /// Interpret a key name as delivered by a keyboard surface
    ///
    /// Single ASCII letters become `Letter`; `Backspace`, `Delete` and the
    /// on-screen keyboard's `{bksp}` become `Delete`. Modifier keys, digits,
    /// `Enter` and every other name are `Ignored`.
    ///
    /// # Examples
    /// ```
    /// use hintle::game::KeyInput;
    ///
    /// assert_eq!(KeyInput::parse("a"), KeyInput::Letter('A'));
    /// assert_eq!(KeyInput::parse("Backspace"), KeyInput::Delete);
    /// assert_eq!(KeyInput::parse("Tab"), KeyInput::Ignored);
    /// ```
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key {
            "Backspace" | "Delete" | "{bksp}" => Self::Delete,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from(ch),
                    _ => Self::Ignored,
                }
            }
        }
    }
}

impl From<char> for KeyInput {
    fn from(ch: char) -> Self {
        if ch.is_ascii_alphabetic() {
            Self::Letter(ch.to_ascii_uppercase())
        } else {
            Self::Ignored
        }
    }
}
