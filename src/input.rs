//! Input vocabulary shared by the scene and whatever windowing layer feeds it.
//!
//! The windowing layer translates its own key codes into [`Key`] and its mouse events into
//! [`MouseButton`] / [`ButtonAction`]; the scene only ever sees these types.

/// Keys the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    P,
    /// `=` / `+` on the main keyboard
    Equal,
    KeypadAdd,
    Minus,
    KeypadSubtract,
    R,
    Other,
}

/// High-level actions triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    TogglePause,
    SpeedUp,
    SlowDown,
    ResetCamera,
}

impl Command {
    /// Key binding table. Returns `None` for unbound keys.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Command::Quit),
            Key::P => Some(Command::TogglePause),
            Key::Equal | Key::KeypadAdd => Some(Command::SpeedUp),
            Key::Minus | Key::KeypadSubtract => Some(Command::SlowDown),
            Key::R => Some(Command::ResetCamera),
            Key::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Press,
    Release,
}
