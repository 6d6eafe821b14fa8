//! Keyboard plumbing between the document and the game.

/// The two document events the game subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Press,
    Release,
}

impl KeyEventKind {
    /// DOM event type string for this kind.
    pub fn event_type(self) -> &'static str {
        match self {
            KeyEventKind::Press => "keydown",
            KeyEventKind::Release => "keyup",
        }
    }

    pub fn from_event_type(ty: &str) -> Option<Self> {
        match ty {
            "keydown" => Some(KeyEventKind::Press),
            "keyup" => Some(KeyEventKind::Release),
            _ => None,
        }
    }
}

/// Something that reacts to raw key presses and releases.
///
/// Events are handed over untouched; deciding which keys matter is up to the
/// implementor. Handlers take `&self` and may be re-entered when they raise
/// key events themselves.
pub trait KeyInput {
    type Event;

    fn on_press(&self, event: &Self::Event);
    fn on_release(&self, event: &Self::Event);
}

/// Key codes the game engine acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum KeyCode {
    Space = 32,
    Left = 37,
    Up = 38,
    Right = 39,
    Down = 40,
}

impl TryFrom<u32> for KeyCode {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            32 => Ok(KeyCode::Space),
            37 => Ok(KeyCode::Left),
            38 => Ok(KeyCode::Up),
            39 => Ok(KeyCode::Right),
            40 => Ok(KeyCode::Down),
            other => Err(other),
        }
    }
}
