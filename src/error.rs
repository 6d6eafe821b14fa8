use std::fmt;

/// Everything that can stop the bootstrap before the game is wired up.
#[derive(Debug, Clone, PartialEq)]
pub enum BootError {
    WindowUnavailable,
    DocumentUnavailable,
    /// No element with the given id in the document.
    ElementNotFound(String),
    /// The element exists but is not a `<canvas>`.
    NotACanvas(String),
    ContextUnavailable,
    /// The browser rejected a DOM mutation.
    Dom(String),
    /// Device pixel ratio was zero, negative or not a number.
    InvalidScale(f64),
    /// `dumbgame.NewGame` threw or is not defined.
    Engine(String),
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::WindowUnavailable => write!(f, "no window"),
            BootError::DocumentUnavailable => write!(f, "no document"),
            BootError::ElementNotFound(id) => write!(f, "element #{id} not found"),
            BootError::NotACanvas(id) => write!(f, "element #{id} is not a canvas"),
            BootError::ContextUnavailable => write!(f, "2d context not supported"),
            BootError::Dom(msg) => write!(f, "dom update failed: {msg}"),
            BootError::InvalidScale(r) => write!(f, "invalid device pixel ratio {r}"),
            BootError::Engine(msg) => write!(f, "game engine failed: {msg}"),
        }
    }
}

impl std::error::Error for BootError {}

impl From<BootError> for wasm_bindgen::JsValue {
    fn from(err: BootError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
