//! The startup routine, independent of the DOM.

use std::rc::Rc;

use crate::error::BootError;
use crate::keys::{KeyEventKind, KeyInput};
use crate::scale::{DisplayScale, LogicalSize, ScaledLayout};

/// The parts of a drawing surface the bootstrap touches.
pub trait CanvasSurface {
    fn logical_size(&self) -> LogicalSize;
    fn set_backing_size(&self, width: u32, height: u32);
    fn set_css_size(&self, width: &str, height: &str) -> Result<(), BootError>;
}

/// Owns the game for as long as the page lives.
///
/// Handlers get shared access only, so a handler that raises another key
/// event re-enters `dispatch` without conflict.
pub struct AppContext<G> {
    game: Rc<G>,
    layout: ScaledLayout,
}

// Derive would require `G: Clone`.
impl<G> Clone for AppContext<G> {
    fn clone(&self) -> Self {
        Self {
            game: self.game.clone(),
            layout: self.layout,
        }
    }
}

impl<G> AppContext<G> {
    /// Canvas sizes applied during boot.
    pub fn layout(&self) -> ScaledLayout {
        self.layout
    }

    /// The game the listeners feed; lets callers inspect it after boot.
    pub fn game(&self) -> &G {
        &self.game
    }
}

impl<G: KeyInput> AppContext<G> {
    pub fn dispatch(&self, kind: KeyEventKind, event: &G::Event) {
        match kind {
            KeyEventKind::Press => self.game.on_press(event),
            KeyEventKind::Release => self.game.on_release(event),
        }
    }

    /// Forwards `event` if `ty` is one of the key event types. Returns
    /// whether it was forwarded.
    pub fn dispatch_type(&self, ty: &str, event: &G::Event) -> bool {
        match KeyEventKind::from_event_type(ty) {
            Some(kind) => {
                self.dispatch(kind, event);
                true
            }
            None => false,
        }
    }
}

/// Rescales `surface` for `scale` and builds the game.
///
/// `make_game` runs exactly once, after the surface has its final size.
pub fn boot<S, G, F>(
    surface: &S,
    scale: DisplayScale,
    make_game: F,
) -> Result<AppContext<G>, BootError>
where
    S: CanvasSurface,
    F: FnOnce() -> Result<G, BootError>,
{
    log::info!("device pixel ratio: {}", scale.ratio());

    let layout = ScaledLayout::new(surface.logical_size(), scale);
    let (width, height) = layout.physical;
    surface.set_backing_size(width, height);
    surface.set_css_size(&layout.css_width(), &layout.css_height())?;
    log::debug!(
        "canvas {}x{} -> backing store {}x{}",
        layout.logical.width,
        layout.logical.height,
        width,
        height
    );

    let game = make_game()?;
    Ok(AppContext {
        game: Rc::new(game),
        layout,
    })
}
