//! Browser bootstrap for the dumbgame canvas game.
//!
//! The DOM-free pieces (scaling, key forwarding, debug drawing) build on any
//! target so they can be tested on the host.

pub mod boot;
pub mod config;
pub mod draw;
pub mod error;
pub mod keys;
pub mod scale;

pub use boot::{boot, AppContext, CanvasSurface};
pub use config::BootConfig;
pub use error::BootError;
pub use keys::{KeyCode, KeyEventKind, KeyInput};
pub use scale::{DisplayScale, LogicalSize, ScaledLayout};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::{boot, BootConfig, BootError, DisplayScale};

    mod dom;
    mod engine;

    pub use dom::{prepare_canvas, PreparedCanvas};
    pub use engine::{subscribe, Game};

    // Browser tests build without the `start` feature so module init does not
    // go looking for the game page.
    #[cfg_attr(feature = "start", wasm_bindgen(start))]
    pub fn main() -> Result<(), JsValue> {
        run(BootConfig::default())
    }

    /// Starts the game once the document has been parsed.
    pub fn run(config: BootConfig) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // Fails only if a logger is already installed.
        let _ = console_log::init_with_level(config.log_level);

        let window = web_sys::window().ok_or(BootError::WindowUnavailable)?;
        let document = window.document().ok_or(BootError::DocumentUnavailable)?;

        if document.ready_state() == "loading" {
            let on_loaded = Closure::once_into_js(move || {
                if let Err(err) = start(&config) {
                    log::error!("bootstrap failed: {:?}", err);
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_loaded.unchecked_ref(),
            )?;
            return Ok(());
        }
        start(&config)
    }

    fn start(config: &BootConfig) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or(BootError::WindowUnavailable)?;
        let document = window.document().ok_or(BootError::DocumentUnavailable)?;

        let PreparedCanvas { canvas, context } = prepare_canvas(&document, &config.canvas_id)?;
        let scale = DisplayScale::new(window.device_pixel_ratio())?;

        let app = boot(&canvas, scale, || Game::create(&context))?;
        subscribe(&document, &app)?;
        let (width, height) = app.layout().physical;
        log::info!("game started on #{} ({}x{})", config.canvas_id, width, height);
        Ok(())
    }
}
