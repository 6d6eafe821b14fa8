//! Binding to the external `dumbgame` engine and the key listeners.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, EventTarget, KeyboardEvent};

use crate::boot::AppContext;
use crate::error::BootError;
use crate::keys::{KeyCode, KeyEventKind, KeyInput};

#[wasm_bindgen]
extern "C" {
    /// Game object returned by `dumbgame.NewGame`.
    pub type Game;

    #[wasm_bindgen(catch, js_namespace = dumbgame, js_name = NewGame)]
    fn new_game(context: &CanvasRenderingContext2d) -> Result<Game, JsValue>;

    #[wasm_bindgen(method, js_name = KeyDown)]
    fn key_down(this: &Game, event: &KeyboardEvent);

    #[wasm_bindgen(method, js_name = KeyUp)]
    fn key_up(this: &Game, event: &KeyboardEvent);
}

impl Game {
    pub fn create(context: &CanvasRenderingContext2d) -> Result<Game, BootError> {
        new_game(context).map_err(|err| {
            // usually a ReferenceError when the engine script was not loaded
            let msg = match err.dyn_ref::<js_sys::Error>() {
                Some(js_err) => String::from(js_err.message()),
                None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
            };
            BootError::Engine(msg)
        })
    }
}

impl KeyInput for Game {
    type Event = KeyboardEvent;

    fn on_press(&self, event: &KeyboardEvent) {
        self.key_down(event);
    }

    fn on_release(&self, event: &KeyboardEvent) {
        self.key_up(event);
    }
}

/// Registers permanent `keydown`/`keyup` listeners on `target` (the document
/// in production) that feed `app`.
pub fn subscribe<G>(target: &EventTarget, app: &AppContext<G>) -> Result<(), JsValue>
where
    G: KeyInput<Event = KeyboardEvent> + 'static,
{
    for kind in [KeyEventKind::Press, KeyEventKind::Release] {
        let app = app.clone();
        let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let ty = event.type_();
            log::trace!(
                "{} {:?} repeat={}",
                ty,
                KeyCode::try_from(event.key_code()),
                event.repeat()
            );
            if !app.dispatch_type(&ty, &event) {
                log::warn!("ignoring unexpected {} event", ty);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        target.add_event_listener_with_callback(
            kind.event_type(),
            listener.as_ref().unchecked_ref(),
        )?;
        listener.forget();
    }
    Ok(())
}
