use std::cell::{Cell, RefCell};

use dumbgame_boot::{
    boot, AppContext, BootError, CanvasSurface, DisplayScale, KeyEventKind, KeyInput, LogicalSize,
};

struct FakeCanvas {
    width: Cell<u32>,
    height: Cell<u32>,
    css: RefCell<Option<(String, String)>>,
}

impl FakeCanvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width: Cell::new(width),
            height: Cell::new(height),
            css: RefCell::new(None),
        }
    }
}

impl CanvasSurface for FakeCanvas {
    fn logical_size(&self) -> LogicalSize {
        LogicalSize::new(self.width.get(), self.height.get())
    }

    fn set_backing_size(&self, width: u32, height: u32) {
        self.width.set(width);
        self.height.set(height);
    }

    fn set_css_size(&self, width: &str, height: &str) -> Result<(), BootError> {
        *self.css.borrow_mut() = Some((width.to_string(), height.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Key {
    code: u32,
    repeat: bool,
}

#[derive(Default)]
struct RecordingGame {
    log: RefCell<Vec<(&'static str, Key)>>,
}

impl KeyInput for RecordingGame {
    type Event = Key;

    fn on_press(&self, event: &Key) {
        self.log.borrow_mut().push(("press", event.clone()));
    }

    fn on_release(&self, event: &Key) {
        self.log.borrow_mut().push(("release", event.clone()));
    }
}

/// Releases every key from inside its own press handler, the way an engine
/// that synthesises DOM events would.
#[derive(Default)]
struct EchoGame {
    app: RefCell<Option<AppContext<EchoGame>>>,
    released: RefCell<Vec<u32>>,
}

impl KeyInput for EchoGame {
    type Event = Key;

    fn on_press(&self, event: &Key) {
        let app = self.app.borrow().clone();
        if let Some(app) = app {
            app.dispatch(KeyEventKind::Release, event);
        }
    }

    fn on_release(&self, event: &Key) {
        self.released.borrow_mut().push(event.code);
    }
}

fn key(code: u32) -> Key {
    Key { code, repeat: false }
}

#[test]
fn rescales_surface_before_building_game() {
    let canvas = FakeCanvas::new(300, 150);
    let app = boot(&canvas, DisplayScale::new(2.0).unwrap(), || {
        // surface already has its final size when the engine sees it
        assert_eq!((canvas.width.get(), canvas.height.get()), (600, 300));
        Ok(RecordingGame::default())
    })
    .unwrap();

    assert_eq!(app.layout().physical, (600, 300));
    assert_eq!(
        canvas.css.borrow().clone(),
        Some(("300px".to_string(), "150px".to_string()))
    );
}

#[test]
fn constructs_game_once() {
    let canvas = FakeCanvas::new(500, 500);
    let calls = Cell::new(0);
    let app = boot(&canvas, DisplayScale::new(1.0).unwrap(), || {
        calls.set(calls.get() + 1);
        Ok(RecordingGame::default())
    })
    .unwrap();

    for code in [37, 38, 39, 40] {
        app.dispatch(KeyEventKind::Press, &key(code));
    }
    assert_eq!(calls.get(), 1);
    assert_eq!((canvas.width.get(), canvas.height.get()), (500, 500));
}

#[test]
fn forwards_key_events_verbatim() {
    let canvas = FakeCanvas::new(500, 500);
    let app = boot(&canvas, DisplayScale::new(1.5).unwrap(), || {
        Ok(RecordingGame::default())
    })
    .unwrap();

    let held = Key { code: 39, repeat: true };
    assert!(app.dispatch_type("keydown", &key(37)));
    assert!(app.dispatch_type("keydown", &held));
    assert!(app.dispatch_type("keyup", &key(37)));
    // unknown codes are the engine's business
    assert!(app.dispatch_type("keyup", &key(65)));
    assert!(!app.dispatch_type("keypress", &key(38)));
    assert!(!app.dispatch_type("click", &key(38)));

    assert_eq!(
        *app.game().log.borrow(),
        vec![
            ("press", key(37)),
            ("press", held),
            ("release", key(37)),
            ("release", key(65)),
        ]
    );
}

#[test]
fn clones_share_the_game() {
    let canvas = FakeCanvas::new(10, 10);
    let app = boot(&canvas, DisplayScale::new(1.0).unwrap(), || {
        Ok(RecordingGame::default())
    })
    .unwrap();

    let press_listener = app.clone();
    let release_listener = app.clone();
    press_listener.dispatch(KeyEventKind::Press, &key(32));
    release_listener.dispatch(KeyEventKind::Release, &key(32));

    assert_eq!(app.game().log.borrow().len(), 2);
}

#[test]
fn handler_can_raise_key_events() {
    let canvas = FakeCanvas::new(500, 500);
    let app = boot(&canvas, DisplayScale::new(1.0).unwrap(), || Ok(EchoGame::default())).unwrap();
    *app.game().app.borrow_mut() = Some(app.clone());

    app.dispatch(KeyEventKind::Press, &key(38));
    assert!(app.dispatch_type("keydown", &key(40)));

    assert_eq!(*app.game().released.borrow(), vec![38, 40]);
    // break the Rc cycle
    app.game().app.borrow_mut().take();
}

#[test]
fn engine_failure_is_reported() {
    let canvas = FakeCanvas::new(500, 500);
    let result = boot(&canvas, DisplayScale::new(1.0).unwrap(), || {
        Err::<RecordingGame, _>(BootError::Engine("dumbgame is not defined".into()))
    });

    match result {
        Err(BootError::Engine(msg)) => assert_eq!(msg, "dumbgame is not defined"),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("boot succeeded without an engine"),
    }
}

#[test]
fn rejects_zero_ratio() {
    assert_eq!(DisplayScale::new(0.0), Err(BootError::InvalidScale(0.0)));
}
