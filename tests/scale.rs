use dumbgame_boot::{DisplayScale, LogicalSize, ScaledLayout};

fn layout(w: u32, h: u32, ratio: f64) -> ScaledLayout {
    ScaledLayout::new(LogicalSize::new(w, h), DisplayScale::new(ratio).unwrap())
}

#[test]
fn retina_doubles_backing_store() {
    let l = layout(300, 150, 2.0);
    assert_eq!(l.physical, (600, 300));
    assert_eq!(l.css_width(), "300px");
    assert_eq!(l.css_height(), "150px");
}

#[test]
fn unit_ratio_is_identity() {
    for (w, h) in [(1, 1), (300, 150), (500, 500), (1920, 1080)] {
        let l = layout(w, h, 1.0);
        assert_eq!(l.physical, (w, h));
    }
}

#[test]
fn css_size_ignores_ratio() {
    for ratio in [0.5, 1.0, 1.25, 2.0, 3.0] {
        let l = layout(500, 500, ratio);
        assert_eq!(l.css_width(), "500px");
        assert_eq!(l.css_height(), "500px");
        assert_eq!(l.physical, ((500.0 * ratio) as u32, (500.0 * ratio) as u32));
    }
}
