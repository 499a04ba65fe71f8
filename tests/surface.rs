use paintboard::draw::{BLACK, Color, WHITE};
use paintboard::export::ExportFormat;
use paintboard::input::{PenSettings, PointerAdapter, RawPointer, Tool, Viewport};
use paintboard::{Config, DrawingSurface};

fn mouse(x: f64, y: f64) -> RawPointer {
    RawPointer::Mouse {
        client_x: x,
        client_y: y,
    }
}

#[test]
fn adapter_and_surface_paint_in_surface_coordinates() {
    let mut surface = DrawingSurface::new(100, 100, PenSettings::default(), WHITE).unwrap();
    let mut adapter = PointerAdapter::new(Viewport::new(200.0, 50.0));

    surface.set_tool(Tool::Rectangle);
    surface.set_fill_enabled(true);
    surface.handle_pointer(adapter.press(&mouse(210.0, 60.0)).unwrap());
    surface.handle_pointer(adapter.motion(&mouse(250.0, 100.0)).unwrap());
    surface.handle_pointer(adapter.release());

    assert_eq!(surface.surface().pixel(30, 30), Some(BLACK));
    assert_eq!(surface.surface().pixel(5, 5), Some(WHITE));
    assert_eq!(surface.surface().pixel(55, 55), Some(WHITE));
}

#[test]
fn touch_strokes_paint_like_mouse_strokes() {
    let mut surface = DrawingSurface::new(60, 60, PenSettings::default(), WHITE).unwrap();
    let mut adapter = PointerAdapter::new(Viewport::default());
    let touch = |x: f64, y: f64| RawPointer::Touch {
        touches: vec![(x, y)],
    };

    surface.handle_pointer(adapter.press(&touch(0.0, 30.0)).unwrap());
    assert!(adapter.suppress_default_gestures());
    surface.handle_pointer(adapter.motion(&touch(60.0, 30.0)).unwrap());
    assert!(adapter.motion(&RawPointer::Touch { touches: vec![] }).is_none());
    surface.handle_pointer(adapter.release());

    assert_eq!(surface.surface().pixel(30, 30), Some(BLACK));
    assert!(!surface.is_drawing());
}

#[test]
fn configured_surface_uses_configured_pen() {
    let mut config = Config::from_toml(
        r##"
        [pen]
        tool = "circle"
        color = "rgb(0, 128, 0)"
        width = 2.0
        fill = true

        [surface]
        width = 50
        height = 40
        background = "#000"
        "##,
    )
    .unwrap();
    config.validate_and_clamp();

    let mut surface = DrawingSurface::from_config(&config).unwrap();
    assert_eq!((surface.width(), surface.height()), (50, 40));
    assert_eq!(surface.pen().tool, Tool::Circle);
    assert_eq!(surface.surface().pixel(0, 0), Some(BLACK));

    surface.begin_stroke(25.0, 20.0);
    surface.continue_stroke(35.0, 20.0);
    surface.end_stroke();
    assert_eq!(surface.surface().pixel(25, 20), Some(Color::from_rgb8(0, 128, 0)));

    surface.set_tool(Tool::Eraser);
    surface.set_width(8.0);
    surface.begin_stroke(0.0, 20.0);
    surface.continue_stroke(50.0, 20.0);
    surface.end_stroke();
    assert_eq!(surface.surface().pixel(25, 20), Some(BLACK));
}

#[test]
fn repeated_exports_decode_to_identical_pixels() {
    let mut surface = DrawingSurface::new(48, 32, PenSettings::default(), WHITE).unwrap();
    surface.set_tool(Tool::Triangle);
    surface.begin_stroke(24.0, 4.0);
    surface.continue_stroke(40.0, 28.0);
    surface.end_stroke();

    let first = surface.export_image(ExportFormat::Jpeg).unwrap();
    let second = surface.export_image(ExportFormat::Jpeg).unwrap();
    assert_eq!(first.bytes, second.bytes);
    assert_ne!(first.filename, second.filename);

    let a = image::load_from_memory(&first.bytes).unwrap().to_rgb8();
    let b = image::load_from_memory(&second.bytes).unwrap().to_rgb8();
    assert_eq!(a, b);
    assert_eq!(a.dimensions(), (48, 32));
}
