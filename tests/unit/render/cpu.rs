use super::*;

const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
const BORDER: Rgb8 = Rgb8::new(16, 16, 16);

fn near(px: [u8; 4], c: Rgb8) -> bool {
    let d = |a: u8, b: u8| (i16::from(a) - i16::from(b)).abs() <= 1;
    d(px[0], c.r) && d(px[1], c.g) && d(px[2], c.b) && px[3] == 255
}

fn canvas(w: u32, h: u32) -> CpuCanvas {
    CpuCanvas::new(Canvas::new(w, h).unwrap()).unwrap()
}

#[test]
fn rejects_canvas_beyond_raster_limit() {
    let err = CpuCanvas::new(Canvas {
        width: 70_000,
        height: 10,
    })
    .err()
    .unwrap();
    assert!(matches!(err, CellviewError::Render(_)));
}

#[test]
fn clear_paints_background_and_border() {
    let mut c = canvas(32, 24);
    c.clear(WHITE, BORDER);
    let frame = c.finish();
    assert_eq!(frame.width, 32);
    assert_eq!(frame.height, 24);
    assert_eq!(frame.data.len(), 32 * 24 * 4);
    assert!(near(frame.pixel(16, 12).unwrap(), WHITE));
    assert!(near(frame.pixel(0, 0).unwrap(), BORDER));
    assert!(near(frame.pixel(31, 23).unwrap(), BORDER));
    assert!(near(frame.pixel(16, 0).unwrap(), BORDER));
}

#[test]
fn dot_is_centered_and_bounded() {
    let mut c = canvas(64, 64);
    c.clear(WHITE, BORDER);
    let red = Rgb8::new(220, 0, 0);
    c.draw_dot(Point::new(20.0, 30.0), 5.0, red);
    assert_eq!(c.dot_count(), 1);
    let frame = c.finish();

    assert!(near(frame.pixel(20, 30).unwrap(), red));
    assert!(near(frame.pixel(19, 29).unwrap(), red));
    // Well outside the 2.5px radius.
    assert!(near(frame.pixel(24, 30).unwrap(), WHITE));
    assert!(near(frame.pixel(20, 34).unwrap(), WHITE));
}

#[test]
fn later_dots_paint_over_earlier_ones() {
    let mut c = canvas(16, 16);
    c.clear(WHITE, BORDER);
    let blue = Rgb8::new(0, 0, 255);
    let green = Rgb8::new(0, 160, 0);
    c.draw_dot(Point::new(8.0, 8.0), 5.0, blue);
    c.draw_dot(Point::new(8.0, 8.0), 5.0, green);
    let frame = c.finish();
    assert!(near(frame.pixel(8, 8).unwrap(), green));
}

#[test]
fn clear_discards_previous_dots() {
    let mut c = canvas(16, 16);
    c.clear(WHITE, BORDER);
    c.draw_dot(Point::new(8.0, 8.0), 5.0, Rgb8::new(0, 0, 255));
    let _ = c.finish();

    c.clear(WHITE, BORDER);
    assert_eq!(c.dot_count(), 0);
    let frame = c.finish();
    assert!(near(frame.pixel(8, 8).unwrap(), WHITE));
}

#[test]
fn pixel_outside_frame_is_none() {
    let mut c = canvas(4, 4);
    c.clear(WHITE, BORDER);
    let frame = c.finish();
    assert!(frame.pixel(4, 0).is_none());
    assert!(frame.pixel(0, 4).is_none());
}
