use super::*;

fn solid_frame(w: u32, h: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: rgba.repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn png_sink_creates_dirs_and_overwrites() {
    let dir = PathBuf::from("target").join("unit_png_sink").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("cells.png");
    let mut sink = PngSink::new(&path);

    sink.write_frame(0, &solid_frame(8, 4, [255, 0, 0, 255]))
        .unwrap();
    sink.write_frame(1, &solid_frame(8, 4, [0, 0, 255, 255]))
        .unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (8, 4));
    assert_eq!(img.get_pixel(3, 2).0, [0, 0, 255, 255]);
}

#[test]
fn png_sink_writes_straight_alpha() {
    let dir = PathBuf::from("target").join("unit_png_sink_alpha");
    let path = dir.join("cells.png");
    let mut sink = PngSink::new(&path);

    let mut premul = solid_frame(2, 1, [100, 50, 0, 128]);
    let mut straight = premul.clone();
    straight.premultiplied = false;

    sink.write_frame(0, &premul).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [199, 100, 0, 128]);

    sink.write_frame(1, &straight).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(1, 0).0, [100, 50, 0, 128]);

    premul.data[3] = 0;
    assert_eq!(&premul.straight_rgba8()[..4], &[0, 0, 0, 0]);
}

#[test]
fn png_sink_reports_output_errors() {
    let blocker = PathBuf::from("target").join("unit_png_sink_blocker");
    std::fs::create_dir_all("target").unwrap();
    std::fs::write(&blocker, b"not a directory").unwrap();

    let mut sink = PngSink::new(blocker.join("cells.png"));
    let err = sink
        .write_frame(0, &solid_frame(2, 2, [0, 0, 0, 255]))
        .unwrap_err();
    assert!(matches!(err, CellviewError::Output(_)), "{err}");
}

#[test]
fn in_memory_sink_keeps_latest_frame() {
    let mut sink = InMemorySink::new();
    assert!(sink.last().is_none());
    sink.write_frame(0, &solid_frame(1, 1, [1, 2, 3, 255]))
        .unwrap();
    sink.write_frame(5, &solid_frame(1, 1, [4, 5, 6, 255]))
        .unwrap();
    let (cycle, frame) = sink.last().unwrap();
    assert_eq!(*cycle, 5);
    assert_eq!(frame.pixel(0, 0), Some([4, 5, 6, 255]));
    assert_eq!(sink.written(), 2);
}
