//! End-to-end rendering: OBJ text in, presented pixels out.
//!
//! Run: cargo test --test end_to_end_test

#![allow(clippy::unwrap_used)]

use std::f64::consts::FRAC_PI_2;
use tiny_raster::prelude::*;
use tiny_raster::present::encode_png;

const WHITE: u32 = 0xFFFF_FFFF;
const BLACK: u32 = 0xFF00_0000;

/// Counter-clockwise in OBJ's y-up space, so it faces the viewer.
const TRIANGLE_OBJ: &str = "\
# one triangle
v -1.0 -1.0 0.0
v  1.0 -1.0 0.0
v  0.0  1.0 0.0
f 1 2 3
";

/// Unit cube, outward-facing quads written counter-clockwise.
const CUBE_OBJ: &str = "\
v -0.5 -0.5 -0.5
v  0.5 -0.5 -0.5
v  0.5  0.5 -0.5
v -0.5  0.5 -0.5
v -0.5 -0.5  0.5
v  0.5 -0.5  0.5
v  0.5  0.5  0.5
v -0.5  0.5  0.5
f 5 6 7 8
f 2 1 4 3
f 1 5 8 4
f 6 2 3 7
f 8 7 3 4
f 1 2 6 5
";

fn painted(sink: &CaptureSink) -> usize {
    sink.pixels().iter().filter(|&&px| px != BLACK).count()
}

#[test]
fn test_obj_triangle_renders_white() {
    let mesh = Mesh::parse(TRIANGLE_OBJ).unwrap();
    let mut rasterizer = Rasterizer::new(800, 600);
    let mut sink = CaptureSink::new();

    rasterizer.draw(&mesh);
    rasterizer.render(&mut sink).unwrap();

    assert_eq!(sink.width(), 800);
    assert_eq!(sink.height(), 600);
    // OBJ is y-up, screen rows grow down: the apex lands on the top row
    assert_eq!(sink.get(400, 300), Some(WHITE));
    assert_eq!(sink.get(400, 2), Some(WHITE));
    assert_eq!(sink.get(2, 598), Some(WHITE));
    assert_eq!(sink.get(5, 5), Some(BLACK));
    assert_eq!(sink.get(794, 5), Some(BLACK));
}

#[test]
fn test_both_strategies_render_same_mesh() {
    let mesh = Mesh::parse(CUBE_OBJ).unwrap();
    let mut sinks = Vec::new();

    for fill in [FillStrategy::Scanline, FillStrategy::Barycentric] {
        let mut rasterizer = Rasterizer::new(200, 200).with_fill_strategy(fill);
        let mut sink = CaptureSink::new();
        rasterizer.draw(&mesh);
        rasterizer.render(&mut sink).unwrap();
        sinks.push(sink);
    }

    // Only the front face is lit: a 100x100 white square in the middle
    for sink in &sinks {
        assert_eq!(sink.get(100, 100), Some(WHITE));
        assert_eq!(sink.get(60, 60), Some(WHITE));
        assert_eq!(sink.get(40, 40), Some(BLACK));
        assert_eq!(sink.get(160, 160), Some(BLACK));
    }
    let (sweep, bary) = (painted(&sinks[0]) as f64, painted(&sinks[1]) as f64);
    assert!((sweep - bary).abs() / bary < 0.05, "sweep {sweep} vs barycentric {bary}");
}

#[test]
fn test_rotation_turns_face_away() {
    let mut mesh = Mesh::parse(TRIANGLE_OBJ).unwrap();
    let mut rasterizer = Rasterizer::new(100, 100);
    let mut sink = CaptureSink::new();

    rasterizer.draw(&mesh);
    rasterizer.render(&mut sink).unwrap();
    assert!(painted(&sink) > 0);

    // Edge-on, then facing away
    mesh.rotate_y(FRAC_PI_2);
    rasterizer.draw(&mesh);
    rasterizer.render(&mut sink).unwrap();
    assert_eq!(painted(&sink), 0);

    mesh.rotate_y(FRAC_PI_2);
    rasterizer.draw(&mesh);
    rasterizer.render(&mut sink).unwrap();
    assert_eq!(painted(&sink), 0);
    assert_eq!(sink.frames(), 3);
}

#[test]
fn test_wireframe_outlines_only() {
    let mesh = Mesh::parse(TRIANGLE_OBJ).unwrap();
    let mut rasterizer = Rasterizer::new(100, 100).with_wireframe_color(Color::RED);
    let mut sink = CaptureSink::new();

    rasterizer.draw_mesh(&mesh, RenderMode::Wireframe);
    rasterizer.render(&mut sink).unwrap();

    let red = Color::RED.to_argb();
    assert_eq!(sink.get(50, 0), Some(red));
    assert_eq!(sink.get(50, 50), Some(BLACK));
    assert!(sink.pixels().iter().all(|&px| px == red || px == BLACK));
}

#[test]
fn test_resize_between_frames() {
    let mesh = Mesh::parse(TRIANGLE_OBJ).unwrap();
    let mut rasterizer = Rasterizer::new(800, 600);
    let mut sink = CaptureSink::new();

    rasterizer.resize_canvas(50, 50);
    rasterizer.draw(&mesh);
    rasterizer.render(&mut sink).unwrap();
    assert_eq!(sink.pixels().len(), 2500);
    assert_eq!(sink.get(25, 25), Some(WHITE));

    rasterizer.resize_canvas(0, 0);
    rasterizer.draw(&mesh);
    rasterizer.render(&mut sink).unwrap();
    assert!(sink.pixels().is_empty());
}

#[test]
fn test_overlay_from_png_on_top() {
    let badge = vec![0xFF00_00FF; 4 * 2];
    let png = encode_png(&Frame::new(4, 2, &badge)).unwrap();
    let overlay = Overlay::from_png_bytes(&png).unwrap();

    let mesh = Mesh::parse(TRIANGLE_OBJ).unwrap();
    let mut rasterizer = Rasterizer::new(100, 100);
    let mut sink = CaptureSink::new();
    rasterizer.draw_overlay(overlay);
    rasterizer.draw(&mesh);
    rasterizer.render(&mut sink).unwrap();

    assert_eq!(sink.get(0, 0), Some(0xFF00_00FF));
    assert_eq!(sink.get(3, 1), Some(0xFF00_00FF));
    assert_eq!(sink.get(4, 1), Some(BLACK));
    assert_eq!(sink.get(50, 50), Some(WHITE));
}

#[test]
fn test_png_frames_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = Mesh::parse(TRIANGLE_OBJ).unwrap();
    let mut rasterizer = Rasterizer::new(64, 48);
    let mut sink = PngSink::new(dir.path(), "spin").unwrap();

    for _ in 0..3 {
        rasterizer.draw(&mesh);
        rasterizer.render(&mut sink).unwrap();
    }

    let path = dir.path().join("spin_0002.png");
    assert!(path.is_file());

    let decoded = Overlay::load_png(&path).unwrap();
    assert_eq!(decoded.width(), 64);
    assert_eq!(decoded.height(), 48);
    assert_eq!(decoded.pixels()[24 * 64 + 32], WHITE);
    assert_eq!(decoded.pixels()[0], BLACK);
}

#[test]
fn test_config_drives_rasterizer() {
    let config = Config::parse(
        "window:\n  width: 32\n  height: 16\nrender:\n  clear_color: { r: 0, g: 0, b: 255 }\n  fill: scanline\n",
    )
    .unwrap();
    let mut rasterizer = Rasterizer::from_config(&config);
    let mut sink = CaptureSink::new();

    rasterizer.render(&mut sink).unwrap();

    assert_eq!(sink.width(), 32);
    assert_eq!(rasterizer.fill_strategy(), FillStrategy::Scanline);
    assert!(sink.pixels().iter().all(|&px| px == Color::BLUE.to_argb()));
}
