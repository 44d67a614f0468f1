use super::*;
use crate::{
    render::scene::{SceneOptions, build_scene},
    sequence::{PhaseKind, parse_sequence},
    style::{Theme, phase_color},
};

#[test]
fn background_and_ring_colours_land_in_pixels() {
    let seq = parse_sequence("in 4 hold 7 out 8").unwrap();
    let opts = SceneOptions::default();
    let scene = build_scene(&seq, 0.0, &opts).unwrap();
    let frame = Rasterizer::new().render(&scene).unwrap();

    assert_eq!(frame.width, 512);
    assert_eq!(frame.data.len(), 512 * 512 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(2, 2).unwrap(), Theme::Dark.background().to_array());

    // Bottom of the ring is half way through the cycle, inside the hold span.
    let base_radius = 512.0 * 0.4 / 1.2;
    let mid = base_radius - base_radius * opts.ring_width / 2.0;
    let y = (256.0 + mid).round() as u32;
    assert_eq!(
        frame.pixel(256, y).unwrap(),
        phase_color(PhaseKind::Hold).to_array()
    );
}

#[test]
fn unpremultiply_restores_straight_colour() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(&straight[..4], &[128, 64, 0, 128]);
    assert_eq!(&straight[4..], &[10, 20, 30, 255]);
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0; 4],
        premultiplied: true,
    };
    assert!(frame.pixel(1, 0).is_none());
    assert!(frame.pixel(0, 1).is_none());
}
