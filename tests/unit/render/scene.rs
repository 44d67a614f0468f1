use super::*;
use crate::sequence::{PhaseKind, parse_sequence};
use kurbo::Shape as _;

fn seq() -> Sequence {
    parse_sequence("in 4 hold 7 out 8").unwrap()
}

#[test]
fn label_follows_the_active_phase() {
    let s = seq();
    let opts = SceneOptions::default();
    for (t, label) in [(0.0, "Inhale"), (5.0, "Hold"), (12.0, "Exhale"), (19.5, "Inhale")] {
        let scene = build_scene(&s, t, &opts).unwrap();
        assert_eq!(scene.text(TextRole::PhaseLabel).unwrap().text, label, "t={t}");
    }
}

#[test]
fn countdown_shows_whole_seconds_left() {
    let s = seq();
    let opts = SceneOptions::default();
    let at = |t: f64| {
        build_scene(&s, t, &opts)
            .unwrap()
            .text(TextRole::Countdown)
            .unwrap()
            .text
            .clone()
    };
    assert_eq!(at(0.0), "4");
    assert_eq!(at(3.5), "1");
    assert_eq!(at(4.0), "7");
}

#[test]
fn one_ring_sector_per_step_plus_pointer() {
    let s = seq();
    let scene = build_scene(&s, 1.0, &SceneOptions::default()).unwrap();
    assert_eq!(scene.shapes.len(), s.len() + 1);
    assert_eq!(scene.shapes[0].color, phase_color(PhaseKind::Inhale));
    assert_eq!(scene.shapes[2].color, phase_color(PhaseKind::Exhale));
}

#[test]
fn ring_stays_inside_the_canvas_at_full_scale() {
    let s = seq();
    let opts = SceneOptions::default();
    for n in 0..76 {
        let scene = build_scene(&s, f64::from(n) * 0.25, &opts).unwrap();
        for shape in &scene.shapes {
            let b = shape.path.bounding_box();
            assert!(b.min_x() >= 0.0 && b.min_y() >= 0.0);
            assert!(b.max_x() <= f64::from(opts.canvas.width));
            assert!(b.max_y() <= f64::from(opts.canvas.height));
        }
    }
}

#[test]
fn optional_text_obeys_flags() {
    let s = seq();
    let plain = build_scene(&s, 20.0, &SceneOptions::default()).unwrap();
    assert!(plain.text(TextRole::Footer).is_none());
    assert!(plain.text(TextRole::CycleCounter).is_none());

    let opts = SceneOptions {
        show_controls: true,
        show_cycle_count: true,
        ..SceneOptions::default()
    };
    let full = build_scene(&s, 20.0, &opts).unwrap();
    assert_eq!(full.text(TextRole::Footer).unwrap().text, "in 4 hold 7 out 8");
    assert_eq!(full.text(TextRole::CycleCounter).unwrap().text, "cycle 2");
}

#[test]
fn cycle_counter_saturates_at_huge_times() {
    let s = seq();
    let opts = SceneOptions {
        show_cycle_count: true,
        ..SceneOptions::default()
    };
    let scene = build_scene(&s, 1e30, &opts).unwrap();
    assert_eq!(
        scene.text(TextRole::CycleCounter).unwrap().text,
        format!("cycle {}", u64::MAX)
    );
}

#[test]
fn non_finite_time_draws_the_cycle_start() {
    let s = seq();
    let opts = SceneOptions::default();
    let at_nan = build_scene(&s, f64::NAN, &opts).unwrap();
    let at_zero = build_scene(&s, 0.0, &opts).unwrap();
    let svg = crate::render::svg::scene_to_svg(&at_nan);
    assert_eq!(svg, crate::render::svg::scene_to_svg(&at_zero));
    assert!(!svg.contains("NaN"));
}

#[test]
fn invalid_options_are_rejected() {
    let s = seq();
    let opts = SceneOptions {
        ring_width: 1.5,
        ..SceneOptions::default()
    };
    assert!(build_scene(&s, 0.0, &opts).is_err());

    let opts = SceneOptions {
        canvas: Canvas {
            width: 0,
            height: 10,
        },
        ..SceneOptions::default()
    };
    assert!(build_scene(&s, 0.0, &opts).is_err());
}

#[test]
fn theme_sets_background() {
    let s = seq();
    let opts = SceneOptions {
        theme: Theme::Light,
        ..SceneOptions::default()
    };
    let scene = build_scene(&s, 0.0, &opts).unwrap();
    assert_eq!(scene.background, Theme::Light.background());
}
