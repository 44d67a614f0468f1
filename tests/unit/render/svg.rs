use super::*;
use crate::{
    render::scene::{SceneOptions, build_scene},
    sequence::parse_sequence,
};

#[test]
fn document_carries_canvas_size_and_all_items() {
    let seq = parse_sequence("in 4 hold 7 out 8").unwrap();
    let opts = SceneOptions {
        show_controls: true,
        ..SceneOptions::default()
    };
    let scene = build_scene(&seq, 0.0, &opts).unwrap();
    let svg = scene_to_svg(&scene);

    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"width="512" height="512""#));
    assert_eq!(svg.matches("<path ").count(), scene.shapes.len());
    assert_eq!(svg.matches("<text ").count(), scene.texts.len());
    assert!(svg.contains(">Inhale</text>"));
    assert!(svg.contains(">in 4 hold 7 out 8</text>"));
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
}

#[test]
fn output_parses_as_svg() {
    let seq = parse_sequence("in 2 out 2").unwrap();
    let scene = build_scene(&seq, 1.0, &SceneOptions::default()).unwrap();
    let svg = scene_to_svg(&scene);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 512.0);
}
