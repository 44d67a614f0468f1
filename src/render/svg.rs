use std::fmt::Write as _;

use crate::render::scene::Scene;

const FONT_FAMILY: &str = "sans-serif";

/// Serialize a scene into a standalone SVG document in canvas pixel units.
pub fn scene_to_svg(scene: &Scene) -> String {
    let (w, h) = (scene.canvas.width, scene.canvas.height);
    let mut out = String::with_capacity(4096);

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = write!(
        out,
        r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
        scene.background.to_hex()
    );

    for shape in &scene.shapes {
        let _ = write!(
            out,
            r#"<path d="{}" fill="{}" fill-opacity="{:.3}"/>"#,
            shape.path.to_svg(),
            shape.color.to_hex(),
            shape.color.opacity()
        );
    }

    for text in &scene.texts {
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-family="{FONT_FAMILY}" font-size="{:.2}" text-anchor="middle" dominant-baseline="central" fill="{}">{}</text>"#,
            text.position.x,
            text.position.y,
            text.size,
            text.color.to_hex(),
            escape_xml(&text.text)
        );
    }

    out.push_str("</svg>");
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
