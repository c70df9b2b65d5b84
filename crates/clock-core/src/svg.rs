use crate::scene::{Circle, ClockFace, Scene};
use std::fmt::Write;

/// Format a coordinate with at most three decimals and no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let mut s = format!("{:.3}", v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn write_circle(out: &mut String, c: &Circle) {
    let fill = c
        .fill
        .map(|rgb| rgb.to_string())
        .unwrap_or_else(|| "none".to_string());
    _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
        fmt_num(c.center.x),
        fmt_num(c.center.y),
        fmt_num(c.radius),
        fill
    );
    if let Some(stroke) = c.stroke {
        _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color,
            fmt_num(stroke.width)
        );
    }
    if c.opacity < 1.0 {
        _ = write!(out, r#" opacity="{}""#, fmt_num(c.opacity));
    }
    out.push_str("/>");
}

impl Scene {
    /// Children of the `<svg>` element, one `<circle/>` per scene circle.
    pub fn to_svg_body(&self) -> String {
        let mut out = String::with_capacity(self.circles.len() * 96);
        for c in &self.circles {
            write_circle(&mut out, c);
        }
        out
    }
}

/// `viewBox` attribute value for a face.
pub fn view_box_attr(face: &ClockFace) -> String {
    face.view_box
        .iter()
        .map(|v| fmt_num(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Complete standalone SVG document for a scene.
pub fn svg_document(face: &ClockFace, scene: &Scene) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{vb}">{body}</svg>"#,
        size = face.size_px,
        vb = view_box_attr(face),
        body = scene.to_svg_body()
    )
}
