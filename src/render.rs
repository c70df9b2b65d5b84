use clock_core::{svg_document, ClockFace, Scene};
use web_sys as web;

/// Rendering surface: an `<svg>` element whose children are replaced
/// wholesale on every frame.
pub struct SvgSurface {
    host: web::Element,
    svg: web::Element,
    frames: u64,
}

impl SvgSurface {
    /// Create the `<svg>` (sized and view-boxed for `face`) inside `root`.
    pub fn mount(
        document: &web::Document,
        root: &web::Element,
        face: &ClockFace,
    ) -> anyhow::Result<Self> {
        let host = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create host: {:?}", e))?;
        _ = host.set_attribute("class", "clock-surface");
        host.set_inner_html(&svg_document(face, &Scene::default()));
        let svg = host
            .first_element_child()
            .ok_or_else(|| anyhow::anyhow!("svg element not created"))?;
        root.append_child(&host)
            .map_err(|e| anyhow::anyhow!("append surface: {:?}", e))?;
        Ok(Self {
            host,
            svg,
            frames: 0,
        })
    }

    pub fn present(&mut self, scene: &Scene) {
        self.svg.set_inner_html(&scene.to_svg_body());
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Drop for SvgSurface {
    fn drop(&mut self) {
        self.host.remove();
    }
}
