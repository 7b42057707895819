//! The hexagon mark: logo and favicon artwork.
//!
//! Every measurement is derived from the canvas size so the mark scales
//! uniformly from 32px favicons up to the 500px logo.

use crate::config::MarkConfig;
use crate::types::Palette;

use super::{
    hexagon_vertices, DrawOp, Point, Scene, Stroke, TextAnchor, TextBaseline, TextRun,
};

/// Size-derived measurements of the mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkMetrics {
    pub size: u32,
    pub radius: f64,
    pub stroke_width: f64,
    pub font_size: f64,
    /// Downward nudge of the initials from the exact centre.
    pub text_offset: f64,
}

impl MarkMetrics {
    pub fn for_size(size: u32) -> Self {
        let s = size as f64;
        Self {
            size,
            radius: (s * 0.33).floor(),
            stroke_width: (s * 0.018).floor().max(2.0),
            font_size: (s * 0.28).floor(),
            text_offset: (s * 0.01).floor(),
        }
    }

    pub fn center(&self) -> Point {
        let half = self.size as f64 / 2.0;
        Point::new(half, half)
    }
}

/// Inputs to the mark composer that do not depend on size.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkStyle {
    pub initials: String,
    pub font_family: String,
}

impl From<&MarkConfig> for MarkStyle {
    fn from(config: &MarkConfig) -> Self {
        Self {
            initials: config.initials.clone(),
            font_family: config.font_family.clone(),
        }
    }
}

impl Default for MarkStyle {
    fn default() -> Self {
        (&MarkConfig::default()).into()
    }
}

/// Compose the mark on a `size`×`size` canvas.
///
/// Layers: cream background, brick hexagon with an orange outline, cream
/// bold initials centred as a single run.
pub fn compose_mark(size: u32, style: &MarkStyle, palette: &Palette) -> Scene {
    let metrics = MarkMetrics::for_size(size);
    let center = metrics.center();

    let mut scene = Scene::new(size, size);

    scene.push(DrawOp::Fill {
        paint: palette.cream.into(),
    });

    scene.push(DrawOp::Polygon {
        points: hexagon_vertices(center, metrics.radius).to_vec(),
        fill: Some(palette.brick.into()),
        stroke: Some(Stroke {
            colour: palette.orange,
            width: metrics.stroke_width,
        }),
    });

    let initials = TextRun::new(
        style.initials.clone(),
        Point::new(center.x, center.y + metrics.text_offset),
        metrics.font_size,
        palette.cream,
    )
    .with_family(style.font_family.clone())
    .with_weight(700)
    .with_anchor(TextAnchor::Middle, TextBaseline::Central);

    scene.push(DrawOp::Text(initials));
    scene
}
