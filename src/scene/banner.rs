//! The Open Graph banner.
//!
//! A vertical cream-orange-brick gradient, a faint dark-brown overlay of
//! diagonal waves, horizontal sine waves and a circuit motif, then the title
//! and subtitle anchored at the left margin.

use std::f64::consts::TAU;

use crate::config::{BannerConfig, MAX_OVERLAY_OPACITY};
use crate::types::{Colour, Palette};

use super::{
    DrawOp, GradientStop, LinearGradient, PathData, Point, Scene, Shadow, Stroke, TextRun,
};

/// Edge length of one diagonal wave tile.
const WAVE_TILE: f64 = 60.0;

/// Horizontal sampling step for the sine waves.
const SINE_STEP: f64 = 4.0;

/// Inputs to the banner composer.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub subtitle: String,
    pub font_family: String,
    pub margin_left: f64,
    pub title_top: f64,
    pub title_size: f64,
    pub subtitle_size: f64,
    pub subtitle_gap: f64,
    pub orange_stop: f64,
    pub overlay_opacity: f64,
    pub circuit: bool,
    pub title_shadow: bool,
}

impl From<&BannerConfig> for BannerStyle {
    fn from(c: &BannerConfig) -> Self {
        Self {
            width: c.width,
            height: c.height,
            title: c.title.clone(),
            subtitle: c.subtitle.clone(),
            font_family: c.font_family.clone(),
            margin_left: c.margin_left,
            title_top: c.title_top,
            title_size: c.title_size,
            subtitle_size: c.subtitle_size,
            subtitle_gap: c.subtitle_gap,
            orange_stop: c.orange_stop,
            overlay_opacity: c.overlay_opacity,
            circuit: c.circuit,
            title_shadow: c.title_shadow,
        }
    }
}

impl Default for BannerStyle {
    fn default() -> Self {
        (&BannerConfig::default()).into()
    }
}

impl BannerStyle {
    /// Top edge of the subtitle: directly below the title's line box.
    pub fn subtitle_top(&self) -> f64 {
        self.title_top + (self.title_size * super::LINE_HEIGHT).ceil() + self.subtitle_gap
    }
}

/// Compose the banner scene.
pub fn compose_banner(style: &BannerStyle, palette: &Palette) -> Scene {
    let mut scene = Scene::new(style.width, style.height);
    let width = style.width as f64;
    let height = style.height as f64;

    let gradient = LinearGradient::vertical(
        height,
        vec![
            GradientStop {
                offset: 0.0,
                colour: palette.cream,
            },
            GradientStop {
                offset: style.orange_stop,
                colour: palette.orange,
            },
            GradientStop {
                offset: 1.0,
                colour: palette.brick,
            },
        ],
    );
    scene.push(DrawOp::Fill {
        paint: gradient.into(),
    });

    let mut overlay = vec![diagonal_waves(width, height, palette.dark_brown)];
    overlay.extend(sine_waves(width, height, palette.dark_brown));
    if style.circuit {
        overlay.extend(circuit(width, palette.dark_brown));
    }
    scene.push(DrawOp::Group {
        opacity: style.overlay_opacity.clamp(0.0, MAX_OVERLAY_OPACITY),
        ops: overlay,
    });

    let mut title = TextRun::new(
        style.title.clone(),
        Point::new(style.margin_left, style.title_top),
        style.title_size,
        palette.white,
    )
    .with_family(style.font_family.clone())
    .with_weight(700);
    if style.title_shadow {
        title = title.with_shadow(Shadow {
            colour: Colour::new(0, 0, 0, 64),
            blur: 12.0,
            offset: Point::new(0.0, 4.0),
        });
    }
    scene.push(DrawOp::Text(title));

    let subtitle = TextRun::new(
        style.subtitle.clone(),
        Point::new(style.margin_left, style.subtitle_top()),
        style.subtitle_size,
        palette.cream,
    )
    .with_family(style.font_family.clone())
    .with_weight(400);
    scene.push(DrawOp::Text(subtitle));

    scene
}

/// Repeating `M0,60 C20,40 40,20 60,0` strokes tiled over the canvas.
fn diagonal_waves(width: f64, height: f64, colour: Colour) -> DrawOp {
    let mut path = PathData::new();
    let mut y = 0.0;
    while y < height {
        let mut x = 0.0;
        while x < width {
            path.move_to(x, y + WAVE_TILE).cubic_to(
                Point::new(x + WAVE_TILE / 3.0, y + WAVE_TILE * 2.0 / 3.0),
                Point::new(x + WAVE_TILE * 2.0 / 3.0, y + WAVE_TILE / 3.0),
                Point::new(x + WAVE_TILE, y),
            );
            x += WAVE_TILE;
        }
        y += WAVE_TILE;
    }

    DrawOp::Path {
        path,
        stroke: Stroke { colour, width: 1.0 },
    }
}

/// Three stacked sine waves across the lower part of the canvas.
fn sine_waves(width: f64, height: f64, colour: Colour) -> Vec<DrawOp> {
    const AMPLITUDE: f64 = 22.0;
    const WAVELENGTH: f64 = 160.0;

    let base_y = height - 180.0;
    (0..3)
        .map(|i| {
            let i = i as f64;
            let amplitude = AMPLITUDE - i * 6.0;
            let wavelength = WAVELENGTH - i * 15.0;
            let offset = base_y + i * 28.0;

            let mut path = PathData::new();
            path.move_to(0.0, offset);
            let mut x = 0.0;
            loop {
                x = (x + SINE_STEP).min(width);
                path.line_to(x, offset + (x / wavelength * TAU).sin() * amplitude);
                if x >= width {
                    break;
                }
            }

            DrawOp::Path {
                path,
                stroke: Stroke {
                    colour,
                    width: if i == 0.0 { 3.0 } else { 2.0 },
                },
            }
        })
        .collect()
}

/// A vertical bus on the right with four branches of decreasing length,
/// each ending in a node.
fn circuit(width: f64, colour: Colour) -> Vec<DrawOp> {
    const BRANCHES: [f64; 4] = [60.0, 140.0, 220.0, 280.0];
    const NODE_RADIUS: f64 = 6.0;

    let start = Point::new(width - 360.0, 140.0);
    let stroke = Stroke { colour, width: 2.0 };

    let mut bus = PathData::new();
    bus.move_to(start.x, start.y).line_to(start.x, start.y + 300.0);
    let mut ops = vec![DrawOp::Path { path: bus, stroke }];

    for (i, dy) in BRANCHES.iter().enumerate() {
        let end = Point::new(start.x + 220.0 - i as f64 * 30.0, start.y + dy);
        let mut branch = PathData::new();
        branch.move_to(start.x, end.y).line_to(end.x, end.y);
        ops.push(DrawOp::Path {
            path: branch,
            stroke,
        });
        ops.push(DrawOp::Circle {
            center: end,
            radius: NODE_RADIUS,
            fill: colour,
        });
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Paint, PathSegment};
    use pretty_assertions::assert_eq;

    fn banner() -> Scene {
        compose_banner(&BannerStyle::default(), &Palette::BRAND)
    }

    #[test]
    fn test_canvas_size() {
        let scene = banner();
        assert_eq!((scene.width, scene.height), (1200, 630));
    }

    #[test]
    fn test_gradient_stops() {
        let scene = banner();
        let DrawOp::Fill {
            paint: Paint::Linear { gradient },
        } = &scene.ops()[0]
        else {
            panic!("first op must be the gradient fill");
        };

        let stops: Vec<(f64, Colour)> = gradient.stops.iter().map(|s| (s.offset, s.colour)).collect();
        assert_eq!(
            stops,
            vec![
                (0.0, Palette::BRAND.cream),
                (0.5, Palette::BRAND.orange),
                (1.0, Palette::BRAND.brick),
            ]
        );
        assert_eq!(gradient.end, Point::new(0.0, 630.0));
    }

    #[test]
    fn test_overlay_sits_between_background_and_text() {
        let scene = banner();
        let ops = scene.ops();
        assert_eq!(ops.len(), 4);
        match &ops[1] {
            DrawOp::Group { opacity, ops } => {
                assert!(*opacity <= MAX_OVERLAY_OPACITY);
                assert!((0.12..=0.18).contains(opacity));
                assert!(ops.iter().all(|op| !op.is_text()));
            }
            other => panic!("expected overlay group, got {:?}", other),
        }
        assert!(ops[2].is_text());
        assert!(ops[3].is_text());
    }

    #[test]
    fn test_overlay_opacity_is_clamped() {
        let style = BannerStyle {
            overlay_opacity: 0.9,
            ..Default::default()
        };
        let scene = compose_banner(&style, &Palette::BRAND);
        match &scene.ops()[1] {
            DrawOp::Group { opacity, .. } => assert_eq!(*opacity, MAX_OVERLAY_OPACITY),
            other => panic!("expected overlay group, got {:?}", other),
        }
    }

    #[test]
    fn test_title_anchor_and_subtitle_below() {
        let scene = banner();
        let runs = scene.text_runs();
        let (title, subtitle) = (runs[0], runs[1]);

        assert_eq!(title.position, Point::new(80.0, 170.0));
        assert_eq!(title.font_weight, 700);
        assert_eq!(title.fill, Colour::WHITE);
        assert!(title.shadow.is_some());

        assert_eq!(subtitle.position, Point::new(80.0, 280.0));
        assert_eq!(subtitle.fill, Palette::BRAND.cream);
        assert!(subtitle.font_weight < title.font_weight);
        assert!(subtitle.font_size < title.font_size);

        assert!(subtitle.bounds().y >= title.bounds().bottom());
        assert!(!title.bounds().intersects(&subtitle.bounds()));
    }

    #[test]
    fn test_configured_subtitle_text() {
        let style = BannerStyle {
            subtitle: "Frontend Developer • AI Explorer • Vibe Coder".to_string(),
            ..Default::default()
        };
        let scene = compose_banner(&style, &Palette::BRAND);
        assert_eq!(
            scene.text_runs()[1].text,
            "Frontend Developer • AI Explorer • Vibe Coder"
        );
    }

    #[test]
    fn test_circuit_is_optional() {
        let with = banner();
        let without = compose_banner(
            &BannerStyle {
                circuit: false,
                ..Default::default()
            },
            &Palette::BRAND,
        );

        let count = |scene: &Scene| match &scene.ops()[1] {
            DrawOp::Group { ops, .. } => ops
                .iter()
                .filter(|op| matches!(op, DrawOp::Circle { .. }))
                .count(),
            _ => 0,
        };
        assert_eq!(count(&with), 4);
        assert_eq!(count(&without), 0);
    }

    #[test]
    fn test_circuit_branches_shrink() {
        let ops = circuit(1200.0, Colour::BLACK);
        let ends: Vec<f64> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, .. } => Some(center.x),
                _ => None,
            })
            .collect();
        assert_eq!(ends, vec![1060.0, 1030.0, 1000.0, 970.0]);
    }

    #[test]
    fn test_sine_waves_span_full_width() {
        for op in sine_waves(1200.0, 630.0, Colour::BLACK) {
            let DrawOp::Path { path, .. } = op else {
                panic!("sine wave must be a path");
            };
            match path.segments().last() {
                Some(PathSegment::LineTo { to }) => assert_eq!(to.x, 1200.0),
                other => panic!("unexpected final segment {:?}", other),
            }
        }
    }
}
