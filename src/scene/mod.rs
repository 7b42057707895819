//! Backend-independent scene description.
//!
//! A `Scene` is a canvas size plus an ordered list of draw operations,
//! painted back to front. Composers in this module build the brand mark
//! and the Open Graph banner; rendering backends in `crate::render` turn a
//! scene into pixels.

mod banner;
mod geometry;
mod mark;
mod text;

use serde::Serialize;

use crate::types::Colour;

pub use banner::{compose_banner, BannerStyle};
pub use geometry::{hexagon_vertices, polygon_contains, Point, Rect};
pub use mark::{compose_mark, MarkMetrics, MarkStyle};
pub use text::{Shadow, TextAnchor, TextBaseline, TextRun, LINE_HEIGHT, MEAN_ADVANCE};

/// A colour stop in a gradient, `offset` in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub colour: Colour,
}

/// A linear gradient between two canvas-space points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// A top-to-bottom gradient spanning `height` pixels.
    pub fn vertical(height: f64, stops: Vec<GradientStop>) -> Self {
        Self {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, height),
            stops,
        }
    }

    /// Colour of the gradient at a canvas point (pad spread).
    pub fn colour_at(&self, p: Point) -> Colour {
        let Some(first) = self.stops.first() else {
            return Colour::TRANSPARENT;
        };

        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0)
        };

        if t <= first.offset {
            return first.colour;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
                return a.colour.mix(b.colour, local as f32);
            }
        }
        self.stops[self.stops.len() - 1].colour
    }
}

/// How an area is filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    Solid { colour: Colour },
    Linear { gradient: LinearGradient },
}

impl Paint {
    pub fn solid(colour: Colour) -> Self {
        Paint::Solid { colour }
    }

    /// Colour of the paint at a canvas point.
    pub fn colour_at(&self, p: Point) -> Colour {
        match self {
            Paint::Solid { colour } => *colour,
            Paint::Linear { gradient } => gradient.colour_at(p),
        }
    }
}

impl From<Colour> for Paint {
    fn from(colour: Colour) -> Self {
        Paint::solid(colour)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Linear { gradient }
    }
}

/// An outline stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub colour: Colour,
    pub width: f64,
}

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo { to: Point },
    LineTo { to: Point },
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// An open or closed vector path.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::MoveTo {
            to: Point::new(x, y),
        });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::LineTo {
            to: Point::new(x, y),
        });
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) -> &mut Self {
        self.segments.push(PathSegment::CubicTo { c1, c2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Fill the whole canvas.
    Fill { paint: Paint },
    /// A closed polygon with optional fill and stroke.
    Polygon {
        points: Vec<Point>,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    /// A stroked, unfilled path.
    Path { path: PathData, stroke: Stroke },
    /// A filled circle.
    Circle {
        center: Point,
        radius: f64,
        fill: Colour,
    },
    Text(TextRun),
    /// Child operations composited together at a group opacity.
    Group { opacity: f64, ops: Vec<DrawOp> },
}

impl DrawOp {
    pub fn is_text(&self) -> bool {
        matches!(self, DrawOp::Text(_))
    }
}

/// A canvas size plus back-to-front draw operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Append an operation on top of everything drawn so far.
    pub fn push(&mut self, op: DrawOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All text runs in paint order, including those nested in groups.
    pub fn text_runs(&self) -> Vec<&TextRun> {
        fn collect<'a>(ops: &'a [DrawOp], out: &mut Vec<&'a TextRun>) {
            for op in ops {
                match op {
                    DrawOp::Text(run) => out.push(run),
                    DrawOp::Group { ops, .. } => collect(ops, out),
                    _ => {}
                }
            }
        }

        let mut runs = Vec::new();
        collect(&self.ops, &mut runs);
        runs
    }

    /// Opaque backdrop colour at a point, ignoring text and translucent
    /// groups.
    pub fn backdrop_at(&self, p: Point) -> Colour {
        let mut colour = Colour::TRANSPARENT;
        for op in &self.ops {
            match op {
                DrawOp::Fill { paint } => colour = paint.colour_at(p),
                DrawOp::Polygon {
                    points,
                    fill: Some(paint),
                    ..
                } if polygon_contains(points, p) => colour = paint.colour_at(p),
                _ => {}
            }
        }
        colour
    }
}
