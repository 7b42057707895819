//! Text runs and their estimated layout boxes.

use serde::Serialize;

use crate::types::Colour;

use super::{Point, Rect};

/// Line box height as a multiple of the font size.
pub const LINE_HEIGHT: f64 = 1.2;

/// Mean advance width of a glyph as a multiple of the font size. Chosen on
/// the wide side of common sans-serif faces so estimated boxes over-cover.
pub const MEAN_ADVANCE: f64 = 0.6;

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
}

/// Vertical anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextBaseline {
    /// Position is the top of the em box.
    Top,
    /// Position is the middle of the em box.
    Central,
}

/// A soft drop shadow behind a text run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub colour: Colour,
    pub blur: f64,
    pub offset: Point,
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub fill: Colour,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    pub shadow: Option<Shadow>,
}

impl TextRun {
    /// A regular-weight, top-left anchored run.
    pub fn new(text: impl Into<String>, position: Point, font_size: f64, fill: Colour) -> Self {
        Self {
            text: text.into(),
            position,
            font_family: "sans-serif".to_string(),
            font_size,
            font_weight: 400,
            fill,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Top,
            shadow: None,
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor, baseline: TextBaseline) -> Self {
        self.anchor = anchor;
        self.baseline = baseline;
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn line_height(&self) -> f64 {
        (self.font_size * LINE_HEIGHT).ceil()
    }

    pub fn estimated_width(&self) -> f64 {
        self.text.chars().count() as f64 * self.font_size * MEAN_ADVANCE
    }

    /// Estimated layout box of the run in canvas space.
    pub fn bounds(&self) -> Rect {
        let width = self.estimated_width();
        let height = self.line_height();
        let x = match self.anchor {
            TextAnchor::Start => self.position.x,
            TextAnchor::Middle => self.position.x - width / 2.0,
        };
        let y = match self.baseline {
            TextBaseline::Top => self.position.y,
            TextBaseline::Central => self.position.y - height / 2.0,
        };
        Rect::new(x, y, width, height)
    }

    /// WCAG "large text": at least 24px, or 18.66px when bold.
    pub fn is_large(&self) -> bool {
        self.font_size >= 24.0 || (self.font_weight >= 700 && self.font_size >= 18.66)
    }
}
