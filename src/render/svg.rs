//! Scene to SVG serialization.
//!
//! The SVG document is the exchange format between scene composition and
//! the `resvg` rasterizer, and is also written out directly by
//! `brandmark scene --format svg`.

use std::fmt::Write;

use crate::scene::{
    DrawOp, LinearGradient, Paint, PathData, PathSegment, Point, Scene, Shadow, TextAnchor,
    TextBaseline, TextRun,
};
use crate::types::Colour;

/// Serialize a scene into a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let mut writer = SvgWriter::default();
    for op in scene.ops() {
        writer.op(op, 1);
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">",
        w = scene.width,
        h = scene.height
    );
    if !writer.defs.is_empty() {
        out.push_str("  <defs>\n");
        out.push_str(&writer.defs);
        out.push_str("  </defs>\n");
    }
    out.push_str(&writer.body);
    out.push_str("</svg>\n");
    out
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    body: String,
    next_id: usize,
}

impl SvgWriter {
    fn fresh_id(&mut self, prefix: &str) -> String {
        let id = format!("{}{}", prefix, self.next_id);
        self.next_id += 1;
        id
    }

    fn op(&mut self, op: &DrawOp, depth: usize) {
        let indent = "  ".repeat(depth);
        match op {
            DrawOp::Fill { paint } => {
                let fill = self.paint(paint);
                let _ = writeln!(
                    self.body,
                    "{indent}<rect width=\"100%\" height=\"100%\" {fill}/>"
                );
            }
            DrawOp::Polygon {
                points,
                fill,
                stroke,
            } => {
                let points: Vec<String> = points
                    .iter()
                    .map(|p| format!("{},{}", num(p.x), num(p.y)))
                    .collect();
                let fill = match fill {
                    Some(paint) => self.paint(paint),
                    None => "fill=\"none\"".to_string(),
                };
                let stroke = match stroke {
                    Some(s) => format!(
                        " stroke=\"{}\" stroke-width=\"{}\"{}",
                        s.colour.to_rgb_hex(),
                        num(s.width),
                        opacity_attr("stroke-opacity", s.colour)
                    ),
                    None => String::new(),
                };
                let _ = writeln!(
                    self.body,
                    "{indent}<polygon points=\"{}\" {fill}{stroke}/>",
                    points.join(" ")
                );
            }
            DrawOp::Path { path, stroke } => {
                let _ = writeln!(
                    self.body,
                    "{indent}<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                    path_data(path),
                    stroke.colour.to_rgb_hex(),
                    num(stroke.width),
                    opacity_attr("stroke-opacity", stroke.colour)
                );
            }
            DrawOp::Circle {
                center,
                radius,
                fill,
            } => {
                let _ = writeln!(
                    self.body,
                    "{indent}<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{}/>",
                    num(center.x),
                    num(center.y),
                    num(*radius),
                    fill.to_rgb_hex(),
                    opacity_attr("fill-opacity", *fill)
                );
            }
            DrawOp::Text(run) => self.text(run, &indent),
            DrawOp::Group { opacity, ops } => {
                let _ = writeln!(self.body, "{indent}<g opacity=\"{}\">", num(*opacity));
                for child in ops {
                    self.op(child, depth + 1);
                }
                let _ = writeln!(self.body, "{indent}</g>");
            }
        }
    }

    fn paint(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid { colour } => format!(
                "fill=\"{}\"{}",
                colour.to_rgb_hex(),
                opacity_attr("fill-opacity", *colour)
            ),
            Paint::Linear { gradient } => {
                let id = self.fresh_id("gradient");
                self.gradient(&id, gradient);
                format!("fill=\"url(#{id})\"")
            }
        }
    }

    fn gradient(&mut self, id: &str, gradient: &LinearGradient) {
        let _ = writeln!(
            self.defs,
            "    <linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
            num(gradient.start.x),
            num(gradient.start.y),
            num(gradient.end.x),
            num(gradient.end.y)
        );
        for stop in &gradient.stops {
            let _ = writeln!(
                self.defs,
                "      <stop offset=\"{}\" stop-color=\"{}\"{}/>",
                num(stop.offset),
                stop.colour.to_rgb_hex(),
                opacity_attr("stop-opacity", stop.colour)
            );
        }
        self.defs.push_str("    </linearGradient>\n");
    }

    fn shadow_filter(&mut self, shadow: &Shadow) -> String {
        let id = self.fresh_id("shadow");
        let _ = writeln!(
            self.defs,
            "    <filter id=\"{id}\" x=\"-20%\" y=\"-50%\" width=\"140%\" height=\"200%\">\n      <feDropShadow dx=\"{}\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/>\n    </filter>",
            num(shadow.offset.x),
            num(shadow.offset.y),
            num(shadow.blur / 2.0),
            shadow.colour.to_rgb_hex(),
            num(shadow.colour.alpha_f32() as f64)
        );
        id
    }

    fn text(&mut self, run: &TextRun, indent: &str) {
        let anchor = match run.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        };
        let baseline = match run.baseline {
            TextBaseline::Top => "text-before-edge",
            TextBaseline::Central => "central",
        };
        let filter = match &run.shadow {
            Some(shadow) => format!(" filter=\"url(#{})\"", self.shadow_filter(shadow)),
            None => String::new(),
        };

        let _ = writeln!(
            self.body,
            "{indent}<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\"{} text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\"{filter}>{}</text>",
            num(run.position.x),
            num(run.position.y),
            escape(&run.font_family),
            num(run.font_size),
            run.font_weight,
            run.fill.to_rgb_hex(),
            opacity_attr("fill-opacity", run.fill),
            escape(&run.text)
        );
    }
}

fn path_data(path: &PathData) -> String {
    let pt = |p: &Point| format!("{},{}", num(p.x), num(p.y));
    let parts: Vec<String> = path
        .segments()
        .iter()
        .map(|segment| match segment {
            PathSegment::MoveTo { to } => format!("M{}", pt(to)),
            PathSegment::LineTo { to } => format!("L{}", pt(to)),
            PathSegment::CubicTo { c1, c2, to } => {
                format!("C{} {} {}", pt(c1), pt(c2), pt(to))
            }
            PathSegment::Close => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

fn opacity_attr(name: &str, colour: Colour) -> String {
    if colour.is_opaque() {
        String::new()
    } else {
        format!(" {}=\"{}\"", name, num(colour.alpha_f32() as f64))
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{compose_banner, compose_mark, BannerStyle, MarkStyle};
    use crate::types::Palette;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(165.0), "165");
        assert_eq!(num(92.894), "92.89");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(0.0), "0");
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("Frontend Developer & AI Explorer"),
            "Frontend Developer &amp; AI Explorer"
        );
        assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_mark_svg() {
        let svg = to_svg(&compose_mark(500, &MarkStyle::default(), &Palette::BRAND));

        assert!(svg.contains("width=\"500\" height=\"500\" viewBox=\"0 0 500 500\""));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#F5E9E4\"/>"));
        assert!(svg.contains("fill=\"#D4451D\" stroke=\"#FFA046\" stroke-width=\"9\""));
        assert!(svg.contains("font-size=\"140\" font-weight=\"700\""));
        assert!(svg.contains("text-anchor=\"middle\" dominant-baseline=\"central\">VS</text>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_mark_svg_layer_order() {
        let svg = to_svg(&compose_mark(180, &MarkStyle::default(), &Palette::BRAND));
        let rect = svg.find("<rect").unwrap();
        let polygon = svg.find("<polygon").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(rect < polygon && polygon < text);
    }

    #[test]
    fn test_banner_svg_defs_and_escaping() {
        let svg = to_svg(&compose_banner(&BannerStyle::default(), &Palette::BRAND));

        assert!(svg.contains("<linearGradient id=\"gradient0\""));
        assert!(svg.contains("<stop offset=\"0.5\" stop-color=\"#FFA046\"/>"));
        assert!(svg.contains("fill=\"url(#gradient0)\""));
        assert!(svg.contains("<g opacity=\"0.15\">"));
        assert!(svg.contains("<feDropShadow"));
        assert!(svg.contains("filter=\"url(#shadow1)\""));
        assert!(svg.contains("Frontend Developer &amp; AI Explorer"));
        assert!(svg.contains("dominant-baseline=\"text-before-edge\""));

        let group_end = svg.find("</g>").unwrap();
        let title = svg.find("Varun Samiyani").unwrap();
        assert!(group_end < title);
    }

    #[test]
    fn test_svg_is_deterministic() {
        let scene = compose_banner(&BannerStyle::default(), &Palette::BRAND);
        assert_eq!(to_svg(&scene), to_svg(&scene));
    }
}
