//! `brandmark scene`: print a composed scene as SVG or JSON.

use std::io::Write;

use clap::{Args, ValueEnum};

use crate::error::{BrandError, Result};
use crate::render::to_svg;
use crate::scene::{compose_banner, compose_mark, BannerStyle, MarkStyle, Scene};

use super::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneTarget {
    /// The hexagon mark
    Mark,
    /// The Open Graph banner
    Og,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SceneFormat {
    #[default]
    Svg,
    Json,
}

/// Print a scene description without rendering it
#[derive(Args, Debug)]
pub struct SceneArgs {
    /// Which scene to compose
    #[arg(value_enum)]
    pub target: SceneTarget,

    /// Canvas size for the mark (defaults to mark.logo_size)
    #[arg(long)]
    pub size: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = SceneFormat::Svg)]
    pub format: SceneFormat,
}

pub fn run(args: SceneArgs, ctx: &Context) -> Result<()> {
    let text = render_scene(&args, ctx)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    Ok(())
}

/// Compose the requested scene and serialize it.
pub fn render_scene(args: &SceneArgs, ctx: &Context) -> Result<String> {
    let scene = compose(args, ctx)?;
    match args.format {
        SceneFormat::Svg => Ok(to_svg(&scene)),
        SceneFormat::Json => serde_json::to_string_pretty(&scene).map_err(|e| BrandError::Encode {
            message: format!("Failed to serialize scene: {}", e),
        }),
    }
}

fn compose(args: &SceneArgs, ctx: &Context) -> Result<Scene> {
    let config = &ctx.config;
    match args.target {
        SceneTarget::Mark => {
            let size = args.size.unwrap_or(config.mark.logo_size);
            if size < 2 {
                return Err(BrandError::Config {
                    message: format!("mark size {} is too small", size),
                    help: Some("Use --size 2 or more".to_string()),
                });
            }
            Ok(compose_mark(size, &MarkStyle::from(&config.mark), &config.palette))
        }
        SceneTarget::Og => Ok(compose_banner(
            &BannerStyle::from(&config.banner),
            &config.palette,
        )),
    }
}
