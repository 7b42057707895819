pub mod all;
pub mod check;
pub mod completions;
pub mod mark;
pub mod og;
pub mod optimize;
pub mod scene;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::BrandConfig;
use crate::error::{BrandError, Result};
use crate::output::Printer;
use crate::render::SvgRenderer;
use crate::validation::{print_diagnostics, ValidationResult};

/// brandmark - Brand image generator and web asset optimizer
#[derive(Parser, Debug)]
#[command(name = "brandmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to brand.yaml in the current directory, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Assets directory, overriding `output` from the config
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate logo.png, favicon.png and favicon.ico
    Mark,

    /// Generate the Open Graph banner (og-image.png)
    Og,

    /// Generate the mark and the banner
    All,

    /// Write WebP and minified variants of every image in the assets directory
    Optimize(optimize::OptimizeArgs),

    /// Print a scene description without rendering it
    Scene(scene::SceneArgs),

    /// Check the mark and banner layouts
    Check,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Resolved configuration shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: BrandConfig,
    pub out_dir: PathBuf,
}

impl Context {
    /// Load the config and resolve the assets directory against `base`.
    pub fn load(config: Option<&Path>, out: Option<&Path>, base: &Path) -> Result<Self> {
        let config = BrandConfig::discover(config, base)?;
        let out_dir = match out {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => base.join(dir),
            None => config.output_dir(base),
        };
        Ok(Self { config, out_dir })
    }

    /// Load relative to the current working directory.
    pub fn from_cwd(config: Option<&Path>, out: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| BrandError::Setup {
            message: format!("Cannot determine the current directory: {}", e),
            help: None,
        })?;
        Self::load(config, out, &cwd)
    }

    pub fn renderer(&self) -> SvgRenderer {
        SvgRenderer::new(self.config.fonts_dir.as_deref())
    }
}

/// Print layout diagnostics; errors abort, warnings do not.
pub fn require_valid(result: &ValidationResult, printer: &Printer) -> Result<()> {
    print_diagnostics(result, printer);
    if result.has_errors() {
        return Err(BrandError::Validation {
            message: format!("{} layout error(s)", result.error_count()),
            help: Some("Run `brandmark check` after adjusting the config".to_string()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["brandmark", "mark", "--out", "dist", "--config", "b.yaml"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Mark));
        assert_eq!(cli.out, Some(PathBuf::from("dist")));
        assert_eq!(cli.config, Some(PathBuf::from("b.yaml")));
    }

    #[test]
    fn test_context_defaults() {
        let dir = tempdir().unwrap();
        let ctx = Context::load(None, None, dir.path()).unwrap();
        assert_eq!(ctx.out_dir, dir.path().join("public"));
        assert_eq!(ctx.config.mark.initials, "VS");
    }

    #[test]
    fn test_context_reads_brand_yaml_and_out_override() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("brand.yaml"),
            "output: static\nmark:\n  initials: AB\n",
        )
        .unwrap();

        let ctx = Context::load(None, None, dir.path()).unwrap();
        assert_eq!(ctx.out_dir, dir.path().join("static"));
        assert_eq!(ctx.config.mark.initials, "AB");

        let ctx = Context::load(None, Some(Path::new("dist")), dir.path()).unwrap();
        assert_eq!(ctx.out_dir, dir.path().join("dist"));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempdir().unwrap();
        let err = Context::load(Some(&dir.path().join("nope.yaml")), None, dir.path())
            .unwrap_err();
        assert!(matches!(err, BrandError::Io { .. }));
    }
}
