//! wf3d - oblique wireframe renderer
//!
//! Renders a wireframe (an OBJ-style file, or the built-in unit cube) to an
//! image file or the terminal, and builds orthonormal bases.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector3;
use std::fs;
use std::path::{Path, PathBuf};
use wf3d_core::config::{DEFAULT_LINE_WIDTH, DEFAULT_TARGET_HEIGHT};
use wf3d_core::{build_basis, read_wireframe, render_with, ObliqueProjection, RenderOptions, WireframeModel};
use wf3d_raster::{load_font, RasterCanvas};
use wf3d_terminal::TerminalApp;

#[derive(Parser)]
#[command(name = "wf3d")]
#[command(about = "Oblique wireframe renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a wireframe to an image file
    Render {
        /// OBJ-style wireframe file (default: unit cube)
        model: Option<PathBuf>,
        /// Output image; the format follows the extension
        #[arg(short, long, default_value = "wireframe.png")]
        output: PathBuf,
        /// Canvas height in pixels
        #[arg(long, default_value_t = DEFAULT_TARGET_HEIGHT)]
        height: u32,
        /// Link stroke width in pixels
        #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
        line_width: u32,
        #[arg(long, value_enum, default_value_t = Projection::Cabinet)]
        projection: Projection,
        /// TrueType/OpenType font for coordinate labels (default: embedded DejaVu Sans Mono)
        #[arg(long)]
        font: Option<PathBuf>,
    },
    /// Show a wireframe in the terminal
    View {
        /// OBJ-style wireframe file (default: unit cube)
        model: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Projection::Cabinet)]
        projection: Projection,
    },
    /// Build a right-handed orthonormal basis and print its matrix
    Basis {
        /// First axis as x,y,z
        #[arg(short = 'x', long, value_parser = parse_vector, allow_hyphen_values = true)]
        x_dir: Vector3<f64>,
        /// Second axis as x,y,z; must be orthogonal to the first
        #[arg(short = 'y', long, value_parser = parse_vector, allow_hyphen_values = true)]
        y_dir: Vector3<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Projection {
    /// Depth at 45 degrees, half length
    Cabinet,
    /// Depth at 45 degrees, full length
    Cavalier,
}

impl From<Projection> for ObliqueProjection {
    fn from(p: Projection) -> Self {
        match p {
            Projection::Cabinet => ObliqueProjection::cabinet(),
            Projection::Cavalier => ObliqueProjection::cavalier(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            model,
            output,
            height,
            line_width,
            projection,
            font,
        } => {
            let model = load_model(model.as_deref())?;
            let options = RenderOptions::new(height, line_width);
            let drawing = render_with(&model, &projection.into(), &options)?;
            let canvas = match font {
                Some(path) => {
                    let font = load_font(&path)
                        .with_context(|| format!("Failed to load font {}", path.display()))?;
                    RasterCanvas::from_drawing_with_font(&drawing, font)
                }
                None => RasterCanvas::from_drawing(&drawing),
            };
            canvas
                .save(&output)
                .with_context(|| format!("Failed to save {}", output.display()))?;
            println!(
                "Rendered {}x{} drawing to {}",
                drawing.width,
                drawing.height,
                output.display()
            );
        }
        Commands::View { model, projection } => {
            let model = load_model(model.as_deref())?;
            TerminalApp::new(model, projection.into()).run()?;
        }
        Commands::Basis { x_dir, y_dir } => {
            let basis = build_basis(x_dir, y_dir)?;
            println!("{}", basis.matrix());
        }
    }

    Ok(())
}

fn load_model(path: Option<&Path>) -> Result<WireframeModel> {
    let Some(path) = path else {
        return Ok(WireframeModel::unit_cube());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read wireframe file {}", path.display()))?;
    let model = read_wireframe(&text)
        .with_context(|| format!("Failed to parse wireframe file {}", path.display()))?;
    log::info!(
        "loaded {} nodes and {} links from {}",
        model.node_count(),
        model.links().len(),
        path.display()
    );
    Ok(model)
}

fn parse_vector(s: &str) -> std::result::Result<Vector3<f64>, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("expected three comma-separated numbers, got '{s}'")),
    }
}
