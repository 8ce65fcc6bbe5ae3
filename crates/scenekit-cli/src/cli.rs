// Imports
use crate::{measure, run};
use clap::Parser;
use scenekit_compose::geometry::points::{self, TriangleOrientation};
use scenekit_compose::Point;
use std::path::PathBuf;

///    scenekit-cli{n}{n}
///    Measures preset polygons and runs scene files without a window.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Measures a preset polygon: its area, its perimeter and whether it intersects itself.
    Measure {
        #[command(subcommand)]
        preset: Preset,
    },
    /// Runs a scene file for a number of frames and prints the final state as JSON.
    Run {
        /// The scene file.
        scene_file: PathBuf,
        /// The number of frames to run.
        #[arg(short = 'n', long, default_value_t = 60)]
        frames: u64,
    },
}

#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq)]
pub(crate) enum Preset {
    /// An axis-aligned rectangle.
    Rectangle { width: f64, height: f64 },
    /// A rhombus touching the middle of every side of its box.
    Rhombus { width: f64, height: f64 },
    /// A plus sign.
    Plus {
        width: f64,
        height: f64,
        x_thickness: f64,
        y_thickness: f64,
    },
    /// A regular polygon around the origin.
    RegularPolygon { radius: f64, vertices: usize },
    /// An isosceles triangle.
    Triangle {
        width: f64,
        height: f64,
        /// The direction the apex points to.
        #[arg(long, value_enum, default_value_t = TriangleOrientation::Up)]
        orientation: TriangleOrientation,
    },
    /// A star around the origin.
    Star {
        outer_radius: f64,
        inner_radius: f64,
        outer_points: usize,
    },
    /// The edges of a regular polygon, connecting every second vertex.
    Pentagram { radius: f64 },
}

impl Preset {
    pub(crate) fn points(&self) -> Vec<Point> {
        match *self {
            Self::Rectangle { width, height } => points::rectangle(width, height),
            Self::Rhombus { width, height } => points::rhombus(width, height),
            Self::Plus {
                width,
                height,
                x_thickness,
                y_thickness,
            } => points::plus(width, height, x_thickness, y_thickness),
            Self::RegularPolygon { radius, vertices } => points::regular_polygon(radius, vertices),
            Self::Triangle {
                width,
                height,
                orientation,
            } => points::triangle(width, height, orientation),
            Self::Star {
                outer_radius,
                inner_radius,
                outer_points,
            } => points::star(outer_radius, inner_radius, outer_points),
            Self::Pentagram { radius } => {
                let vertices = points::regular_polygon(radius, 5);
                (0..5).map(|i| vertices[(i * 2) % 5]).collect()
            }
        }
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Measure { preset } => measure::run_measure(preset)?,
        Command::Run { scene_file, frames } => run::run_scene(&scene_file, frames)?,
    }

    Ok(())
}
