//! Run-time configuration assembled from arguments.

use std::path::PathBuf;

use gridroute_core::Coord;
use gridroute_io::Renderer;

use crate::args::{Format, SolveArgs};

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    File(PathBuf),
    /// Ask for a file name and look it up in this folder.
    Prompt { dir: PathBuf },
}

/// Everything a `solve` run needs.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub source: GridSource,
    /// Fixed endpoints; prompted for when `None`.
    pub endpoints: Option<(Coord, Coord)>,
    pub renderer: Renderer,
    pub format: Format,
}

impl From<SolveArgs> for SolveConfig {
    fn from(args: SolveArgs) -> Self {
        let source = match args.grid {
            Some(path) => GridSource::File(path),
            None => GridSource::Prompt { dir: args.grid_dir },
        };
        Self {
            source,
            endpoints: args.start.zip(args.goal),
            renderer: Renderer::new(args.glyphs.into()).with_color(args.color),
            format: args.format,
        }
    }
}
