//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::GlyphStyle;

/// Turn a dumped PBM display frame into a test display frame literal
#[derive(Parser, Debug)]
#[command(name = "pbm2frame")]
#[command(version, about = "Convert a PBM display frame dump into test frame code", long_about = None)]
#[command(after_help = "EXAMPLES:
    pbm2frame -i frame00042.pbm -n testFrameMainScreen
    pbm2frame -i frame00042.pbm -n testFrame --glyphs ascii >> frames.kt")]
pub struct Args {
    /// Filename of PBM file to read from
    #[arg(short = 'i', long)]
    pub input_pbm: PathBuf,

    /// Variable name for the generated test display frame
    #[arg(short = 'n', long)]
    pub test_frame_varname: String,

    /// Glyphs for set/unset pixels (overrides the config file)
    #[arg(long)]
    pub glyphs: Option<GlyphStyle>,

    /// Keyword in front of the variable name (default: val)
    #[arg(long)]
    pub declaration: Option<String>,

    /// Function the row array is passed to (default: makeDisplayFrame)
    #[arg(long)]
    pub constructor: Option<String>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}
