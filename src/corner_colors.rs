//! corner-colors - Print the top-left pixel color of every sprite sheet in a directory

use clap::Parser;
use spritetools::{ColorReport, SpriteToolsError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corner-colors", about = "Report the corner pixel color of each image")]
struct Args {
    /// Directory to scan
    #[arg(short, long, default_value = "assets")]
    dir: PathBuf,
    /// Only files whose name ends with this
    #[arg(short, long, default_value = ".png")]
    ext: String,
    /// Sort rows by filename instead of directory order
    #[arg(short, long)]
    sorted: bool,
}

fn main() -> Result<(), SpriteToolsError> {
    env_logger::init();
    let args = Args::parse();

    let mut report = ColorReport::scan(&args.dir, &args.ext)?;
    if args.sorted {
        report.sort_by_name();
    }
    if report.failures() > 0 {
        log::warn!("{} of {} files could not be read", report.failures(), report.rows.len());
    }

    print!("{}", report.render());
    Ok(())
}
