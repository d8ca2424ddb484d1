//! tile-remap - Repack a 4×4 road sprite sheet into a compact 3×2 sheet

use clap::Parser;
use image::GenericImageView;
use spritetools::remap::{self, Remapper};
use spritetools::{MappingTable, SpriteToolsError, TileGrid};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tile-remap", about = "Repack sprite sheet tiles into a smaller sheet")]
struct Args {
    /// Source sprite sheet
    #[arg(short, long, default_value = "assets/road_tiles.png")]
    input: PathBuf,
    /// Output PNG (overwritten if present)
    #[arg(short, long, default_value = "assets/road_tiles_optimized.png")]
    output: PathBuf,
    /// JSON mapping table; the built-in road layout when omitted
    #[arg(short, long)]
    mapping: Option<PathBuf>,
    /// Source grid columns
    #[arg(long, default_value = "4")]
    cols: u32,
    /// Source grid rows
    #[arg(long, default_value = "4")]
    rows: u32,
    /// Fail on uneven source dimensions or colliding destinations
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), SpriteToolsError> {
    env_logger::init();
    let args = Args::parse();

    let table = match &args.mapping {
        Some(path) => MappingTable::load(path)?,
        None => MappingTable::road_tiles(),
    };
    let remapper = Remapper::new(table).with_grid(args.cols, args.rows).strict(args.strict);

    let source = match remap::load_source(&args.input) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error loading image: {}", e);
            std::process::exit(1);
        }
    };

    let (width, height) = source.dimensions();
    let (tile_w, tile_h) = TileGrid::new(width, height, args.cols, args.rows).tile_size();
    println!("Source size: {}x{}, Tile size: {}x{}", width, height, tile_w, tile_h);

    let out = remapper.remap(&source)?;
    out.save(&args.output)?;
    println!("Saved optimized image to {}", args.output.display());
    Ok(())
}
