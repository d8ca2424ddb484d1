use image::{GenericImageView, Rgba, RgbaImage};
use std::process::Command;
use tempfile::TempDir;

const TILE_REMAP: &str = env!("CARGO_BIN_EXE_tile-remap");
const CORNER_COLORS: &str = env!("CARGO_BIN_EXE_corner-colors");

fn write_sheet(dir: &TempDir, name: &str, w: u32, h: u32) -> std::path::PathBuf {
    let path = dir.path().join(name);
    RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255])).save(&path).unwrap();
    path
}

#[test]
fn missing_source_exits_one_and_keeps_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.png");
    std::fs::write(&output, b"previous build").unwrap();

    let run = Command::new(TILE_REMAP)
        .arg("-i")
        .arg(dir.path().join("missing.png"))
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(run.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&run.stderr).contains("Error loading image"));
    assert_eq!(std::fs::read(&output).unwrap(), b"previous build");
}

#[test]
fn out_of_grid_mapping_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_sheet(&dir, "sheet.png", 8, 8);
    let output = dir.path().join("out.png");
    let mapping = dir.path().join("layout.json");
    std::fs::write(&mapping, r#"[{"src": [0, 0], "dst": [0, 0]}, {"src": [7, 0], "dst": [1, 0]}]"#).unwrap();

    let run = Command::new(TILE_REMAP)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-m")
        .arg(&mapping)
        .output()
        .unwrap();

    assert!(!run.status.success());
    assert!(!output.exists());
    // sizes are reported before the table is checked
    assert!(String::from_utf8_lossy(&run.stdout).contains("Source size: 8x8, Tile size: 2x2"));
}

#[test]
fn remap_writes_compact_sheet() {
    let dir = TempDir::new().unwrap();
    let input = write_sheet(&dir, "road_tiles.png", 80, 60);
    let output = dir.path().join("road_tiles_optimized.png");

    let run = Command::new(TILE_REMAP).arg("-i").arg(&input).arg("-o").arg(&output).output().unwrap();

    assert!(run.status.success());
    let stdout = String::from_utf8_lossy(&run.stdout);
    assert!(stdout.contains("Source size: 80x60, Tile size: 20x15"));
    assert!(stdout.contains("Saved optimized image to"));
    assert_eq!(image::open(&output).unwrap().dimensions(), (60, 30));
}

#[test]
fn corner_colors_succeeds_with_bad_files() {
    let dir = TempDir::new().unwrap();
    write_sheet(&dir, "ok.png", 2, 2);
    std::fs::write(dir.path().join("broken.png"), b"nope").unwrap();

    let run = Command::new(CORNER_COLORS).arg("-d").arg(dir.path()).arg("-s").output().unwrap();

    assert!(run.status.success());
    let stdout = String::from_utf8_lossy(&run.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("broken.png"));
    assert_eq!(lines[3], format!("{:<30} | {:<15}", "ok.png", "(0, 0, 0)"));
}
