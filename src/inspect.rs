//! Corner color inspection over a directory of sprite sheets.

use crate::{Result, SpriteToolsError};
use image::Rgb;
use std::fmt;
use std::path::Path;

const NAME_WIDTH: usize = 30;
const COLOR_WIDTH: usize = 15;
const RULE_WIDTH: usize = 50;

/// Top-left pixel after forcing RGB, so alpha is dropped rather than blended.
pub fn corner_color(path: impl AsRef<Path>) -> Result<Rgb<u8>> {
    let rgb = image::open(path)?.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(SpriteToolsError::EmptyImage { width: rgb.width(), height: rgb.height() });
    }
    Ok(*rgb.get_pixel(0, 0))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorReading {
    Color(Rgb<u8>),
    Failed(String),
}

impl ColorReading {
    pub fn read(path: impl AsRef<Path>) -> Self {
        match corner_color(path) {
            Ok(color) => Self::Color(color),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn color(&self) -> Option<Rgb<u8>> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Failed(_) => None,
        }
    }
}

impl fmt::Display for ColorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Color(Rgb([r, g, b])) => format!("({}, {}, {})", r, g, b),
            Self::Failed(msg) if msg.is_empty() => "unknown error".to_string(),
            Self::Failed(msg) => msg.clone(),
        };
        // pad() so width specifiers apply
        f.pad(&text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorReport {
    pub rows: Vec<(String, ColorReading)>,
}

impl ColorReport {
    /// Reads every file in `dir` whose name ends with `extension`, in listing
    /// order. A bad file becomes a `Failed` row; only listing `dir` can fail.
    pub fn scan(dir: impl AsRef<Path>, extension: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let mut rows = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(extension) {
                continue;
            }
            let reading = ColorReading::read(entry.path());
            log::debug!("{}: {}", name, reading);
            rows.push((name, reading));
        }
        Ok(Self { rows })
    }

    pub fn sort_by_name(&mut self) {
        self.rows.sort_by(|a, b| a.0.cmp(&b.0));
    }

    pub fn failures(&self) -> usize {
        self.rows.iter().filter(|(_, r)| r.color().is_none()).count()
    }

    pub fn render(&self) -> String {
        let mut out = format!("{:<NAME_WIDTH$} | {:<COLOR_WIDTH$}\n", "File", "R, G, B");
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        for (name, reading) in &self.rows {
            out.push_str(&format!("{:<NAME_WIDTH$} | {:<COLOR_WIDTH$}\n", name, reading));
        }
        out
    }
}
