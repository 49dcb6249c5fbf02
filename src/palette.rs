use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use super::color::*;
use super::error::PaletteError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteConfig {
    pub count: usize,
    pub saturation: f64,
    pub value: f64,
}

impl Default for PaletteConfig {
    fn default() -> PaletteConfig {
        PaletteConfig {
            count: 10000,
            saturation: 0.9,
            value: 1.0,
        }
    }
}

impl PaletteConfig {
    /// Size in bytes of the packed output, saturating at `usize::MAX`.
    pub fn byte_len(&self) -> usize {
        self.count.saturating_mul(3)
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + use<> {
        colors(*self)
    }

    pub fn generate(&self, sink: impl Write) -> std::io::Result<()> {
        generate(self.count, self.saturation, self.value, sink)
    }

    /// Writes the palette to `path`, creating or truncating it.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), PaletteError> {
        write_file(*self, path)
    }
}

/// Evenly spaced hues `i / count` for `i` in `0 .. count`.
pub fn hues(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| i as f64 / count as f64)
}

pub fn colors(cfg: PaletteConfig) -> impl Iterator<Item = Color> {
    hues(cfg.count).map(move |h| Color::from(Hsv::new(h, cfg.saturation, cfg.value)))
}

/// Writes `count` packed RGB triplets of increasing hue to `sink`.
///
/// No header is written, so the output is exactly `3 * count` bytes. The
/// sink is not flushed; callers that buffer should flush afterwards.
pub fn generate(
    count: usize,
    saturation: f64,
    value: f64,
    mut sink: impl Write,
) -> std::io::Result<()> {
    let cfg = PaletteConfig { count, saturation, value };
    for color in colors(cfg) {
        sink.write_all(&color.to_bytes())?;
    }
    Ok(())
}

pub fn write_file(cfg: PaletteConfig, path: impl AsRef<Path>) -> Result<(), PaletteError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PaletteError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("writing {} bytes to '{}'", cfg.byte_len(), path.display());

    write_buffered(cfg, file)?;

    log::info!("wrote {} colors to '{}'", cfg.count, path.display());
    Ok(())
}

/// Generates through a `BufWriter` and flushes it, so a failing final flush
/// is reported instead of being dropped.
pub fn write_buffered(cfg: PaletteConfig, sink: impl Write) -> Result<(), PaletteError> {
    let mut writer = BufWriter::new(sink);
    cfg.generate(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// A packed palette loaded back into memory, as consumed by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Trailing bytes that do not form a whole triplet are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Palette {
        let colors = bytes
            .chunks_exact(3)
            .map(|c| Color::from([c[0], c[1], c[2]]))
            .collect();
        Palette { colors }
    }

    pub fn read(mut reader: impl Read) -> std::io::Result<Palette> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Palette::from_bytes(&bytes))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Palette, PaletteError> {
        let path = path.as_ref();
        let read_err = |source| PaletteError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;
        Palette::read(file).map_err(read_err)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Color> {
        self.colors.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Picks the color for an iteration count, wrapping around the palette.
    pub fn sample_cyclic(&self, j: usize) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[j % self.colors.len()])
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Palette {
        Palette { colors: iter.into_iter().collect() }
    }
}
