//! Deterministic PNG frame writer.
//!
//! Uses fixed compression settings so the same surface always encodes to
//! the same bytes.

use std::io::Write;
use std::path::{Path, PathBuf};

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::surface::Surface;

/// Errors from rasterizing and writing frames.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Keep fixed for reproducible bytes.
    pub compression: Compression,
    /// Row filter. Keep fixed for reproducible bytes.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// File name for frame `index`, zero padded to five digits.
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{:05}.png", index)
}

/// Write a surface to a PNG file.
pub fn write_surface(surface: &Surface, path: &Path, config: &PngConfig) -> Result<(), RasterError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_surface_to_writer(surface, writer, config)
}

/// Write a surface as RGBA PNG to any writer.
pub fn write_surface_to_writer<W: Write>(
    surface: &Surface,
    writer: W,
    config: &PngConfig,
) -> Result<(), RasterError> {
    let mut encoder = Encoder::new(writer, surface.width, surface.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&surface.to_rgba8())?;

    Ok(())
}

/// Write frame `index` into `dir` and return the file path.
pub fn write_frame(
    surface: &Surface,
    dir: &Path,
    index: usize,
    config: &PngConfig,
) -> Result<PathBuf, RasterError> {
    let path = dir.join(frame_file_name(index));
    write_surface(surface, &path, config)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

/// Compute the BLAKE3 hash of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// BLAKE3 hash of the raw 8-bit pixels, independent of PNG settings.
pub fn surface_hash(surface: &Surface) -> String {
    blake3::hash(&surface.to_rgba8()).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn write_surface_to_vec_with_hash(
    surface: &Surface,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), RasterError> {
    let mut data = Vec::new();
    write_surface_to_writer(surface, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
