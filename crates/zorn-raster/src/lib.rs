//! Zorn Painter Raster Backend
//!
//! Rasterizes engine frames into RGBA surfaces and writes them as PNG files.
//! Output is byte-identical for the same frame: shapes are hard-edged and
//! sampled at pixel centers, blending is plain floating point, and PNG
//! encoding uses fixed settings.
//!
//! # Example
//!
//! ```
//! use zorn_engine::Renderer;
//! use zorn_raster::{surface_hash, Surface};
//! use zorn_spec::{Note, RenderConfig};
//!
//! let config = RenderConfig { width: 160, height: 90, ..RenderConfig::default() };
//! let mut renderer = Renderer::new(vec![Note::new(60, 0.0, 1.0, 0.7)], &config).unwrap();
//!
//! let frame = renderer.render_frame(15);
//! let surface = Surface::render_frame(&frame, config.width, config.height).unwrap();
//! assert_eq!(surface.to_rgba8().len(), 160 * 90 * 4);
//! println!("{}", surface_hash(&surface));
//! ```

pub mod color;
pub mod coverage;
pub mod png;
pub mod surface;

pub use color::{blend, Pixel};
pub use crate::png::{
    frame_file_name, hash_png, surface_hash, write_frame, write_surface,
    write_surface_to_vec_with_hash, PngConfig, RasterError,
};
pub use surface::Surface;
