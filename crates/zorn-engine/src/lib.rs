//! Zorn Painter Engine
//!
//! This crate turns a list of played notes into a stream of painterly draw
//! intents, one frame at a time. The engine is fully deterministic: the same
//! notes, configuration, and seed produce the same intents for every frame,
//! on every run and on every thread.
//!
//! # Features
//!
//! - **Analysis**: dynamics profile, melodic contour, interval and rhythm bands
//! - **Techniques**: impasto, glazing, wet-on-wet, dry brush, dripping,
//!   splatter, craquelure, plus per-note shapes for legato, staccato, bend,
//!   slide and vibrato
//! - **Bristle brush**: chain-physics oil brush as an alternative base stroke
//! - **Canvas wash**: multi-octave noise grain over a raw linen ground
//!
//! # Example
//!
//! ```
//! use zorn_engine::Renderer;
//! use zorn_spec::{Note, RenderConfig};
//!
//! let notes = vec![
//!     Note::new(60, 0.0, 0.5, 0.8),
//!     Note::new(62, 0.5, 0.5, 0.6),
//! ];
//! let config = RenderConfig { width: 640, height: 360, ..RenderConfig::default() };
//!
//! let mut renderer = Renderer::new(notes, &config).unwrap();
//! let frame = renderer.render_frame(20);
//! assert!(!frame.intents.is_empty());
//! ```
//!
//! # Determinism
//!
//! - All stochastic choices in a frame draw from one LCG stream that is
//!   rewound to the run seed at the start of the frame
//! - Noise sampling is pure and never advances the stream
//! - The noise permutation table is derived from the run seed through a
//!   versioned BLAKE3 sub-seed

pub mod analysis;
pub mod brush;
pub mod color;
pub mod compositor;
pub mod error;
pub mod intent;
pub mod noise;
pub mod rng;
pub mod strokes;
pub mod technique;

pub use analysis::{Contour, DynamicsProfile, MusicalAnalysis, NoteFeatures};
pub use brush::{Bristle, OilBrush};
pub use color::{palette_color, PaintColor};
pub use compositor::{growth_factor, total_frames, Frame, Renderer};
pub use error::EngineError;
pub use intent::{BlendMode, DrawIntent, LineCap, Point, Rgba, Shape, TechniqueKind};
pub use noise::{CanvasWash, GradientNoise, Noise2D};
pub use rng::RngState;
pub use strokes::Painter;
pub use technique::{paint_note, Layout, NoteContext};
