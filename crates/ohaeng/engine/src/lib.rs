#![deny(unsafe_code)]
//! # ohaeng-engine
//!
//! The label-inference pipeline, leaf to root:
//!
//! 1. [`cycle`]: year → stem/branch [`YearSymbol`](ohaeng_types::YearSymbol)
//! 2. [`projector`]: symbol + adjustments → normalized element distribution
//! 3. [`inference`]: distribution + polarity → axis scores → prior candidates
//! 4. [`hypothesis`]: BLAKE3-seeded yearly topic draws
//! 5. [`posterior`]: log-odds update from responses → 16-way ranking
//!
//! [`Engine`] binds the stages to one [`EngineConfig`]. All functions are
//! total and synchronous.

pub mod config;
pub mod cycle;
pub mod hypothesis;
pub mod inference;
pub mod pipeline;
pub mod posterior;
pub mod projector;

pub use config::EngineConfig;
pub use cycle::{map_year, ANCHOR_YEAR};
pub use hypothesis::{generate, generate_range, seed_for, YearHypotheses};
pub use inference::{axis_scores, infer, infer_with};
pub use pipeline::{Engine, PipelineInput, PipelineOutput};
pub use posterior::{topic_weights, update, update_with, Posterior};
pub use projector::project;
