#![deny(unsafe_code)]
//! # ohaeng-types
//!
//! Shared vocabulary for the ohaeng inference pipeline:
//!
//! - **Elements**: [`Element`], [`ElementVector`], [`ElementDistribution`]
//! - **Calendar**: [`Stem`] (10-cycle), [`Branch`] (12-cycle), [`Polarity`], [`YearSymbol`]
//! - **Axes**: [`Axis`], [`Pole`], [`AxisScores`], [`AxisProbabilities`], [`TypeCode`]
//! - **Responses**: [`Topic`], [`Answer`], [`ResponseRecord`], [`ResponseLog`]
//! - **Results**: [`LabelCandidate`], [`PosteriorCandidate`]

pub mod axis;
pub mod calendar;
pub mod candidate;
pub mod element;
pub mod error;
pub mod topic;

pub use axis::{Axis, AxisProbabilities, AxisScores, Pole, TypeCode};
pub use calendar::{Branch, Polarity, Stem, YearSymbol};
pub use candidate::{LabelCandidate, PosteriorCandidate};
pub use element::{Element, ElementDistribution, ElementVector};
pub use error::OhaengError;
pub use topic::{Answer, RawResponse, ResponseEntry, ResponseLog, ResponseRecord, Topic};
