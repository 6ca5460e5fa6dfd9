//! CLI command implementations

pub mod hypotheses;
pub mod profile;
pub mod session;
pub mod year;

use clap::Args;
use ohaeng_types::{Element, ElementVector};

/// Per-element weight adjustments (recommended range -2..=2)
#[derive(Args, Debug, Clone, Default)]
pub struct AdjustmentArgs {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub wood: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub fire: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub earth: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub metal: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub water: f64,
}

impl AdjustmentArgs {
    pub fn to_vector(&self) -> ElementVector {
        ElementVector::zero()
            .with(Element::Wood, self.wood)
            .with(Element::Fire, self.fire)
            .with(Element::Earth, self.earth)
            .with(Element::Metal, self.metal)
            .with(Element::Water, self.water)
    }
}

/// Format a probability or weight as a one-decimal percentage.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
