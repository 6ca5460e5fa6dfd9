#[path = "property/cycle.rs"]
mod cycle;

#[path = "property/projection.rs"]
mod projection;

#[path = "property/hypotheses.rs"]
mod hypotheses;

#[path = "property/inference.rs"]
mod inference;

#[path = "property/posterior.rs"]
mod posterior;
