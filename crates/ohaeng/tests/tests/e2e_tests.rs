#[path = "e2e/session_flow.rs"]
mod session_flow;

#[path = "e2e/export.rs"]
mod export;
