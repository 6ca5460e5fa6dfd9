#![deny(unsafe_code)]
//! # ohaeng-session
//!
//! Owns the mutable side of an assessment. A [`Session`] holds the
//! [`Profile`], the [`YearRange`] being asked about, and the response log;
//! every call to [`Session::assess`] recomputes the full pipeline from it.
//!
//! - [`birth`]: `YYYYMMDD` birth date input
//! - [`report`]: reference profiles, seasonal element, balance, consistency
//! - [`export`]: CSV and JSON rows

pub mod birth;
pub mod error;
pub mod export;
pub mod report;
pub mod session;

pub use birth::parse_birth_date;
pub use error::{SessionError, SessionResult};
pub use export::{export_rows, to_csv, to_json, ExportRow};
pub use report::{BalanceReport, Consistency, Report};
pub use session::{Assessment, Profile, Session, YearRange};
