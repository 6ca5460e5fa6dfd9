//! End-to-end test: exported rows agree with the assessment they came from.

use ohaeng_engine::Engine;
use ohaeng_session::export::CSV_HEADER;
use ohaeng_session::{export_rows, to_csv, to_json, ExportRow, Profile, Session, YearRange};
use ohaeng_types::{Answer, Topic};

fn answered_session() -> Session {
    let mut profile = Profile::new(1992);
    profile.name = "Park \"PJ\" Jun".into();
    let mut session = Session::new(profile, YearRange::new(2019, 2021).unwrap());
    session.record(2019, Topic::Health, Answer::Confirmed, "knee surgery, rehab");
    session.record(2020, Topic::Finance, Answer::Denied, "");
    session.record(2021, Topic::Family, Answer::Skipped, "line one\nline two");
    session
}

#[test]
fn rows_carry_assessment_summary() {
    let engine = Engine::default();
    let session = answered_session();
    let assessment = session.assess(&engine);
    let rows = export_rows(&session, &assessment);

    assert_eq!(rows.len(), 3);
    let best = assessment.posterior.best().unwrap();
    for row in &rows {
        assert_eq!(row.birth_year, 1992);
        assert_eq!(row.dominant_element, assessment.dominant.as_str());
        assert_eq!(row.posterior_top_code, best.code.to_string());
        assert_eq!(row.posterior_top_probability, best.percent());
        assert_eq!(
            row.prior_top_code,
            assessment.prior_candidates[0].code.to_string()
        );
    }
}

#[test]
fn csv_quotes_awkward_fields() {
    let engine = Engine::default();
    let session = answered_session();
    let csv = to_csv(&export_rows(&session, &session.assess(&engine)));

    assert!(csv.starts_with(&CSV_HEADER.join(",")));
    assert!(csv.contains("\"Park \"\"PJ\"\" Jun\""));
    assert!(csv.contains("\"knee surgery, rehab\""));
    assert!(csv.contains("\"line one\nline two\""));
    // Header plus three records, each CRLF-terminated.
    assert_eq!(csv.matches("\r\n").count(), 4);
}

#[test]
fn json_export_round_trips_rows() {
    let engine = Engine::default();
    let session = answered_session();
    let rows = export_rows(&session, &session.assess(&engine));
    let json = to_json(&rows).unwrap();
    let back: Vec<ExportRow> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rows);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[1]["topic"], "finance");
    assert_eq!(value[1]["answer"], "denied");
}
