//! Flat export of a session: one row per recorded response, or a single
//! summary row when nothing has been answered yet.

use crate::session::{Assessment, Session};
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: [&str; 10] = [
    "name",
    "birth_year",
    "year",
    "topic",
    "answer",
    "note",
    "dominant_element",
    "prior_top_code",
    "posterior_top_code",
    "posterior_top_probability",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub name: String,
    pub birth_year: i32,
    pub year: Option<i32>,
    pub topic: Option<String>,
    pub answer: Option<String>,
    pub note: String,
    pub dominant_element: String,
    pub prior_top_code: String,
    pub posterior_top_code: String,
    /// One-decimal percentage, e.g. `41.7%`.
    pub posterior_top_probability: String,
}

impl ExportRow {
    fn fields(&self) -> [String; 10] {
        [
            self.name.clone(),
            self.birth_year.to_string(),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.topic.clone().unwrap_or_default(),
            self.answer.clone().unwrap_or_default(),
            self.note.clone(),
            self.dominant_element.clone(),
            self.prior_top_code.clone(),
            self.posterior_top_code.clone(),
            self.posterior_top_probability.clone(),
        ]
    }
}

pub fn export_rows(session: &Session, assessment: &Assessment) -> Vec<ExportRow> {
    let base = ExportRow {
        name: session.profile.name.clone(),
        birth_year: session.profile.birth_year,
        year: None,
        topic: None,
        answer: None,
        note: String::new(),
        dominant_element: assessment.dominant.as_str().to_string(),
        prior_top_code: assessment
            .prior_top()
            .map(|c| c.code.to_string())
            .unwrap_or_default(),
        posterior_top_code: assessment
            .posterior
            .best()
            .map(|c| c.code.to_string())
            .unwrap_or_default(),
        posterior_top_probability: assessment
            .posterior
            .best()
            .map(|c| c.percent())
            .unwrap_or_default(),
    };

    if session.responses.is_empty() {
        return vec![base];
    }

    session
        .responses
        .iter()
        .map(|(year, topic, record)| ExportRow {
            year: Some(year),
            topic: Some(topic.as_str().to_string()),
            answer: Some(record.answer.as_str().to_string()),
            note: record.note.clone(),
            ..base.clone()
        })
        .collect()
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Comma-delimited text with a header line and CRLF line endings.
pub fn to_csv(rows: &[ExportRow]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push_str("\r\n");
    for row in rows {
        let line: Vec<String> = row.fields().iter().map(|f| csv_field(f)).collect();
        out.push_str(&line.join(","));
        out.push_str("\r\n");
    }
    out
}

pub fn to_json(rows: &[ExportRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Profile, YearRange};
    use ohaeng_engine::Engine;
    use ohaeng_types::{Answer, Topic};

    fn session() -> Session {
        let mut profile = Profile::new(1989);
        profile.name = "Kim, Minji".into();
        Session::new(profile, YearRange::new(2019, 2021).unwrap())
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_summary_row_without_responses() {
        let s = session();
        let a = s.assess(&Engine::default());
        let rows = export_rows(&s, &a);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].year.is_none());
        assert_eq!(rows[0].dominant_element, "fire");
        assert_eq!(rows[0].prior_top_code, "ESFJ");
        assert!(rows[0].posterior_top_probability.ends_with('%'));
    }

    #[test]
    fn test_one_row_per_response() {
        let mut s = session();
        s.record(2020, Topic::Career, Answer::Confirmed, "promotion");
        s.record(2019, Topic::Health, Answer::Denied, "");
        let a = s.assess(&Engine::default());
        let rows = export_rows(&s, &a);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, Some(2019));
        assert_eq!(rows[1].topic.as_deref(), Some("career"));
        assert_eq!(rows[1].answer.as_deref(), Some("confirmed"));
        assert_eq!(rows[1].note, "promotion");
    }

    #[test]
    fn test_csv_layout() {
        let mut s = session();
        s.record(2020, Topic::Family, Answer::Skipped, "");
        let a = s.assess(&Engine::default());
        let csv = to_csv(&export_rows(&s, &a));
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert!(lines[1].starts_with("\"Kim, Minji\",1989,2020,family,skipped,,fire,"));
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_json_records() {
        let s = session();
        let a = s.assess(&Engine::default());
        let json = to_json(&export_rows(&s, &a)).unwrap();
        let back: Vec<ExportRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].name, "Kim, Minji");
    }
}
