use crate::element::Element;
use crate::error::OhaengError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Life-event categories used for yearly hypotheses, in catalogue order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Career,
    Relationship,
    Relocation,
    Health,
    Finance,
    Family,
    Creativity,
}

impl Topic {
    /// The catalogue. Hypothesis draws index into this order.
    pub const CATALOGUE: [Topic; 7] = [
        Topic::Career,
        Topic::Relationship,
        Topic::Relocation,
        Topic::Health,
        Topic::Finance,
        Topic::Family,
        Topic::Creativity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Relationship => "relationship",
            Self::Relocation => "relocation",
            Self::Health => "health",
            Self::Finance => "finance",
            Self::Family => "family",
            Self::Creativity => "creativity",
        }
    }

    /// Question shown for a given year.
    pub fn prompt(self, year: i32) -> String {
        let what = match self {
            Self::Career => "change jobs or take on a new role",
            Self::Relationship => "start or end an important relationship",
            Self::Relocation => "move house or relocate abroad",
            Self::Health => "deal with a significant health issue",
            Self::Finance => "see a notable change in your finances",
            Self::Family => "go through a major family event",
            Self::Creativity => "launch or publish a creative project",
        };
        format!("In {year}, did you {what}?")
    }

    /// Element the event category is associated with.
    pub fn element(self) -> Element {
        match self {
            Self::Career | Self::Creativity => Element::Wood,
            Self::Relationship => Element::Fire,
            Self::Relocation | Self::Family => Element::Earth,
            Self::Health | Self::Finance => Element::Metal,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Topic {
    type Err = OhaengError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Topic::CATALOGUE
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| OhaengError::UnknownTopic(s.trim().to_string()))
    }
}

/// A yes/no/skip response to a yearly hypothesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Confirmed,
    Denied,
    #[default]
    Skipped,
}

impl Answer {
    /// Parse a free-form token. Anything unrecognized counts as skipped.
    pub fn parse_lenient(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "confirmed" | "confirm" | "yes" | "y" | "true" => Self::Confirmed,
            "denied" | "deny" | "no" | "n" | "false" => Self::Denied,
            _ => Self::Skipped,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Denied => "denied",
            Self::Skipped => "skipped",
        }
    }

    /// Confirmed ↔ denied; skipped stays skipped.
    pub fn inverted(self) -> Self {
        match self {
            Self::Confirmed => Self::Denied,
            Self::Denied => Self::Confirmed,
            Self::Skipped => Self::Skipped,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub answer: Answer,
    #[serde(default)]
    pub note: String,
}

/// Flat form of one response, used for serialization and export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub year: i32,
    pub topic: Topic,
    pub answer: Answer,
    #[serde(default)]
    pub note: String,
}

/// Untyped response as it arrives from a form or file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub year: i32,
    pub topic: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub note: String,
}

/// Response history keyed by `(year, topic)`. Iteration is ordered by year,
/// then catalogue order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ResponseEntry>", into = "Vec<ResponseEntry>")]
pub struct ResponseLog {
    records: BTreeMap<(i32, Topic), ResponseRecord>,
}

impl ResponseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous record for the key.
    pub fn record(
        &mut self,
        year: i32,
        topic: Topic,
        answer: Answer,
        note: impl Into<String>,
    ) -> Option<ResponseRecord> {
        self.records.insert(
            (year, topic),
            ResponseRecord {
                answer,
                note: note.into(),
            },
        )
    }

    pub fn get(&self, year: i32, topic: Topic) -> Option<&ResponseRecord> {
        self.records.get(&(year, topic))
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, Topic, &ResponseRecord)> + '_ {
        self.records.iter().map(|((y, t), r)| (*y, *t, r))
    }

    pub fn entries(&self) -> Vec<ResponseEntry> {
        self.iter()
            .map(|(year, topic, r)| ResponseEntry {
                year,
                topic,
                answer: r.answer,
                note: r.note.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn count(&self, answer: Answer) -> usize {
        self.records.values().filter(|r| r.answer == answer).count()
    }

    /// Import untyped responses. Unknown topics are dropped and returned;
    /// unknown answer tokens become [`Answer::Skipped`].
    pub fn import_raw(&mut self, raw: impl IntoIterator<Item = RawResponse>) -> Vec<RawResponse> {
        let mut rejected = Vec::new();
        for item in raw {
            match item.topic.parse::<Topic>() {
                Ok(topic) => {
                    self.record(
                        item.year,
                        topic,
                        Answer::parse_lenient(&item.answer),
                        item.note,
                    );
                }
                Err(_) => rejected.push(item),
            }
        }
        rejected
    }

    /// Copy of this log with every confirmed/denied answer swapped.
    pub fn inverted(&self) -> Self {
        let mut out = self.clone();
        for record in out.records.values_mut() {
            record.answer = record.answer.inverted();
        }
        out
    }
}

impl From<Vec<ResponseEntry>> for ResponseLog {
    fn from(entries: Vec<ResponseEntry>) -> Self {
        let mut log = ResponseLog::new();
        for e in entries {
            log.record(e.year, e.topic, e.answer, e.note);
        }
        log
    }
}

impl From<ResponseLog> for Vec<ResponseEntry> {
    fn from(log: ResponseLog) -> Self {
        log.entries()
    }
}
