//! The session context: who is being assessed, which years are asked about,
//! and every answer given so far.

use crate::error::SessionResult;
use crate::report::{self, Report};
use ohaeng_engine::{
    cycle, projector, seed_for, Engine, PipelineInput, Posterior, YearHypotheses,
};
use ohaeng_types::{
    Answer, Element, ElementDistribution, ElementVector, LabelCandidate, OhaengError, RawResponse,
    ResponseLog, ResponseRecord, Topic, TypeCode, YearSymbol,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Static inputs of a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    pub birth_year: i32,
    /// 1..=12 when known; drives the seasonal element of the report.
    #[serde(default)]
    pub birth_month: Option<u32>,
    #[serde(default)]
    pub adjustments: ElementVector,
    /// Self-reported label. Display only; never feeds the inference.
    #[serde(default)]
    pub known_label: Option<TypeCode>,
}

impl Profile {
    pub fn new(birth_year: i32) -> Self {
        Self {
            birth_year,
            ..Default::default()
        }
    }
}

/// Widest range a session may cover. Keeps every pass over the range bounded.
pub const MAX_YEAR_SPAN: i64 = 200;

/// Inclusive range of years hypotheses are asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    start: i32,
    end: i32,
}

#[derive(Deserialize)]
struct RawYearRange {
    start: i32,
    end: i32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = OhaengError;

    fn try_from(raw: RawYearRange) -> Result<Self, Self::Error> {
        YearRange::new(raw.start, raw.end)
    }
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, OhaengError> {
        let span = i64::from(end) - i64::from(start) + 1;
        if span < 1 || span > MAX_YEAR_SPAN {
            return Err(OhaengError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Full assessment of a session at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub symbol: YearSymbol,
    pub distribution: ElementDistribution,
    pub dominant: Element,
    pub prior_candidates: Vec<LabelCandidate>,
    pub posterior: Posterior,
    pub report: Report,
}

impl Assessment {
    pub fn prior_top(&self) -> Option<&LabelCandidate> {
        self.prior_candidates.first()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub profile: Profile,
    pub range: YearRange,
    #[serde(default)]
    pub responses: ResponseLog,
}

impl Session {
    pub fn new(profile: Profile, range: YearRange) -> Self {
        Self {
            profile,
            range,
            responses: ResponseLog::new(),
        }
    }

    /// Record an answer for `(year, topic)`, replacing any earlier one.
    pub fn record(
        &mut self,
        year: i32,
        topic: Topic,
        answer: Answer,
        note: impl Into<String>,
    ) -> Option<ResponseRecord> {
        let previous = self.responses.record(year, topic, answer, note);
        debug!(
            year,
            topic = %topic,
            answer = %answer,
            replaced = previous.is_some(),
            "Response recorded"
        );
        previous
    }

    /// Import untyped responses; returns how many were accepted.
    pub fn import_raw(&mut self, raw: Vec<RawResponse>) -> usize {
        let offered = raw.len();
        let rejected = self.responses.import_raw(raw);
        for item in &rejected {
            debug!(year = item.year, topic = %item.topic, "Skipping response with unknown topic");
        }
        offered - rejected.len()
    }

    /// Drop every recorded answer. The profile and range are kept.
    pub fn reset(&mut self) {
        let dropped = self.responses.len();
        self.responses.clear();
        info!(dropped, "Session responses reset");
    }

    pub fn symbol(&self) -> YearSymbol {
        cycle::map_year(self.profile.birth_year)
    }

    pub fn distribution(&self) -> ElementDistribution {
        projector::project(&self.symbol(), &self.profile.adjustments)
    }

    /// Hypothesis seed, `"{birth_year}-{dominant element}"`.
    pub fn seed(&self) -> String {
        seed_for(self.profile.birth_year, self.distribution().dominant())
    }

    /// Topics drawn for every year of the range.
    pub fn hypotheses(&self, engine: &Engine) -> Vec<YearHypotheses> {
        engine.hypotheses_for_range(&self.seed(), self.range.start, self.range.end)
    }

    /// Drawn topics that have no recorded answer yet. Years with nothing
    /// left are omitted.
    pub fn pending_hypotheses(&self, engine: &Engine) -> Vec<YearHypotheses> {
        self.hypotheses(engine)
            .into_iter()
            .filter_map(|mut h| {
                h.topics
                    .retain(|topic| self.responses.get(h.year, *topic).is_none());
                (!h.topics.is_empty()).then_some(h)
            })
            .collect()
    }

    pub fn assess(&self, engine: &Engine) -> Assessment {
        let output = engine.assess(&PipelineInput {
            birth_year: self.profile.birth_year,
            adjustments: self.profile.adjustments,
            responses: self.responses.clone(),
        });

        let reference_profile = self
            .profile
            .known_label
            .and_then(|code| report::seasonal_profile(&code, self.profile.birth_month));
        // Events are compared against the label's profile when one is known.
        let consistency_reference = reference_profile
            .as_ref()
            .map(ElementVector::strongest)
            .unwrap_or(output.dominant);
        let report = Report {
            seasonal_element: self.profile.birth_month.and_then(report::seasonal_element),
            reference_balance: reference_profile.as_ref().map(report::balance),
            reference_profile,
            distribution_balance: report::balance(&output.distribution.weights),
            consistency: report::consistency(&self.responses, consistency_reference),
        };

        Assessment {
            symbol: output.symbol,
            distribution: output.distribution,
            dominant: output.dominant,
            prior_candidates: output.prior_candidates,
            posterior: output.posterior,
            report,
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SessionResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        debug!(path = %path.display(), responses = self.responses.len(), "Session saved");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), responses = session.responses.len(), "Session loaded");
        Ok(session)
    }
}
