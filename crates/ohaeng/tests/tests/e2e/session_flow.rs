//! End-to-end test: a session answered year by year, persisted, and assessed.

use ohaeng_engine::{Engine, EngineConfig};
use ohaeng_session::{Profile, Session, YearRange};
use ohaeng_types::{Answer, Element, ElementVector, Topic};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_session() -> Session {
    let mut profile = Profile::new(1989);
    profile.name = "Seo-yeon".into();
    profile.birth_month = Some(8);
    profile.known_label = Some("INTP".parse().unwrap());
    Session::new(profile, YearRange::new(2015, 2022).unwrap())
}

/// Confirm intuitive/perceiving topics, deny structured ones, skip the rest.
fn answer_for(topic: Topic) -> Answer {
    match topic {
        Topic::Creativity | Topic::Relocation => Answer::Confirmed,
        Topic::Career | Topic::Finance => Answer::Denied,
        _ => Answer::Skipped,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn answering_every_pending_question_clears_the_queue() {
    let engine = Engine::default();
    let mut session = new_session();

    let pending = session.pending_hypotheses(&engine);
    assert_eq!(pending.len(), 8);
    assert!(pending.iter().all(|h| h.topics.len() == 3));

    for h in &pending {
        for topic in &h.topics {
            session.record(h.year, *topic, answer_for(*topic), "");
        }
    }

    assert!(session.pending_hypotheses(&engine).is_empty());
    assert_eq!(session.responses.len(), 24);
}

#[test]
fn assessment_survives_save_and_load() {
    let engine = Engine::default();
    let mut session = new_session();
    for h in session.pending_hypotheses(&engine) {
        for topic in h.topics {
            session.record(h.year, topic, answer_for(topic), "from e2e");
        }
    }
    let before = session.assess(&engine);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    session.save(&path).unwrap();
    let loaded = Session::load(&path).unwrap();

    assert_eq!(loaded, session);
    assert_eq!(loaded.assess(&engine), before);
}

#[test]
fn intuitive_answers_push_toward_n_and_p() {
    let engine = Engine::default();
    let mut session = new_session();
    let prior = session.assess(&engine);

    for year in session.range.years() {
        session.record(year, Topic::Creativity, Answer::Confirmed, "");
        session.record(year, Topic::Relocation, Answer::Confirmed, "");
    }
    let after = session.assess(&engine);

    assert!(after.posterior.axis_probabilities.n > prior.posterior.axis_probabilities.n);
    assert!(after.posterior.axis_probabilities.p > prior.posterior.axis_probabilities.p);
    let best = after.posterior.best().unwrap().code.to_string();
    assert_eq!(&best[1..2], "N");
    assert_eq!(&best[3..4], "P");
}

#[test]
fn reset_restores_the_prior() {
    let engine = Engine::default();
    let mut session = new_session();
    let fresh = session.assess(&engine);

    session.record(2016, Topic::Health, Answer::Confirmed, "");
    session.record(2017, Topic::Family, Answer::Denied, "");
    assert_ne!(session.assess(&engine).posterior, fresh.posterior);

    session.reset();
    assert_eq!(session.assess(&engine), fresh);
}

#[test]
fn report_reflects_profile_and_events() {
    let engine = Engine::default();
    let mut session = new_session();
    session.record(2018, Topic::Relationship, Answer::Confirmed, "");
    session.record(2019, Topic::Relationship, Answer::Confirmed, "");

    let a = session.assess(&engine);
    // 1989 splits earth/fire evenly; fire wins the tie.
    assert_eq!(a.dominant, Element::Fire);
    assert_eq!(a.report.seasonal_element, Some(Element::Metal));
    // INTP metal 5 + season bonus 2.
    assert_eq!(a.report.reference_profile.unwrap().get(Element::Metal), 7.0);
    // Events lean fire while the seasonal INTP profile leans metal.
    let consistency = a.report.consistency.unwrap();
    assert_eq!(consistency.event_element, Element::Fire);
    assert_eq!(consistency.reference_element, Element::Metal);
    assert_eq!(consistency.rate, 65);
}

#[test]
fn adjustments_change_the_seed_and_the_questions() {
    let engine = Engine::default();
    let plain = new_session();
    let mut tilted = new_session();
    tilted.profile.adjustments = ElementVector::zero().with(Element::Water, 2.0);

    assert_eq!(plain.seed(), "1989-fire");
    assert_eq!(tilted.seed(), "1989-water");
    assert_ne!(plain.hypotheses(&engine), tilted.hypotheses(&engine));
}

#[test]
fn configured_engine_draws_more_topics() {
    let engine = Engine::new(EngineConfig {
        hypotheses_per_year: 7,
        ..Default::default()
    });
    let session = new_session();
    for h in session.pending_hypotheses(&engine) {
        assert_eq!(h.topics.len(), 7);
    }
}
