use std::time::Duration;
use anyhow::Result;

use pagesim::input::InputError;
use pagesim::playback::{PlaybackConfig, PlaybackError, ReferenceMark, Session};
use pagesim::{InputConfig, Outcome, PageId, Policy};

#[path = "../common/mod.rs"]
mod common;
use common::sample_references;

fn started(policy: Policy) -> Result<Session> {
    let mut session = Session::default();
    session.start(sample_references(), 3, policy)?;
    Ok(session)
}

#[test]
fn test_start_positions_cursor_at_initial_step() -> Result<()> {
    let session = started(Policy::Fifo)?;

    assert!(session.is_running());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.total_steps(), 8);
    assert!(session.current()?.is_initial());
    assert!(!session.can_go_previous());
    assert!(session.can_go_next());

    Ok(())
}

#[test]
fn test_navigation_stops_at_bounds() -> Result<()> {
    let mut session = started(Policy::Lru)?;

    assert!(!session.previous());
    for expected in 1..=8 {
        assert!(session.next());
        assert_eq!(session.current_index(), expected);
    }
    assert!(session.is_at_end());
    assert!(!session.next());
    assert_eq!(session.current()?.faults, 6);

    assert!(session.previous());
    assert_eq!(session.current_index(), 7);

    session.rewind();
    assert_eq!(session.current_index(), 0);

    Ok(())
}

#[test]
fn test_seek() -> Result<()> {
    let mut session = started(Policy::Optimal)?;

    let step = session.seek(4)?;
    assert_eq!(step.page, Some(PageId(2)));
    assert_eq!(session.current_index(), 4);

    assert_eq!(
        session.seek(9).unwrap_err(),
        PlaybackError::StepOutOfRange { step: 9, len: 9 }
    );
    assert_eq!(session.current_index(), 4);

    Ok(())
}

#[test]
fn test_select_policy_resimulates() -> Result<()> {
    let mut session = started(Policy::Fifo)?;
    session.seek(8)?;
    assert_eq!(session.current()?.faults, 7);

    session.select_policy(Policy::Optimal)?;
    assert_eq!(session.policy(), Policy::Optimal);
    assert_eq!(session.current_index(), 0);
    session.seek(8)?;
    assert_eq!(session.current()?.faults, 6);

    // Selecting a policy while idle only records it
    let mut idle = Session::default();
    idle.select_policy(Policy::Lru)?;
    assert!(!idle.is_running());
    assert_eq!(idle.policy(), Policy::Lru);

    Ok(())
}

#[test]
fn test_begin_playback_restarts_finished_trace() -> Result<()> {
    let mut session = started(Policy::Fifo)?;
    session.set_speed(10)?;

    session.seek(3)?;
    assert_eq!(session.begin_playback()?, Duration::from_millis(100));
    assert_eq!(session.current_index(), 3);

    session.seek(8)?;
    session.begin_playback()?;
    assert_eq!(session.current_index(), 0);

    assert_eq!(session.set_speed(0).unwrap_err(), PlaybackError::InvalidSpeed(0));

    Ok(())
}

#[test]
fn test_reference_marks_follow_cursor() -> Result<()> {
    let mut session = started(Policy::Fifo)?;
    assert!(session.reference_marks().iter().all(|m| *m == ReferenceMark::Pending));

    session.seek(5)?;
    let marks = session.reference_marks();
    assert_eq!(marks.len(), 8);
    assert_eq!(marks[0], ReferenceMark::Past(Outcome::Fault));
    assert_eq!(marks[3], ReferenceMark::Past(Outcome::Fault));
    assert_eq!(marks[4], ReferenceMark::Current(Outcome::Hit));
    assert_eq!(marks[5], ReferenceMark::Pending);

    Ok(())
}

#[test]
fn test_summary_uses_run_totals_after_first_step() -> Result<()> {
    let mut session = started(Policy::Fifo)?;
    let summary = session.summary();
    assert_eq!((summary.faults, summary.hits), (0, 0));
    assert_eq!(summary.fault_ratio, 0.0);

    session.next();
    let summary = session.summary();
    assert_eq!((summary.faults, summary.hits), (7, 1));
    assert_eq!(summary.fault_ratio, 0.875);
    assert_eq!(summary.hit_ratio, 0.125);

    Ok(())
}

#[test]
fn test_start_rejects_invalid_input() {
    let mut session = Session::new(InputConfig::default(), PlaybackConfig::default());

    assert_eq!(
        session.start(Vec::new(), 3, Policy::Fifo).unwrap_err(),
        PlaybackError::Input(InputError::EmptyReferenceString)
    );
    assert_eq!(
        session.start(sample_references(), 0, Policy::Fifo).unwrap_err(),
        PlaybackError::Input(InputError::InvalidFrameCount { value: 0, max: 10 })
    );
    assert_eq!(
        session.start(sample_references(), 11, Policy::Fifo).unwrap_err(),
        PlaybackError::Input(InputError::InvalidFrameCount { value: 11, max: 10 })
    );
    assert!(!session.is_running());
}

#[test]
fn test_reset_clears_trace() -> Result<()> {
    let mut session = started(Policy::Lru)?;
    session.next();
    session.reset();

    assert!(!session.is_running());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current().unwrap_err(), PlaybackError::EmptyTrace);

    Ok(())
}
