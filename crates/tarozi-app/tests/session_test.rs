//! End-to-end behaviour of a register session

use chrono::NaiveDate;
use tarozi_app::{
    AlarmDevice, FixedDate, FormField, Playback, ReloadFacility, Selection, Session,
    StartOutcome, SubmitOutcome,
};

#[derive(Default)]
struct TestSpeaker {
    playing: bool,
}

impl AlarmDevice for TestSpeaker {
    fn try_start(&mut self) -> StartOutcome {
        self.playing = true;
        StartOutcome::Started
    }

    fn stop(&mut self) {
        self.playing = false;
    }
}

#[derive(Default)]
struct CountingReloader {
    count: usize,
}

impl ReloadFacility for CountingReloader {
    fn reload(&mut self) {
        self.count += 1;
    }
}

fn new_session() -> Session {
    tarozi_app::logging::init_test();
    Session::new(
        Box::new(FixedDate(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap())),
        true,
    )
}

fn add(session: &mut Session, speaker: &mut TestSpeaker, plate: &str, gross: &str, tare: &str) {
    session.set_field(FormField::PlateNumber, plate);
    session.set_field(FormField::GrossWeight, gross);
    session.set_field(FormField::TareWeight, tare);
    assert_eq!(session.submit(speaker), Ok(SubmitOutcome::Added));
}

fn plates(session: &Session) -> Vec<String> {
    session
        .store()
        .iter()
        .map(|e| e.plate_number.clone())
        .collect()
}

#[test]
fn test_worked_example() {
    let mut session = new_session();
    let mut speaker = TestSpeaker::default();

    add(&mut session, &mut speaker, "01A123BC", "10000", "4000");
    assert_eq!(session.store().get(0).unwrap().net_weight, 6000.0);
    assert_eq!(session.view().rows[0].cells[5].text, "6,000.00");

    add(&mut session, &mut speaker, "01B456DE", "8000", "3000");
    assert_eq!(plates(&session), vec!["01B456DE", "01A123BC"]);

    session.set_search("01A");
    let view = session.view();
    assert_eq!(view.shown(), 1);
    assert_eq!(view.rows[0].store_index, 1);
    assert_eq!(view.rows[0].cells[0].render_with("[", "]"), "[01A]123BC");

    session.set_search("");
    assert!(session.select_index(0));
    let removed = session.delete().unwrap();
    assert_eq!(removed.plate_number, "01B456DE");
    assert_eq!(plates(&session), vec!["01A123BC"]);
    assert_eq!(session.selection(), Selection::Idle);
}

#[test]
fn test_n_adds_are_reverse_order() {
    let mut session = new_session();
    let mut speaker = TestSpeaker::default();
    let submitted: Vec<String> = (0..6).map(|i| format!("PLATE{}", i)).collect();
    for plate in &submitted {
        add(&mut session, &mut speaker, plate, "500", "100");
    }
    let mut expected = submitted.clone();
    expected.reverse();
    assert_eq!(plates(&session), expected);
}

#[test]
fn test_edit_replaces_only_that_position() {
    let mut session = new_session();
    let mut speaker = TestSpeaker::default();
    for plate in ["A", "B", "C", "D"] {
        add(&mut session, &mut speaker, plate, "900", "300");
    }
    // store: [D, C, B, A]
    session.select_index(2);
    assert!(session.edit());
    session.set_field(FormField::PlateNumber, "B-EDITED");
    session.set_field(FormField::GrossWeight, "1000");
    assert_eq!(session.submit(&mut speaker), Ok(SubmitOutcome::Updated(2)));

    assert_eq!(plates(&session), vec!["D", "C", "B-EDITED", "A"]);
    assert_eq!(session.store().get(2).unwrap().net_weight, 700.0);
    assert_eq!(session.selection(), Selection::Idle);
    assert_eq!(session.view().submit_label, "Add");
}

#[test]
fn test_blank_required_field_leaves_store_unchanged() {
    let mut session = new_session();
    let mut speaker = TestSpeaker::default();
    add(&mut session, &mut speaker, "A", "10", "5");

    session.set_field(FormField::PlateNumber, "B");
    session.set_field(FormField::GrossWeight, "10");
    let form_before = session.form().clone();

    assert!(session.submit(&mut speaker).is_err());
    assert_eq!(plates(&session), vec!["A"]);
    assert_eq!(session.form(), &form_before);
}

#[test]
fn test_search_semantics() {
    let mut session = new_session();
    let mut speaker = TestSpeaker::default();
    add(&mut session, &mut speaker, "ab123", "10", "5");
    add(&mut session, &mut speaker, "ZZ999", "10", "5");

    session.set_search("");
    assert_eq!(session.view().shown(), 2);
    session.set_search("AB");
    assert_eq!(session.view().shown(), 1);
    session.set_search("no such thing");
    assert_eq!(session.view().shown(), 0);
}

#[test]
fn test_relay_toggle_resets_initialization() {
    let mut session = new_session();
    let mut speaker = TestSpeaker::default();
    add(&mut session, &mut speaker, "A", "10", "5");
    assert_eq!(session.alarm().playback(), Playback::Playing);

    assert!(!session.toggle_relay(&mut speaker));
    assert!(!speaker.playing);
    assert!(!session.alarm().is_initialized());
    assert_eq!(session.view().relay_label, "Relay (Off)");

    assert!(session.toggle_relay(&mut speaker));
    assert!(session.alarm().is_active());
    assert!(speaker.playing);
    assert_eq!(session.alarm().playback(), Playback::Playing);
}

#[test]
fn test_reload_discards_everything() {
    let mut session = new_session();
    let mut speaker = TestSpeaker::default();
    let mut reloader = CountingReloader::default();
    add(&mut session, &mut speaker, "A", "10", "5");
    session.set_search("a");
    session.select_index(0);
    session.toggle_relay(&mut speaker);

    session.reload(&mut reloader, &mut speaker);

    assert_eq!(reloader.count, 1);
    assert!(session.store().is_empty());
    assert_eq!(session.search(), "");
    assert_eq!(session.selection(), Selection::Idle);
    assert!(session.alarm().is_active());
    assert!(!session.alarm().is_initialized());
    assert_eq!(session.form().date, "2024-09-01");
}

#[test]
fn test_reload_rearms_relay_that_started_off() {
    let mut session = Session::new(
        Box::new(FixedDate(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap())),
        false,
    );
    let mut speaker = TestSpeaker::default();
    assert!(!session.alarm().is_active());

    session.reload(&mut CountingReloader::default(), &mut speaker);

    assert!(session.alarm().is_active());
    assert_eq!(session.alarm().playback(), Playback::Stopped);
    assert_eq!(session.view().relay_label, "Relay");
}
