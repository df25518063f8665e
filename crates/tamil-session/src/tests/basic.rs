use super::*;
use crate::Mode;

#[test]
fn new_session_starts_in_tamil_mode() {
    let session = make_session();
    assert_eq!(session.mode(), Mode::Tamil);
    assert_eq!(session.status(), "Mode: Tamil");
    assert!(session.input().is_empty());
    assert!(session.output().is_empty());
}

#[test]
fn set_input_converts_in_tamil_mode() {
    let mut session = make_session();
    let resp = session.set_input("vaNak;kam;");
    assert_eq!(resp.output, "வணக்கம்");
    assert_eq!(resp.mode, Mode::Tamil);
    assert_eq!(session.output(), "வணக்கம்");
    assert_eq!(session.input(), "vaNak;kam;");
}

#[test]
fn set_input_trims_and_collapses_whitespace() {
    let mut session = make_toy_session();
    let resp = session.set_input("  ka \t  kaa\n");
    assert_eq!(resp.output, "K Kd2");
}

#[test]
fn status_reports_stop_marker() {
    let mut session = make_session();
    let resp = session.set_input("k;");
    assert_eq!(resp.output, "க்");
    assert_eq!(resp.status, "Pulli applied: க் (Mei form)");
}

#[test]
fn status_reports_exception() {
    let mut session = make_toy_session();
    let resp = session.set_input("sri");
    assert_eq!(resp.status, "Exception: sri \u{2192} SRI");
}

#[test]
fn status_cleared_when_no_event() {
    let mut session = make_toy_session();
    session.set_input("k;");
    assert_eq!(session.status(), "Pulli applied: KV (Mei form)");
    let resp = session.set_input("k;a");
    assert_eq!(resp.output, "KVA");
    assert_eq!(resp.status, "");
}

#[test]
fn status_follows_last_word() {
    let mut session = make_toy_session();
    assert_eq!(session.set_input("k; ka").status, "");
    assert_eq!(session.set_input("ka k;").status, "Pulli applied: KV (Mei form)");
}

#[test]
fn english_mode_passes_text_through() {
    let mut session = make_session().with_mode(Mode::English);
    assert_eq!(session.status(), "Mode: English");
    let resp = session.set_input("  vanakkam  ");
    assert_eq!(resp.output, "vanakkam");
    assert_eq!(resp.mode, Mode::English);
}

#[test]
fn english_mode_keeps_status() {
    let mut session = make_toy_session();
    session.toggle_mode();
    let resp = session.set_input("k;");
    assert_eq!(resp.output, "k;");
    assert_eq!(resp.status, "Mode: English");
}

#[test]
fn toggle_reconverts_current_input() {
    let mut session = make_toy_session();
    session.set_input("kaa");
    assert_eq!(session.output(), "Kd2");

    let resp = session.toggle_mode();
    assert_eq!(resp.mode, Mode::English);
    assert_eq!(resp.status, "Mode: English");
    assert_eq!(resp.output, "kaa");

    let resp = session.toggle_mode();
    assert_eq!(resp.mode, Mode::Tamil);
    assert_eq!(resp.status, "Mode: Tamil");
    assert_eq!(resp.output, "Kd2");
}

#[test]
fn toggle_status_wins_over_word_event() {
    let mut session = make_toy_session().with_mode(Mode::English);
    session.set_input("k;");
    let resp = session.toggle_mode();
    assert_eq!(resp.output, "KV");
    assert_eq!(resp.status, "Mode: Tamil");
}

#[test]
fn clear_empties_output_but_keeps_input() {
    let mut session = make_toy_session();
    session.set_input("ka");
    let resp = session.clear();
    assert_eq!(resp.output, "");
    assert_eq!(resp.status, "Output cleared");
    assert_eq!(session.input(), "ka");

    // Next edit restores the output.
    assert_eq!(session.set_input("kaa").output, "Kd2");
}

#[test]
fn copy_text_only_when_output_present() {
    let mut session = make_toy_session();
    assert_eq!(session.copy_text(), None);
    session.set_input("ka");
    assert_eq!(session.copy_text(), Some("K"));
    session.clear();
    assert_eq!(session.copy_text(), None);
    session.set_input("   ");
    assert_eq!(session.copy_text(), None);
}

#[test]
fn sessions_share_one_table() {
    let table = Arc::new(MappingTable::tamil());
    let mut a = PhoneticSession::new(table.clone());
    let mut b = PhoneticSession::new(table.clone()).with_mode(Mode::English);
    assert_eq!(a.set_input("am;maa").output, "அம்மா");
    assert_eq!(b.set_input("am;maa").output, "am;maa");
    assert_eq!(Arc::strong_count(&table), 3);
}
