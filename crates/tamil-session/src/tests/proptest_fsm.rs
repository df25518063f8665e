//! Property-based tests for the PhoneticSession state machine.
//!
//! Random edit sequences; structural invariants are checked after every
//! action.

use proptest::prelude::*;

use tamil_core::convert::convert_text;
use tamil_core::mapping::MappingTable;

use super::make_session;
use crate::{Mode, PhoneticSession, SessionResponse};

#[derive(Debug, Clone)]
enum Action {
    Type(char),
    Backspace,
    Toggle,
    Clear,
}

fn arb_phonetic_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'i', 'u', 'e', 'o']),
        4 => prop::sample::select(vec![
            'k', 'g', 'c', 's', 'h', 'n', 'N', 't', 'T', 'd', 'p', 'm', 'y', 'r', 'R',
            'l', 'L', 'z', 'v', 'j',
        ]),
        2 => Just(';'),
        1 => Just(' '),
        1 => prop::sample::select(vec!['1', '.', 'Q', '\t']),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        30 => arb_phonetic_char().prop_map(Action::Type),
        5 => Just(Action::Backspace),
        2 => Just(Action::Toggle),
        2 => Just(Action::Clear),
    ]
}

fn execute_action(session: &mut PhoneticSession, action: &Action) -> SessionResponse {
    match action {
        Action::Type(ch) => {
            let mut text = session.input().to_string();
            text.push(*ch);
            session.set_input(&text)
        }
        Action::Backspace => {
            let mut text = session.input().to_string();
            text.pop();
            session.set_input(&text)
        }
        Action::Toggle => session.toggle_mode(),
        Action::Clear => session.clear(),
    }
}

fn assert_invariants(
    session: &PhoneticSession,
    resp: &SessionResponse,
    action: &Action,
    prev_mode: Mode,
    prev_status: &str,
) {
    // 1. The response mirrors the session.
    assert_eq!(resp.output, session.output(), "output mismatch after {action:?}");
    assert_eq!(resp.status, session.status(), "status mismatch after {action:?}");
    assert_eq!(resp.mode, session.mode(), "mode mismatch after {action:?}");

    // 2. Only Toggle changes the mode.
    if matches!(action, Action::Toggle) {
        assert_eq!(session.mode(), prev_mode.toggled());
        assert_eq!(session.status(), format!("Mode: {}", session.mode().label()));
    } else {
        assert_eq!(session.mode(), prev_mode, "mode changed by {action:?}");
    }

    // 3. Clear empties the output and nothing else.
    if matches!(action, Action::Clear) {
        assert!(session.output().is_empty());
        assert_eq!(session.status(), "Output cleared");
        assert_eq!(session.copy_text(), None);
        return;
    }

    // 4. Otherwise the output is the conversion of the trimmed input.
    let expected = convert_text(
        MappingTable::global(),
        session.input().trim(),
        session.mode().is_enabled(),
    );
    assert_eq!(session.output(), expected.text, "stale output after {action:?}");

    // 5. English edits never touch the status; Tamil edits report the event.
    if !matches!(action, Action::Toggle) {
        match session.mode() {
            Mode::English => assert_eq!(session.status(), prev_status),
            Mode::Tamil => assert_eq!(
                session.status(),
                expected.status.map(|e| e.to_string()).unwrap_or_default()
            ),
        }
    }

    // 6. Output never carries surrounding whitespace.
    assert_eq!(session.output(), session.output().trim());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(actions in prop::collection::vec(arb_action(), 1..60)) {
        let mut session = make_session();
        for action in &actions {
            let prev_mode = session.mode();
            let prev_status = session.status().to_string();
            let resp = execute_action(&mut session, action);
            assert_invariants(&session, &resp, action, prev_mode, &prev_status);
        }
    }

    #[test]
    fn toggling_twice_restores_output(text in "[a-zA-Z; ]{0,24}") {
        let mut session = make_session();
        let before = session.set_input(&text).output;
        session.toggle_mode();
        let after = session.toggle_mode().output;
        prop_assert_eq!(before, after);
    }
}
