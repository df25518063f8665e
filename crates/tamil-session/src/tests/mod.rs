mod basic;
mod proptest_fsm;

use std::sync::Arc;

use tamil_core::mapping::MappingTable;

use super::PhoneticSession;

pub(super) fn make_session() -> PhoneticSession {
    PhoneticSession::new(Arc::new(MappingTable::tamil()))
}

/// Table small enough to reason about by hand.
pub(super) fn make_toy_session() -> PhoneticSession {
    let table = MappingTable::builder()
        .vowel("a", "A", "")
        .vowel("aa", "K2", "d2")
        .consonant("k", "K")
        .exception("sri", "SRI")
        .stop_marker(";", "V")
        .build()
        .unwrap();
    PhoneticSession::new(Arc::new(table))
}
