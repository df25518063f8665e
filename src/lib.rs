//! Phonetic Tamil transliteration engine.
//!
//! Re-exports the core and session crates for Rust callers and exposes a
//! C ABI in [`ffi`] for host editors.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
pub mod trace_init;

pub use tamil_core::{
    convert, convert_text, mapping, reference, settings, translit, transliterate, unicode,
    Conversion, MappingTable, Rule, ScanEvent, Transliteration, Transliterator,
};
pub use tamil_session::{Mode, PhoneticSession, SessionError, SessionResponse};
