//! Greedy longest-match transliteration of a single word.
//!
//! At each cursor position the rules in [`Rule::PRIORITY`] are tried in order
//! and the first match is applied. A vowel that lands directly after a
//! bare consonant fuses onto it; everything that matches nothing is copied
//! through one character at a time, so every input terminates.


use std::fmt;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::mapping::{MappingTable, VowelEntry};

/// Matching rules at a single scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Consonant token immediately followed by the stop marker.
    StopMarker,
    Vowel,
    Consonant,
    /// Copy one character unchanged.
    PassThrough,
}

impl Rule {
    /// Order in which rules are tried. Changing it changes output.
    pub const PRIORITY: [Rule; 4] = [
        Rule::StopMarker,
        Rule::Vowel,
        Rule::Consonant,
        Rule::PassThrough,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rule::StopMarker => "stop_marker",
            Rule::Vowel => "vowel",
            Rule::Consonant => "consonant",
            Rule::PassThrough => "pass_through",
        }
    }
}

/// Advisory description of the last structural event of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    StopApplied { glyph: String },
    Exception { word: String, output: String },
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanEvent::StopApplied { glyph } => write!(f, "Pulli applied: {glyph} (Mei form)"),
            ScanEvent::Exception { word, output } => write!(f, "Exception: {word} \u{2192} {output}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transliteration {
    pub output: String,
    pub event: Option<ScanEvent>,
}

/// One applied rule, as reported by [`Transliterator::explain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainStep {
    pub rule: Rule,
    /// Input consumed by this step.
    pub input: String,
    /// Fragment the step left at the end of the buffer.
    pub output: String,
    /// The vowel was fused onto the preceding consonant.
    pub fused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub word: String,
    /// Set when a whole-word exception matched; `steps` is then empty.
    pub exception: Option<String>,
    pub steps: Vec<ExplainStep>,
    pub output: String,
}

/// Output buffer piece. Only `Consonant`, a bare consonant glyph from the
/// table, accepts a following vowel sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fragment<'t> {
    Consonant(&'t str),
    /// Consonant glyph plus a combining sign or virama.
    Joined(&'t str, &'t str),
    Glyph(&'t str),
    Char(char),
}

impl Fragment<'_> {
    fn write_to(self, out: &mut String) {
        match self {
            Fragment::Consonant(g) | Fragment::Glyph(g) => out.push_str(g),
            Fragment::Joined(base, sign) => {
                out.push_str(base);
                out.push_str(sign);
            }
            Fragment::Char(c) => out.push(c),
        }
    }

    fn to_text(self) -> String {
        let mut s = String::new();
        self.write_to(&mut s);
        s
    }
}

#[derive(Debug, Clone, Copy)]
enum Emit<'t> {
    Stopped(&'t str),
    Vowel(&'t VowelEntry),
    Consonant(&'t str),
    Char(char),
}

#[derive(Debug, Clone, Copy)]
struct Step<'t> {
    rule: Rule,
    consumed: usize,
    emit: Emit<'t>,
}

/// Stateless engine over a borrowed, immutable table.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t MappingTable,
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t MappingTable {
        self.table
    }

    pub fn transliterate(&self, word: &str) -> Transliteration {
        let _span = debug_span!("transliterate", word).entered();

        if let Some(output) = self.table.exception(word) {
            debug!(output, "whole-word exception");
            return Transliteration {
                output: output.to_string(),
                event: Some(ScanEvent::Exception {
                    word: word.to_string(),
                    output: output.to_string(),
                }),
            };
        }

        let (fragments, event) = self.scan(word, |_, _, _, _| {});
        let mut output = String::with_capacity(word.len() * 3);
        for f in fragments {
            f.write_to(&mut output);
        }
        Transliteration { output, event }
    }

    /// Same result as [`transliterate`](Self::transliterate), with every
    /// applied rule recorded.
    pub fn explain(&self, word: &str) -> Explanation {
        if let Some(output) = self.table.exception(word) {
            return Explanation {
                word: word.to_string(),
                exception: Some(output.to_string()),
                steps: Vec::new(),
                output: output.to_string(),
            };
        }

        let mut steps = Vec::new();
        let (fragments, _) = self.scan(word, |rule, input, last, fused| {
            steps.push(ExplainStep {
                rule,
                input: input.to_string(),
                output: last.to_text(),
                fused,
            });
        });
        let mut output = String::new();
        for f in fragments {
            f.write_to(&mut output);
        }
        Explanation {
            word: word.to_string(),
            exception: None,
            steps,
            output,
        }
    }

    fn scan<'w>(
        &self,
        word: &'w str,
        mut observe: impl FnMut(Rule, &'w str, Fragment<'t>, bool),
    ) -> (Vec<Fragment<'t>>, Option<ScanEvent>) {
        let table = self.table;
        let virama = table.stop_marker().virama.as_str();
        let mut fragments: Vec<Fragment<'t>> = Vec::with_capacity(word.len());
        let mut event = None;
        let mut i = 0;

        while i < word.len() {
            let rest = &word[i..];
            // PassThrough matches any non-empty input, so this always finds a step.
            let Some(step) = Rule::PRIORITY
                .iter()
                .find_map(|&rule| self.try_rule(rule, rest))
            else {
                break;
            };

            let fused = push_fragment(&mut fragments, step.emit, virama);
            event = match step.emit {
                Emit::Stopped(glyph) => {
                    let glyph = format!("{glyph}{virama}");
                    debug!(glyph = %glyph, "stop marker applied");
                    Some(ScanEvent::StopApplied { glyph })
                }
                _ => None,
            };
            if let Some(&last) = fragments.last() {
                observe(step.rule, &rest[..step.consumed], last, fused);
            }
            i += step.consumed;
        }

        (fragments, event)
    }

    fn try_rule(&self, rule: Rule, rest: &str) -> Option<Step<'t>> {
        let table = self.table;
        match rule {
            Rule::StopMarker => table.stopped_consonant(rest).map(|(key, c)| Step {
                rule,
                consumed: key.len() + table.stop_marker().token.len(),
                emit: Emit::Stopped(&c.glyph),
            }),
            Rule::Vowel => table.longest_vowel(rest).map(|(key, v)| Step {
                rule,
                consumed: key.len(),
                emit: Emit::Vowel(v),
            }),
            Rule::Consonant => table.longest_consonant(rest).map(|(key, c)| Step {
                rule,
                consumed: key.len(),
                emit: Emit::Consonant(&c.glyph),
            }),
            Rule::PassThrough => rest.chars().next().map(|c| Step {
                rule,
                consumed: c.len_utf8(),
                emit: Emit::Char(c),
            }),
        }
    }
}

/// Append the step's output. Returns true when a vowel fused.
fn push_fragment<'t>(fragments: &mut Vec<Fragment<'t>>, emit: Emit<'t>, virama: &'t str) -> bool {
    match emit {
        Emit::Stopped(glyph) => fragments.push(Fragment::Joined(glyph, virama)),
        Emit::Vowel(v) => {
            if let Some(Fragment::Consonant(glyph)) = fragments.last().copied() {
                // The inherent vowel leaves the bare consonant, which can still
                // take a sign.
                if v.is_inherent() {
                    return true;
                }
                fragments.pop();
                fragments.push(Fragment::Joined(glyph, &v.combining));
                return true;
            }
            fragments.push(Fragment::Glyph(&v.independent));
        }
        Emit::Consonant(glyph) => fragments.push(Fragment::Consonant(glyph)),
        Emit::Char(c) => fragments.push(Fragment::Char(c)),
    }
    false
}

/// Transliterate one whitespace-free word against `table`.
pub fn transliterate(table: &MappingTable, word: &str) -> String {
    Transliterator::new(table).transliterate(word).output
}
