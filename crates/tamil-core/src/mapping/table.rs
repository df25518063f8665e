use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use super::config::{parse_mapping_toml, MappingConfigError, DEFAULT_TOML};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Token categories of a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vowel,
    Consonant,
    Exception,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Vowel => "vowel",
            Category::Consonant => "consonant",
            Category::Exception => "exception",
        })
    }
}

/// A vowel's two renderings: standalone, and fused onto a preceding consonant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VowelEntry {
    pub independent: String,
    /// Empty for the inherent vowel, which leaves the consonant bare.
    pub combining: String,
}

impl VowelEntry {
    pub fn is_inherent(&self) -> bool {
        self.combining.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsonantEntry {
    /// Base letter, carrying the inherent vowel.
    pub glyph: String,
    /// Borrowed (Grantha) letter. Display only.
    pub grantha: bool,
}

/// Token that strips a consonant's inherent vowel by appending `virama`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopMarker {
    pub token: String,
    pub virama: String,
}

/// Result of [`MappingTable::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEntry<'a> {
    Vowel {
        key: &'a str,
        entry: &'a VowelEntry,
    },
    Consonant {
        key: &'a str,
        entry: &'a ConsonantEntry,
    },
    Exception {
        key: &'a str,
        output: &'a str,
    },
}

impl<'a> TableEntry<'a> {
    pub fn key(&self) -> &'a str {
        match *self {
            TableEntry::Vowel { key, .. }
            | TableEntry::Consonant { key, .. }
            | TableEntry::Exception { key, .. } => key,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("empty {category} key")]
    EmptyKey { category: Category },
    #[error("non-ASCII {category} key: {key}")]
    NonAsciiKey { category: Category, key: String },
    #[error("{category} key contains whitespace: {key:?}")]
    WhitespaceInKey { category: Category, key: String },
    #[error("duplicate {category} key: {key}")]
    DuplicateKey { category: Category, key: String },
    #[error("empty glyph for {category} key: {key}")]
    EmptyGlyph { category: Category, key: String },
    #[error("no {0} entries")]
    EmptyCategory(Category),
    #[error("stop marker is not set")]
    MissingStopMarker,
    #[error("stop marker token must be non-empty ASCII without whitespace: {0:?}")]
    InvalidStopToken(String),
    #[error("virama glyph is empty")]
    EmptyVirama,
}

#[derive(Debug, Clone)]
struct Keyed<T> {
    key: String,
    value: T,
}

/// Immutable token-to-glyph table.
///
/// Entries keep their declaration order (used for reference grids); prefix
/// lookups walk a length-descending index computed once in [`build`].
///
/// [`build`]: MappingTableBuilder::build
#[derive(Debug, Clone)]
pub struct MappingTable {
    vowels: Vec<Keyed<VowelEntry>>,
    consonants: Vec<Keyed<ConsonantEntry>>,
    exceptions: Vec<Keyed<String>>,
    vowels_by_len: Vec<usize>,
    consonants_by_len: Vec<usize>,
    exception_index: HashMap<String, usize>,
    stop: StopMarker,
}

impl MappingTable {
    pub fn builder() -> MappingTableBuilder {
        MappingTableBuilder::default()
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, MappingConfigError> {
        parse_mapping_toml(toml_str)
    }

    /// Set custom mapping TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), MappingConfigError> {
        // Validate eagerly
        parse_mapping_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| MappingConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global table.
    pub fn global() -> &'static MappingTable {
        static INSTANCE: OnceLock<MappingTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_mapping_toml(toml_str).expect("mapping TOML must be valid")
        })
    }

    /// A fresh copy of the embedded Tamil table, independent of `init_custom`.
    pub fn tamil() -> MappingTable {
        parse_mapping_toml(DEFAULT_TOML).expect("embedded mapping TOML must be valid")
    }

    /// Longest entry of `category` matching `rest`.
    ///
    /// Vowels and consonants match as a prefix of `rest`; exceptions only
    /// match when `rest` is exactly the key.
    pub fn lookup(&self, category: Category, rest: &str) -> Option<TableEntry<'_>> {
        match category {
            Category::Vowel => self
                .longest_vowel(rest)
                .map(|(key, entry)| TableEntry::Vowel { key, entry }),
            Category::Consonant => self
                .longest_consonant(rest)
                .map(|(key, entry)| TableEntry::Consonant { key, entry }),
            Category::Exception => {
                let i = *self.exception_index.get(rest)?;
                let e = &self.exceptions[i];
                Some(TableEntry::Exception {
                    key: &e.key,
                    output: &e.value,
                })
            }
        }
    }

    pub fn longest_vowel(&self, rest: &str) -> Option<(&str, &VowelEntry)> {
        self.vowels_by_len
            .iter()
            .map(|&i| &self.vowels[i])
            .find(|v| rest.starts_with(v.key.as_str()))
            .map(|v| (v.key.as_str(), &v.value))
    }

    pub fn longest_consonant(&self, rest: &str) -> Option<(&str, &ConsonantEntry)> {
        self.consonants_by_len
            .iter()
            .map(|&i| &self.consonants[i])
            .find(|c| rest.starts_with(c.key.as_str()))
            .map(|c| (c.key.as_str(), &c.value))
    }

    /// Longest consonant token immediately followed by the stop marker.
    pub fn stopped_consonant(&self, rest: &str) -> Option<(&str, &ConsonantEntry)> {
        let stop = self.stop.token.as_str();
        self.consonants_by_len
            .iter()
            .map(|&i| &self.consonants[i])
            .find(|c| {
                rest.strip_prefix(c.key.as_str())
                    .is_some_and(|after| after.starts_with(stop))
            })
            .map(|c| (c.key.as_str(), &c.value))
    }

    pub fn exception(&self, word: &str) -> Option<&str> {
        self.exception_index
            .get(word)
            .map(|&i| self.exceptions[i].value.as_str())
    }

    /// Keys of `category`, longest first.
    pub fn keys_by_length(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Vowel => self
                .vowels_by_len
                .iter()
                .map(|&i| self.vowels[i].key.as_str())
                .collect(),
            Category::Consonant => self
                .consonants_by_len
                .iter()
                .map(|&i| self.consonants[i].key.as_str())
                .collect(),
            Category::Exception => {
                let mut keys: Vec<&str> = self.exceptions.iter().map(|e| e.key.as_str()).collect();
                keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
                keys
            }
        }
    }

    /// Vowels in declaration order.
    pub fn vowels(&self) -> impl Iterator<Item = (&str, &VowelEntry)> {
        self.vowels.iter().map(|v| (v.key.as_str(), &v.value))
    }

    /// Consonants in declaration order.
    pub fn consonants(&self) -> impl Iterator<Item = (&str, &ConsonantEntry)> {
        self.consonants.iter().map(|c| (c.key.as_str(), &c.value))
    }

    pub fn exceptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exceptions
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub fn stop_marker(&self) -> &StopMarker {
        &self.stop
    }
}

#[derive(Debug, Default)]
pub struct MappingTableBuilder {
    vowels: Vec<(String, VowelEntry)>,
    consonants: Vec<(String, ConsonantEntry)>,
    exceptions: Vec<(String, String)>,
    stop: Option<StopMarker>,
}

impl MappingTableBuilder {
    pub fn vowel(
        mut self,
        key: impl Into<String>,
        independent: impl Into<String>,
        combining: impl Into<String>,
    ) -> Self {
        self.vowels.push((
            key.into(),
            VowelEntry {
                independent: independent.into(),
                combining: combining.into(),
            },
        ));
        self
    }

    pub fn consonant(self, key: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.push_consonant(key.into(), glyph.into(), false)
    }

    pub fn grantha(self, key: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.push_consonant(key.into(), glyph.into(), true)
    }

    fn push_consonant(mut self, key: String, glyph: String, grantha: bool) -> Self {
        self.consonants.push((key, ConsonantEntry { glyph, grantha }));
        self
    }

    pub fn exception(mut self, key: impl Into<String>, output: impl Into<String>) -> Self {
        self.exceptions.push((key.into(), output.into()));
        self
    }

    pub fn stop_marker(mut self, token: impl Into<String>, virama: impl Into<String>) -> Self {
        self.stop = Some(StopMarker {
            token: token.into(),
            virama: virama.into(),
        });
        self
    }

    pub fn build(self) -> Result<MappingTable, MappingError> {
        let stop = self.stop.ok_or(MappingError::MissingStopMarker)?;
        if !is_valid_token(&stop.token) {
            return Err(MappingError::InvalidStopToken(stop.token));
        }
        if stop.virama.is_empty() {
            return Err(MappingError::EmptyVirama);
        }
        if self.vowels.is_empty() {
            return Err(MappingError::EmptyCategory(Category::Vowel));
        }
        if self.consonants.is_empty() {
            return Err(MappingError::EmptyCategory(Category::Consonant));
        }

        let vowels = collect_keyed(Category::Vowel, self.vowels, |v| &v.independent)?;
        let consonants = collect_keyed(Category::Consonant, self.consonants, |c| &c.glyph)?;
        let exceptions = collect_keyed(Category::Exception, self.exceptions, |o| o)?;

        let vowels_by_len = by_length(&vowels);
        let consonants_by_len = by_length(&consonants);
        let exception_index = exceptions
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();

        Ok(MappingTable {
            vowels,
            consonants,
            exceptions,
            vowels_by_len,
            consonants_by_len,
            exception_index,
            stop,
        })
    }
}

fn is_valid_token(key: &str) -> bool {
    !key.is_empty() && key.is_ascii() && !key.chars().any(|c| c.is_ascii_whitespace())
}

fn collect_keyed<T>(
    category: Category,
    entries: Vec<(String, T)>,
    glyph: impl Fn(&T) -> &String,
) -> Result<Vec<Keyed<T>>, MappingError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        if key.is_empty() {
            return Err(MappingError::EmptyKey { category });
        }
        if !key.is_ascii() {
            return Err(MappingError::NonAsciiKey { category, key });
        }
        if key.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(MappingError::WhitespaceInKey { category, key });
        }
        if glyph(&value).is_empty() {
            return Err(MappingError::EmptyGlyph { category, key });
        }
        if !seen.insert(key.clone()) {
            return Err(MappingError::DuplicateKey { category, key });
        }
        out.push(Keyed { key, value });
    }
    Ok(out)
}

/// Indices of `entries` ordered by descending key length, ties by key.
fn by_length<T>(entries: &[Keyed<T>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        let (ka, kb) = (&entries[a].key, &entries[b].key);
        kb.len().cmp(&ka.len()).then_with(|| ka.cmp(kb))
    });
    order
}
