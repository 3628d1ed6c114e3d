//! Static Pig Latin vocabulary: keywords, type names and built-in functions.
//!
//! Each symbol is stored once, in its canonical spelling. The upper/lower-case forms an
//! editor offers are derived with [`CaseForm::apply`] when candidates are produced.

use std::borrow::Cow;
use std::sync::OnceLock;

mod builtins;
mod keywords;

/// One of the three vocabulary partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Builtin,
    Type,
    Keyword,
}

impl Partition {
    /// Case forms offered for general identifier completion, in emission order.
    pub fn forms(self) -> &'static [CaseForm] {
        match self {
            // Builtins are case-insensitive but usually written in their canonical case.
            Partition::Builtin => &[CaseForm::Canonical, CaseForm::Upper, CaseForm::Lower],
            Partition::Type | Partition::Keyword => &[CaseForm::Upper, CaseForm::Lower],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseForm {
    Canonical,
    Upper,
    Lower,
}

impl CaseForm {
    pub fn apply(self, word: &str) -> Cow<'_, str> {
        match self {
            CaseForm::Canonical => Cow::Borrowed(word),
            CaseForm::Upper if !word.bytes().any(|b| b.is_ascii_lowercase()) => {
                Cow::Borrowed(word)
            }
            CaseForm::Upper => Cow::Owned(word.to_ascii_uppercase()),
            CaseForm::Lower if !word.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Borrowed(word)
            }
            CaseForm::Lower => Cow::Owned(word.to_ascii_lowercase()),
        }
    }
}

/// Read-only vocabulary shared by every completion request.
#[derive(Debug)]
pub struct Vocabulary {
    keywords: Vec<&'static str>,
    types: Vec<&'static str>,
    builtins: Vec<&'static str>,
}

impl Vocabulary {
    /// The Pig Latin vocabulary, built once per process.
    pub fn pig() -> &'static Vocabulary {
        static PIG: OnceLock<Vocabulary> = OnceLock::new();
        PIG.get_or_init(|| {
            let vocab = Vocabulary {
                keywords: keywords::KEYWORDS.to_vec(),
                types: keywords::TYPES.to_vec(),
                builtins: builtins::builtin_entries(),
            };
            tracing::debug!(
                keywords = vocab.keywords.len(),
                types = vocab.types.len(),
                builtins = vocab.builtins.len(),
                "initialized pig vocabulary"
            );
            vocab
        })
    }

    /// Canonical entries of a partition. Builtin entries may hold several names.
    pub fn entries(&self, partition: Partition) -> &[&'static str] {
        match partition {
            Partition::Builtin => &self.builtins,
            Partition::Type => &self.types,
            Partition::Keyword => &self.keywords,
        }
    }

    /// Individual names of a partition in the given case form, in declaration order.
    pub fn words(
        &self,
        partition: Partition,
        form: CaseForm,
    ) -> impl Iterator<Item = Cow<'static, str>> + '_ {
        self.entries(partition)
            .iter()
            .copied()
            .flat_map(str::split_whitespace)
            .map(move |word| form.apply(word))
    }
}
