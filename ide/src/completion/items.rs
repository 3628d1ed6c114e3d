//! Gathers raw candidate groups for a completion context.
//! Groups are filtered by prefix here; ordering happens in `ranking`.

use std::collections::HashSet;

use pig_analyzer::{CaseForm, Partition, Vocabulary};

use super::matchers::matches_prefix;
use crate::context::CompletionContext;
use crate::symbols::SymbolSnapshot;

/// Builtin call marker appended to function names.
pub const CALL_MARKER: &str = "()";

/// Vocabulary partitions in emission order for general completion.
const GENERAL_PARTITIONS: [Partition; 3] = [Partition::Builtin, Partition::Type, Partition::Keyword];

/// Prefix-filtered candidates with set semantics: the first occurrence wins.
#[derive(Debug, Default)]
pub(crate) struct Group {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl Group {
    pub(crate) fn offer(&mut self, candidate: String, prefix: &str) {
        if !matches_prefix(&candidate, prefix) || self.seen.contains(&candidate) {
            return;
        }
        self.seen.insert(candidate.clone());
        self.items.push(candidate);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// Candidate groups before assembly.
///
/// `extra` holds host-scope symbols, `found` holds vocabulary and path matches.
#[derive(Debug, Default)]
pub(crate) struct Gathered {
    pub(crate) found: Group,
    pub(crate) extra: Group,
}

impl Gathered {
    pub(crate) fn total(&self) -> usize {
        self.found.len() + self.extra.len()
    }
}

pub(crate) fn gather(
    context: &CompletionContext,
    prefix: &str,
    vocab: &Vocabulary,
    symbols: &SymbolSnapshot,
) -> Gathered {
    let mut out = Gathered::default();

    match context {
        CompletionContext::Path => {
            for path in &symbols.paths {
                out.found.offer(path.clone(), prefix);
            }
        }
        CompletionContext::TypeAnnotation => {
            for name in vocab.words(Partition::Type, CaseForm::Lower) {
                out.found.offer(name.into_owned(), prefix);
            }
        }
        CompletionContext::Member { chain } => {
            // Unresolved receivers produce no candidates.
            if let Some(members) = symbols.members(chain) {
                for (name, kind) in members {
                    out.extra.offer(kind.render(name), prefix);
                }
            }
        }
        CompletionContext::General => {
            for partition in GENERAL_PARTITIONS {
                for &form in partition.forms() {
                    for word in vocab.words(partition, form) {
                        let candidate = match partition {
                            Partition::Builtin => format!("{word}{CALL_MARKER}"),
                            Partition::Type | Partition::Keyword => word.into_owned(),
                        };
                        out.found.offer(candidate, prefix);
                    }
                }
            }
            for name in symbols.top_level_names() {
                out.extra.offer(name, prefix);
            }
        }
    }

    out
}
