//! Host-supplied symbols: known paths, known variables, and a typed scope for
//! member-access completion.
//!
//! Snapshots are immutable. The host publishes a new one wholesale through
//! [`SymbolStore::replace`]; readers keep whatever snapshot they already hold.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SymbolKind {
    /// A field or plain value.
    Scalar,
    /// A relation, tuple or map with named members.
    Struct {
        #[serde(default)]
        children: BTreeMap<String, SymbolKind>,
    },
    /// A macro or `DEFINE`d function.
    Function,
}

impl SymbolKind {
    pub fn structure<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, SymbolKind)>,
        S: Into<String>,
    {
        SymbolKind::Struct {
            children: children
                .into_iter()
                .map(|(name, kind)| (name.into(), kind))
                .collect(),
        }
    }

    /// Completion text for a symbol of this kind.
    pub(crate) fn render(&self, name: &str) -> String {
        match self {
            SymbolKind::Function => format!("{name}()"),
            SymbolKind::Scalar | SymbolKind::Struct { .. } => name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSnapshot {
    /// Entries of the current directory listing.
    #[serde(default)]
    pub paths: Vec<String>,
    /// Names visible at the top level of the script.
    #[serde(default)]
    pub variables: Vec<String>,
    /// Typed symbols, looked up by access chain.
    #[serde(default)]
    pub scope: BTreeMap<String, SymbolKind>,
}

impl SymbolSnapshot {
    pub fn new<P, V>(paths: P, variables: V) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            variables: variables.into_iter().map(Into::into).collect(),
            scope: BTreeMap::new(),
        }
    }

    pub fn with_symbol(mut self, name: impl Into<String>, kind: SymbolKind) -> Self {
        self.scope.insert(name.into(), kind);
        self
    }

    /// Resolves `a.b.c` to the symbol it names.
    ///
    /// Returns `None` when a segment is missing or an intermediate symbol has no members.
    pub fn lookup_chain<S: AsRef<str>>(&self, chain: &[S]) -> Option<&SymbolKind> {
        let (first, rest) = chain.split_first()?;
        let mut current = self.scope.get(first.as_ref())?;
        for segment in rest {
            let SymbolKind::Struct { children } = current else {
                return None;
            };
            current = children.get(segment.as_ref())?;
        }
        Some(current)
    }

    /// Members of the struct symbol named by `chain`.
    pub fn members<S: AsRef<str>>(&self, chain: &[S]) -> Option<&BTreeMap<String, SymbolKind>> {
        match self.lookup_chain(chain)? {
            SymbolKind::Struct { children } => Some(children),
            SymbolKind::Scalar | SymbolKind::Function => None,
        }
    }

    /// Top-level names as completion text: plain variables, then scoped symbols.
    pub(crate) fn top_level_names(&self) -> impl Iterator<Item = String> + '_ {
        self.variables.iter().cloned().chain(
            self.scope
                .iter()
                .map(|(name, kind)| kind.render(name)),
        )
    }
}

/// Single-writer, multi-reader holder of the current [`SymbolSnapshot`].
#[derive(Debug, Default)]
pub struct SymbolStore {
    current: RwLock<Arc<SymbolSnapshot>>,
}

impl SymbolStore {
    pub fn new(snapshot: SymbolSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The snapshot current at the time of the call.
    pub fn snapshot(&self) -> Arc<SymbolSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn replace(&self, snapshot: SymbolSnapshot) {
        tracing::debug!(
            paths = snapshot.paths.len(),
            variables = snapshot.variables.len(),
            scope = snapshot.scope.len(),
            "replacing symbol snapshot"
        );
        let snapshot = Arc::new(snapshot);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }

    /// Replaces only the path listing, keeping the other members.
    pub fn replace_paths(&self, paths: Vec<String>) {
        let mut next = (*self.snapshot()).clone();
        next.paths = paths;
        self.replace(next);
    }

    /// Replaces only the variable list, keeping the other members.
    pub fn replace_variables(&self, variables: Vec<String>) {
        let mut next = (*self.snapshot()).clone();
        next.variables = variables;
        self.replace(next);
    }
}
