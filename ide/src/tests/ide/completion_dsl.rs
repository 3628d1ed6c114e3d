use crate::tests::common::init_tracing;
use crate::{
    CompletionConfig, CompletionMode, CompletionResult, CompletionSession, ReplaceRange,
    SymbolKind, SymbolSnapshot, complete_text,
};

// ----------------------------
// Symbol Builder
// ----------------------------

#[derive(Clone, Default)]
pub struct SymbolsBuilder {
    snapshot: SymbolSnapshot,
}

pub fn symbols() -> SymbolsBuilder {
    SymbolsBuilder::default()
}

impl SymbolsBuilder {
    pub fn paths(mut self, paths: &[&str]) -> Self {
        self.snapshot.paths = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn vars(mut self, vars: &[&str]) -> Self {
        self.snapshot.variables = vars.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn symbol(mut self, name: &str, kind: SymbolKind) -> Self {
        self.snapshot.scope.insert(name.to_string(), kind);
        self
    }

    /// `users` relation with a nested `address` tuple.
    pub fn users_relation(self) -> Self {
        self.symbol(
            "users",
            SymbolKind::structure([
                ("name", SymbolKind::Scalar),
                ("age", SymbolKind::Scalar),
                (
                    "address",
                    SymbolKind::structure([
                        ("city", SymbolKind::Scalar),
                        ("zip", SymbolKind::Scalar),
                    ]),
                ),
                ("normalize", SymbolKind::Function),
            ]),
        )
    }

    pub fn build(self) -> SymbolSnapshot {
        self.snapshot
    }
}

// ----------------------------
// Completion Test DSL
// ----------------------------

pub fn t(input_with_cursor: &str) -> CompletionTestBuilder {
    CompletionTestBuilder::new(input_with_cursor)
}

pub struct CompletionTestBuilder {
    text: String,
    cursor: usize,
    symbols: SymbolSnapshot,
    config: CompletionConfig,
    session: CompletionSession,
    output: Option<CompletionResult>,
}

impl CompletionTestBuilder {
    fn new(input_with_cursor: &str) -> Self {
        let cursor = input_with_cursor
            .find("$0")
            .expect("fixture must contain $0 marker");
        let text = input_with_cursor.replace("$0", "");
        assert!(
            text.len() + 2 == input_with_cursor.len(),
            "fixture must contain exactly one $0 marker"
        );

        Self {
            text,
            cursor,
            symbols: SymbolSnapshot::default(),
            config: CompletionConfig::default(),
            session: CompletionSession::new(),
            output: None,
        }
    }

    pub fn symbols(mut self, symbols: SymbolSnapshot) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn session(mut self, session: CompletionSession) -> Self {
        self.session = session;
        self
    }

    pub fn no_padding(mut self) -> Self {
        self.config.pad_single_candidate = false;
        self
    }

    fn ensure_run(&mut self) -> &CompletionResult {
        if self.output.is_none() {
            init_tracing();
            let out = complete_text(
                &mut self.session,
                &self.text,
                self.cursor,
                &self.symbols,
                self.config,
            );
            self.output = Some(out);
        }
        self.output.as_ref().unwrap()
    }

    pub fn candidates(mut self) -> Vec<String> {
        self.ensure_run().candidates.clone()
    }

    /// Runs the request and hands back the session for a follow-up request.
    pub fn into_session(mut self) -> CompletionSession {
        self.ensure_run();
        self.session
    }

    pub fn expect_candidates(mut self, expected: &[&str]) -> Self {
        let out = self.ensure_run();
        assert_eq!(out.candidates, expected);
        self
    }

    pub fn expect_contains(mut self, expected: &[&str]) -> Self {
        let out = self.ensure_run();
        for e in expected {
            assert!(
                out.candidates.iter().any(|c| c == e),
                "expected candidate {e:?}, got {:?}",
                out.candidates
            );
        }
        self
    }

    pub fn expect_not_contains(mut self, unexpected: &[&str]) -> Self {
        let out = self.ensure_run();
        for e in unexpected {
            assert!(
                !out.candidates.iter().any(|c| c == e),
                "unexpected candidate {e:?} in {:?}",
                out.candidates
            );
        }
        self
    }

    pub fn expect_empty(mut self) -> Self {
        let out = self.ensure_run();
        assert!(
            out.candidates.is_empty(),
            "expected no candidates, got {:?}",
            out.candidates
        );
        self
    }

    pub fn expect_mode(mut self, mode: CompletionMode) -> Self {
        let out = self.ensure_run();
        assert_eq!(out.mode, mode);
        self
    }

    /// Expects the replace range to cover `expected` on the cursor row.
    pub fn expect_replace_text(mut self, expected: &str) -> Self {
        let text = self.text.clone();
        let out = self.ensure_run();
        let ReplaceRange { row, start, end } = out.replace;
        let line = text.lines().nth(row as usize).unwrap_or("");
        assert_eq!(&line[start as usize..end as usize], expected);
        self
    }

    pub fn expect_replace(mut self, row: u32, start: u32, end: u32) -> Self {
        let out = self.ensure_run();
        assert_eq!(out.replace, ReplaceRange { row, start, end });
        self
    }

    /// Every non-blank candidate starts with `prefix`, and no candidate repeats.
    pub fn expect_well_formed(mut self, prefix: &str) -> Self {
        let out = self.ensure_run();
        let mut seen = std::collections::HashSet::new();
        for c in &out.candidates {
            assert!(seen.insert(c), "duplicate candidate {c:?}");
            if !c.is_empty() {
                assert!(c.starts_with(prefix), "{c:?} does not start with {prefix:?}");
            }
        }
        self
    }
}
