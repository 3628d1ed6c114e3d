//! Per-editor completion session state.

use crate::token::CursorToken;

/// Coarse session state, derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    TopLevel,
    /// Completing a file path literal. Sticky until [`CompletionSession::reset`].
    InPath,
    /// Completing a member of a `a.b.` access chain.
    InPropertyChain { depth: usize },
}

/// State carried across completion calls for one editor.
///
/// The host owns one session per editor instance and calls [`reset`](Self::reset) at
/// statement boundaries. Within a session, path mode never turns off and the context
/// stack only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSession {
    path_mode: bool,
    context: Vec<CursorToken>,
    chain_depth: usize,
}

impl CompletionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        tracing::debug!(
            path_mode = self.path_mode,
            context_len = self.context.len(),
            "resetting completion session"
        );
        *self = Self::default();
    }

    pub fn path_mode(&self) -> bool {
        self.path_mode
    }

    /// Tokens seen by this session, outermost (oldest) first.
    pub fn context(&self) -> &[CursorToken] {
        &self.context
    }

    pub fn state(&self) -> SessionState {
        if self.path_mode {
            SessionState::InPath
        } else if self.chain_depth > 0 {
            SessionState::InPropertyChain {
                depth: self.chain_depth,
            }
        } else {
            SessionState::TopLevel
        }
    }

    pub(crate) fn enter_path_mode(&mut self) {
        if !self.path_mode {
            tracing::trace!("entering path mode");
        }
        self.path_mode = true;
    }

    pub(crate) fn push_context(&mut self, token: CursorToken) {
        self.context.push(token);
    }

    pub(crate) fn observe_chain(&mut self, depth: usize) {
        self.chain_depth = self.chain_depth.max(depth);
    }
}
