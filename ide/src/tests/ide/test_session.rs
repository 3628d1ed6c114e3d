use crate::tests::ide::completion_dsl::t;
use crate::{
    CompletionConfig, CompletionMode, CompletionSession, CursorToken, CursorTokenKind, Position,
    SessionState, SymbolSnapshot, TokenSource, complete,
};

#[test]
fn session_context_grows_until_reset() {
    let session = t("A = LO$0").into_session();
    let session = t("A = LOA$0").session(session).into_session();
    let mut session = t("A = LOAD$0").session(session).into_session();

    let texts: Vec<&str> = session.context().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["LO", "LOA", "LOAD"]);
    assert_eq!(session.state(), SessionState::TopLevel);

    session.reset();
    assert!(session.context().is_empty());
    assert_eq!(session, CompletionSession::new());
}

#[test]
fn session_records_substituted_tokens() {
    let session = t("a:$0").into_session();
    let token = &session.context()[0];
    assert_eq!(token.kind, CursorTokenKind::TypeMarker);
    assert!(token.is_empty());
    assert_eq!((token.start, token.end), (2, 2));
}

#[test]
fn session_identical_inputs_give_identical_output() {
    let session = CompletionSession::new();
    let first = t("B = GROUP A BY $0")
        .session(session.clone())
        .candidates();
    let second = t("B = GROUP A BY $0").session(session).candidates();
    assert_eq!(first, second);
}

/// A host tokenizer that reports one fixed token on row 0.
struct FixedToken {
    line: String,
    token: CursorToken,
}

impl TokenSource for FixedToken {
    fn token_at(&self, pos: Position) -> CursorToken {
        if pos.row == 0 && self.token.start < pos.col && pos.col <= self.token.end {
            self.token.clone()
        } else {
            CursorToken::empty_at(pos.col, CursorTokenKind::Other)
        }
    }

    fn preceding_token(&self, _row: u32, _col: u32) -> Option<CursorToken> {
        None
    }

    fn line(&self, row: u32) -> Option<&str> {
        (row == 0).then_some(self.line.as_str())
    }
}

#[test]
fn session_slash_in_host_token_enters_path_mode() {
    let source = FixedToken {
        line: "hdfs dir/fi".to_string(),
        token: CursorToken::new("dir/fi", 5, 11, CursorTokenKind::Word),
    };
    let symbols = SymbolSnapshot::new(["file.csv", "other"], ["filter_me"]);
    let mut session = CompletionSession::new();

    let out = complete(
        &mut session,
        &source,
        Position::new(0, 11),
        &symbols,
        CompletionConfig::default(),
    );

    assert_eq!(out.mode, CompletionMode::Path);
    assert_eq!(out.candidates, vec!["file.csv", ""]);
    assert_eq!((out.replace.start, out.replace.end), (9, 11));
    assert_eq!(session.state(), SessionState::InPath);
}

#[test]
fn session_cursor_past_line_end_is_clamped() {
    let source = FixedToken {
        line: "LOA".to_string(),
        token: CursorToken::new("LOA", 0, 3, CursorTokenKind::Word),
    };
    let mut session = CompletionSession::new();

    let out = complete(
        &mut session,
        &source,
        Position::new(0, 40),
        &SymbolSnapshot::default(),
        CompletionConfig::default(),
    );

    assert_eq!(out.candidates, vec!["LOAD", ""]);
    assert_eq!(out.replace.end, 3);
}

#[test]
fn session_custom_separator() {
    let config = CompletionConfig {
        path_separator: '\\',
        ..CompletionConfig::default()
    };
    let mut session = CompletionSession::new();
    let out = crate::complete_text(
        &mut session,
        r"A = LOAD 'c:\data\re",
        20,
        &SymbolSnapshot::new(["report.csv", "raw"], Vec::<String>::new()),
        config,
    );
    assert_eq!(out.candidates, vec!["report.csv", ""]);
}

/// Host that reports the same token for every position.
struct StaleToken(CursorToken);

impl TokenSource for StaleToken {
    fn token_at(&self, _pos: Position) -> CursorToken {
        self.0.clone()
    }

    fn preceding_token(&self, _row: u32, _col: u32) -> Option<CursorToken> {
        None
    }

    fn line(&self, row: u32) -> Option<&str> {
        (row == 0).then_some("'da/x")
    }
}

#[test]
fn session_host_token_at_column_limit_does_not_overflow() {
    let source = StaleToken(CursorToken::new(
        "'da/x",
        u32::MAX,
        u32::MAX,
        CursorTokenKind::PathLiteral,
    ));
    let mut session = CompletionSession::new();

    let out = complete(
        &mut session,
        &source,
        Position::new(0, 5),
        &SymbolSnapshot::new(["data.csv"], Vec::<String>::new()),
        CompletionConfig::default(),
    );

    assert_eq!(out.mode, CompletionMode::Path);
    assert!(out.replace.start <= out.replace.end);
    assert_eq!(out.replace.start, u32::MAX);
    assert_eq!(session.state(), SessionState::InPath);
}
