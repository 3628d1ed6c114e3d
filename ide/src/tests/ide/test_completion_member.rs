use crate::tests::ide::completion_dsl::{symbols, t};
use crate::{CompletionMode, SessionState};

fn scope() -> crate::SymbolSnapshot {
    symbols().vars(&["users_raw"]).users_relation().build()
}

#[test]
fn completion_after_dot_lists_members() {
    let session = t("B = FOREACH users GENERATE users.$0")
        .symbols(scope())
        .expect_mode(CompletionMode::Member)
        .expect_candidates(&["address", "age", "name", "normalize()"])
        .into_session();
    assert_eq!(session.state(), SessionState::InPropertyChain { depth: 1 });
}

#[test]
fn completion_member_prefix_filters() {
    t("users.a$0")
        .symbols(scope())
        .expect_candidates(&["address", "age"])
        .expect_replace_text("a");
}

#[test]
fn completion_nested_member_chain() {
    let session = t("users.address.$0")
        .symbols(scope())
        .expect_candidates(&["city", "zip"])
        .into_session();
    assert_eq!(session.state(), SessionState::InPropertyChain { depth: 2 });
}

#[test]
fn completion_member_chain_depth_only_grows() {
    let session = t("users.address.$0").symbols(scope()).into_session();
    let session = t("users.$0").session(session).symbols(scope()).into_session();
    assert_eq!(session.state(), SessionState::InPropertyChain { depth: 2 });
}

#[test]
fn completion_unresolved_receivers_yield_nothing() {
    t("unknown.$0").symbols(scope()).expect_empty();
    t("users.name.$0").symbols(scope()).expect_empty();
    t("users.address.city.$0").symbols(scope()).expect_empty();
    t("TOTUPLE(x).$0").symbols(scope()).expect_empty();
}

#[test]
fn completion_member_mode_excludes_vocabulary() {
    t("users.CO$0").symbols(scope()).expect_empty();
    t("users.n$0")
        .symbols(scope())
        .expect_candidates(&["name", "normalize()"])
        .expect_not_contains(&["not", "null"]);
}
