use crate::CompletionMode;
use crate::tests::ide::completion_dsl::{symbols, t};

#[test]
fn completion_after_colon_lists_lower_case_types() {
    t("A = LOAD 'x' AS (name:$0")
        .expect_mode(CompletionMode::TypeAnnotation)
        .expect_candidates(&[
            "bag",
            "boolean",
            "bytearray",
            "chararray",
            "double",
            "float",
            "int",
            "long",
            "map",
            "tuple",
        ])
        .expect_replace(0, 22, 22);
}

#[test]
fn completion_type_name_prefix_after_colon() {
    t("(name:ch$0")
        .expect_mode(CompletionMode::TypeAnnotation)
        .expect_candidates(&["chararray", ""])
        .expect_replace_text("ch");
    t("(name:b$0").expect_candidates(&["bag", "boolean", "bytearray"]);
}

#[test]
fn completion_type_annotation_ignores_variables() {
    t("(name:$0")
        .symbols(symbols().vars(&["bagged"]).build())
        .expect_not_contains(&["bagged", "BAG", "LOAD"]);
}

#[test]
fn completion_double_colon_is_not_a_type_annotation() {
    t("B = FOREACH C GENERATE A::$0")
        .expect_mode(CompletionMode::General)
        .expect_contains(&["LOAD", "COUNT()"]);
}

#[test]
fn completion_space_after_colon_falls_back_to_general() {
    t("x ? 1 : $0")
        .expect_mode(CompletionMode::General)
        .expect_contains(&["NULL", "null"]);
}
