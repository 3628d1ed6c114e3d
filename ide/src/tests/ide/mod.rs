mod completion_dsl;
mod test_completion_member;
mod test_completion_types;
mod test_session;
