use gender_tally::analyzer::{create_analysis_client, parse_count_response};
use gender_tally::{AliasTable, TallyError};
use std::path::Path;

#[test]
fn unsupported_model_is_a_config_error() {
    let err = match create_analysis_client("llama-3", Some("key".to_string()), 30) {
        Ok(_) => panic!("unsupported model accepted"),
        Err(err) => err,
    };

    assert!(matches!(err, TallyError::Config(_)));
    assert_eq!(err.exit_code(), 4);
    assert!(!err.is_analysis_failure());
}

#[test]
fn missing_alias_file_is_reported() {
    let err = AliasTable::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, TallyError::AliasFile(ref msg) if msg.contains("here.json")));
}

#[test]
fn malformed_model_reply_is_analysis_failure() {
    let err = parse_count_response("Sorry, I can't count that.").unwrap_err();

    assert!(matches!(err, TallyError::InvalidResponse(_)));
    assert!(err.is_analysis_failure());
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn invalid_arguments_exit_code() {
    assert_eq!(TallyError::InvalidArguments("x".into()).exit_code(), 2);
}
