use std::path::PathBuf;

use docquill::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use docquill::template::{TagDetection, TemplateScope};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".docquillrc");
    let content = r#"
# comment
--dict fields.json

--scope outside

--limit=4
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.dict, Some(PathBuf::from("fields.json")));
    assert_eq!(flags.scope, Some(TemplateScope::OutsideTags));
    assert_eq!(flags.limit, Some(4));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".docquillrc");
    let content = "--dict file.json\n--scope outside\n--limit 4\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "docquill".to_string(),
        "--scope".to_string(),
        "anywhere".to_string(),
        "--detect".to_string(),
        "scan".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert_eq!(
        effective.dict,
        Some(PathBuf::from("file.json")),
        "file config should be preserved when CLI does not override"
    );
    assert_eq!(effective.scope, Some(TemplateScope::Anywhere), "cli should override scope");
    assert_eq!(effective.detect, Some(TagDetection::Scan), "cli flags should be applied");
    assert_eq!(effective.limit, Some(4));
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "docquill".to_string(),
        "--scope=inside".to_string(),
        "--dict=fields.json5".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.scope, Some(TemplateScope::InsideTags));
    assert_eq!(flags.dict, Some(PathBuf::from("fields.json5")));
}

#[test]
fn test_local_overrides_global() {
    let global = ConfigFlags {
        dict: Some(PathBuf::from("global.json")),
        limit: Some(10),
        ..ConfigFlags::default()
    };
    let local = ConfigFlags {
        dict: Some(PathBuf::from("local.json")),
        ..ConfigFlags::default()
    };
    let merged = global.union(&local);
    assert_eq!(merged.dict, Some(PathBuf::from("local.json")));
    assert_eq!(merged.limit, Some(10));
}
