// Integration tests for settings loading through the public API.
// Process-environment tests go through temp-env, which serializes access.

use evidence_anchor::{Settings, SettingsLoader};
use proptest::prelude::*;
use proptest::sample::select;
use std::fs;
use tempfile::TempDir;

const ALL_VARS: [&str; 6] = [
    "GOOGLE_APPLICATION_CREDENTIALS",
    "GEMINI_API_KEY",
    "POLYGON_RPC_URL",
    "PRIVATE_KEY",
    "CONTRACT_ADDRESS",
    "FRONTEND_URL",
];

fn project_dir(env_contents: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    if let Some(contents) = env_contents {
        fs::write(dir.path().join(".env"), contents).unwrap();
    }
    dir
}

#[test]
fn test_no_overrides_yields_documented_defaults() {
    let dir = project_dir(None);

    temp_env::with_vars_unset(ALL_VARS, || {
        let settings = SettingsLoader::load_from_file(dir.path().join(".env")).unwrap();

        assert_eq!(settings.rpc_url(), "http://127.0.0.1:8545");
        assert_eq!(settings.frontend_url(), "http://localhost:5173");
        assert_eq!(
            settings.credentials_path(),
            std::path::Path::new("google_creds.json")
        );
        assert_eq!(settings.ai_api_key(), "");
        assert_eq!(settings.private_key(), "");
        assert_eq!(settings.contract_address(), "");
    });
}

#[test]
fn test_contract_address_from_environment() {
    let dir = project_dir(None);

    temp_env::with_var("CONTRACT_ADDRESS", Some("0xABC123"), || {
        let settings = SettingsLoader::load_from_file(dir.path().join(".env")).unwrap();
        assert_eq!(settings.contract_address(), "0xABC123");
    });
}

#[test]
fn test_environment_outranks_env_file() {
    let dir = project_dir(Some(
        "POLYGON_RPC_URL=https://rpc-amoy.polygon.technology\nGEMINI_API_KEY=file-key\n",
    ));

    temp_env::with_vars(
        [
            ("POLYGON_RPC_URL", Some("https://polygon-rpc.com")),
            ("GEMINI_API_KEY", None),
        ],
        || {
            let settings = SettingsLoader::load_from_file(dir.path().join(".env")).unwrap();
            assert_eq!(settings.rpc_url(), "https://polygon-rpc.com");
            assert_eq!(settings.ai_api_key(), "file-key");
        },
    );
}

#[test]
fn test_unrecognized_keys_do_not_fail() {
    let dir = project_dir(Some("VITE_API_URL=http://localhost:8000/api\nCHAIN_ID=31337\n"));

    temp_env::with_vars(
        [
            ("EVIDENCE_ANCHOR_UNKNOWN", Some("1")),
            ("ANOTHER_UNRELATED_KEY", Some("value")),
        ],
        || {
            let settings = SettingsLoader::load_from_file(dir.path().join(".env")).unwrap();
            assert_eq!(settings.extra("vite_api_url"), Some("http://localhost:8000/api"));
            assert_eq!(settings.extra("chain_id"), Some("31337"));
            assert_eq!(settings.extra("evidence_anchor_unknown"), None);
        },
    );
}

#[test]
fn test_repeated_loads_are_equal() {
    let dir = project_dir(Some("FRONTEND_URL=https://app.example\n"));

    temp_env::with_var("PRIVATE_KEY", Some("0xfeed"), || {
        let first = SettingsLoader::load_from_file(dir.path().join(".env")).unwrap();
        let second = SettingsLoader::load_from_file(dir.path().join(".env")).unwrap();
        assert_eq!(first, second);
    });
}

#[test]
fn test_loading_does_not_touch_process_environment() {
    let dir = project_dir(Some("CONTRACT_ADDRESS=0xFILE\n"));

    temp_env::with_vars_unset(ALL_VARS, || {
        let settings = SettingsLoader::load_from_file(dir.path().join(".env")).unwrap();
        assert_eq!(settings.contract_address(), "0xFILE");
        assert!(std::env::var("CONTRACT_ADDRESS").is_err());
    });
}

#[test]
fn test_debug_output_hides_secrets() {
    let settings = SettingsLoader::new()
        .without_env_file()
        .environment([("PRIVATE_KEY", "0xverysecret"), ("GEMINI_API_KEY", "AIzaSecret")])
        .resolve()
        .unwrap();

    let debug = format!("{settings:?}");
    assert!(!debug.contains("0xverysecret"));
    assert!(!debug.contains("AIzaSecret"));
    assert_eq!(settings.private_key(), "0xverysecret");
}

proptest! {
    #[test]
    fn prop_environment_value_is_loaded_verbatim(
        field in select(Settings::FIELDS),
        value in ".*",
    ) {
        let settings = SettingsLoader::new()
            .without_env_file()
            .environment([(field.env_var, value.as_str())])
            .resolve()
            .unwrap();

        prop_assert_eq!(settings.field_value(field.name), Some(value.as_str()));
        for other in Settings::FIELDS.iter().filter(|other| other.name != field.name) {
            prop_assert_eq!(settings.field_value(other.name), Some(other.default));
        }
    }

    #[test]
    fn prop_environment_beats_file(
        field in select(Settings::FIELDS),
        file_value in "[A-Za-z0-9_./:-]{1,40}",
        env_value in "[A-Za-z0-9_./:-]{1,40}",
    ) {
        let dir = project_dir(Some(&format!("{}={}\n", field.env_var, file_value)));

        let settings = SettingsLoader::new()
            .env_file(dir.path().join(".env"))
            .environment([(field.env_var, env_value.as_str())])
            .resolve()
            .unwrap();

        prop_assert_eq!(settings.field_value(field.name), Some(env_value.as_str()));
    }
}
