#![cfg(unix)]

use openrouter_probe::config::{API_KEY_VAR, MODEL_VAR, PROMPT_FILE_VAR};
use openrouter_probe::{Config, Error};
use std::env;
use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

#[test]
fn test_non_unicode_variable_is_not_reported_as_missing() {
    env::set_var(API_KEY_VAR, "k");
    env::set_var(MODEL_VAR, OsString::from_vec(vec![b'm', 0xff, 0xfe]));
    env::set_var(PROMPT_FILE_VAR, "/tmp/p.txt");

    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_env_with(Some(dir.path().join("none.env").as_path())).unwrap_err();

    assert!(matches!(err, Error::NonUnicodeConfig(ref var) if var == MODEL_VAR));
    assert!(err.is_startup());
    assert!(err.to_string().contains("not valid unicode"));
}
