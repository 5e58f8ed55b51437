use std::{
    ffi::OsStr,
    process::{Command, Output},
};

use serde_json::{Value, json};

fn run_agent<V: AsRef<OsStr>>(labels: V, strict: bool) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_labels-agentd"));
    for var in [
        "LABELS_LOG_FORMAT",
        "LABELS_LOG_LEVEL",
        "LABELS_LOG_TZ",
        "LABELS_LOG_OUTPUT",
        "LABELS_STRICT",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("CUSTOM_LABELS", labels).env("NO_COLOR", "1");
    if strict {
        cmd.env("LABELS_STRICT", "1");
    }
    cmd.output().expect("agent binary runs")
}

#[test]
fn stdout_is_only_the_json_array() {
    let out = run_agent("a=1,bad,b=2", false);
    assert!(out.status.success(), "{out:?}");

    let parsed: Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(
        parsed,
        json!([{"key": "a", "value": "1"}, {"key": "b", "value": "2"}])
    );

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ignoring malformed label segment"), "{stderr}");
    assert!(stderr.contains("custom labels parsed"), "{stderr}");
}

#[test]
fn json_log_format_keeps_stdout_clean() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_labels-agentd"));
    let out = cmd
        .env("CUSTOM_LABELS", "environment=production")
        .env("LABELS_LOG_FORMAT", "json")
        .env("LABELS_LOG_OUTPUT", "stdout")
        .env_remove("LABELS_LOG_LEVEL")
        .env_remove("LABELS_LOG_TZ")
        .env_remove("LABELS_STRICT")
        .output()
        .expect("agent binary runs");
    assert!(out.status.success(), "{out:?}");

    let parsed: Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(parsed, json!([{"key": "environment", "value": "production"}]));
}

#[test]
fn strict_mode_exits_non_zero_on_malformed_segment() {
    let out = run_agent("a=1,bad", true);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[cfg(unix)]
mod non_utf8 {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    use super::*;

    fn raw() -> OsString {
        OsString::from_vec(b"a=\xff,b=2".to_vec())
    }

    #[test]
    fn lossy_mode_warns_and_prints_empty_array() {
        let out = run_agent(raw(), false);
        assert!(out.status.success(), "{out:?}");

        let parsed: Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
        assert_eq!(parsed, json!([]));

        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("ignoring label variable"), "{stderr}");
    }

    #[test]
    fn strict_mode_fails() {
        let out = run_agent(raw(), true);
        assert!(!out.status.success());

        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("not valid UTF-8"), "{stderr}");
    }
}
