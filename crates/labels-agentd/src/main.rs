use std::{env, io::Write};

use anyhow::Context;
use tracing::{info, warn};

use labels_model::{
    CUSTOM_LABELS_ENV, CustomLabels, LabelResult, parse_labels_report, parse_labels_strict,
    read_label_var,
};
use labels_observe::{LoggerConfig, LoggerOutput, init_logger};

/// Set to `1|true|yes|on` to fail on malformed label segments.
const ENV_STRICT: &str = "LABELS_STRICT";

fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = logger_config(LoggerConfig::from_env()?);
    init_logger(&cfg)?;

    // 2) labels
    let strict = env::var(ENV_STRICT).is_ok_and(|v| is_truthy(&v));
    let labels = collect_labels(read_label_var(CUSTOM_LABELS_ENV), strict)?;
    info!(count = labels.len(), labels = %labels, "custom labels parsed");

    // 3) output
    write_labels(std::io::stdout().lock(), &labels)
}

/// Stdout carries the JSON result, so logs always go to stderr.
fn logger_config(cfg: LoggerConfig) -> LoggerConfig {
    LoggerConfig {
        output: LoggerOutput::Stderr,
        ..cfg
    }
}

fn collect_labels(raw: LabelResult<String>, strict: bool) -> anyhow::Result<CustomLabels> {
    if strict {
        let raw = raw.with_context(|| format!("invalid {CUSTOM_LABELS_ENV}"))?;
        return parse_labels_strict(&raw).with_context(|| format!("invalid {CUSTOM_LABELS_ENV}"));
    }

    let raw = raw.unwrap_or_else(|err| {
        warn!(var = CUSTOM_LABELS_ENV, error = %err, "ignoring label variable");
        String::new()
    });

    let report = parse_labels_report(&raw);
    for dropped in report.dropped() {
        warn!(
            index = dropped.index,
            segment = %dropped.segment,
            "ignoring malformed label segment"
        );
    }
    Ok(report.into_labels())
}

fn write_labels<W: Write>(mut out: W, labels: &CustomLabels) -> anyhow::Result<()> {
    serde_json::to_writer(&mut out, labels).context("writing labels")?;
    writeln!(out).context("writing labels")?;
    Ok(())
}

fn is_truthy(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
