// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use polyroot_config::{AppConfig, OutputFormat};
use polyroot_solver::{solve, verify, InputRecord, Report};
use std::io::Write;
use tracing::info;

/// Reads the configured input, solves it and writes the report to `out`.
///
/// Nothing is written unless every step succeeds.
pub fn execute(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    info!("Reading input from {}", config.input.display());
    let record = InputRecord::from_path(&config.input)?;
    let solution = solve(&record)?;

    if config.verify {
        verify(&solution)?;
    }

    let report = Report::from(&solution);
    match config.format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    fn config_for(dir: &TempDir, json: &str) -> Result<AppConfig> {
        let input = dir.path().join("input.json");
        std::fs::write(&input, json)?;
        let mut config = AppConfig::default();
        config.input = input;
        Ok(config)
    }

    fn run(config: &AppConfig) -> Result<String> {
        let mut out = Vec::new();
        execute(config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_text_output() -> Result<()> {
        let dir = tempdir()?;
        let mut config = config_for(&dir, SAMPLE)?;
        config.verify = true;

        assert_eq!(
            run(&config)?,
            "INFO:\n  n = 4, k = 3, degree m = k - 1 = 2\n  Using first 2 roots (as decimal): 4, 7\n\nPOLYNOMIAL COEFFICIENTS (descending powers):\n1 -11 28\n"
        );
        Ok(())
    }

    #[test]
    fn test_json_output() -> Result<()> {
        let dir = tempdir()?;
        let mut config = config_for(&dir, SAMPLE)?;
        config.format = OutputFormat::Json;

        let json: serde_json::Value = serde_json::from_str(&run(&config)?)?;
        assert_eq!(json["roots"], serde_json::json!(["4", "7"]));
        assert_eq!(json["coefficients"], serde_json::json!(["1", "-11", "28"]));
        Ok(())
    }

    #[test]
    fn test_failure_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let config = config_for(
            &dir,
            r#"{ "keys": { "n": 2, "k": 2 }, "1": { "base": "2", "value": "102" } }"#,
        )?;

        let mut out = Vec::new();
        let err = execute(&config, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(
            format!("{:#}", err),
            "Root 1 could not be parsed: Digit '2' invalid for base 2"
        );
        Ok(())
    }

    #[test]
    fn test_missing_input() {
        let mut config = AppConfig::default();
        config.input = Path::new("/nope/input.json").to_path_buf();

        let err = run(&config).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Could not read input file /nope/input.json"));
    }
}
