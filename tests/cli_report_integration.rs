use std::process::Command;

#[derive(Debug)]
struct Summary {
    annual_savings_kwh: f64,
    reduced_usage_kwh: f64,
    cost_saved_usd: f64,
}

#[test]
fn report_uses_built_in_defaults() {
    let summary = run_and_parse(&["report"]);
    assert_eq!(summary.annual_savings_kwh, 100.0);
    assert_eq!(summary.reduced_usage_kwh, 11_900.0);
    assert!((summary.cost_saved_usd - 120.0).abs() < 1e-6);
}

#[test]
fn report_honors_selection_flag() {
    let summary = run_and_parse(&["report", "--select", "M1,M2,M3"]);
    assert_eq!(summary.annual_savings_kwh, 300.0);
    assert_eq!(summary.reduced_usage_kwh, 11_700.0);
}

#[test]
fn report_reads_configuration_file() {
    let summary = run_and_parse(&["--config", "configs/high_rate.toml", "report"]);
    // HP + LED over 15 years at $0.30/kWh
    assert_eq!(summary.annual_savings_kwh, 2_050.0);
    assert_eq!(summary.reduced_usage_kwh, 6_950.0);
    assert!((summary.cost_saved_usd - 9_225.0).abs() < 1e-6);
}

#[test]
fn report_rejects_unknown_measure() {
    let output = Command::new(env!("CARGO_BIN_EXE_solar-savings"))
        .args(["report", "--select", "M1,NOPE"])
        .env_remove("SOLAR_SAVINGS_CONFIG")
        .output()
        .expect("solar-savings process should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NOPE"), "stderr: {stderr}");
}

fn run_and_parse(args: &[&str]) -> Summary {
    let output = Command::new(env!("CARGO_BIN_EXE_solar-savings"))
        .args(args)
        .env_remove("SOLAR_SAVINGS_CONFIG")
        .output()
        .expect("solar-savings process should run");

    assert!(
        output.status.success(),
        "report failed for {args:?}: stderr={} ",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    Summary {
        annual_savings_kwh: parse_metric(&stdout, "Annual savings:", "kWh"),
        reduced_usage_kwh: parse_metric(&stdout, "Reduced annual usage:", "kWh"),
        cost_saved_usd: parse_metric(&stdout, "Cost saved:", "USD"),
    }
}

fn parse_metric(stdout: &str, label: &str, unit: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing summary line `{label}` in output: {stdout}"));

    let raw = line
        .split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid summary format for line `{line}`"));

    let numeric = raw.strip_suffix(unit).unwrap_or(raw).trim();
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from summary line `{line}`"))
}
