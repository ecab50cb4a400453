//! `mabk`: evaluate the MABK witness on a simulated 3-qubit GHZ state
//!
//! ```text
//! mabk four-setting [--shots N] [--seed S] [--unsigned] [--chain] [--json]
//! mabk sweep [--shots N] [--seed S] [--points P] [--output FILE] [--csv FILE]
//! mabk single [--theta T] [--shots N] [--seed S] [--json]
//! ```
//!
//! `-v` / `-vv` raise the log level; `RUST_LOG` takes precedence.

use anyhow::{anyhow, bail, Context, Result};
use mabk_backend::LocalSimulatorBackend;
use mabk_witness::logging::{init_tracing, TracingConfig};
use mabk_witness::{
    report, sweep, FourSettingWitness, GhzTopology, MabkReport, SingleCircuitWitness,
    SweepConfig, WitnessConfig,
};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::info;

const USAGE: &str = "\
usage: mabk <command> [options] [-v|-vv]

commands:
  four-setting   XXX/XYY/YXY/YYX witness
                 --shots N (8192) --seed S --unsigned --chain --json
  sweep          single-circuit witness over [0, 2π]
                 --shots N (1000) --seed S --points P (101)
                 --output FILE (mabk_violation.svg) --csv FILE
  single         single-circuit witness at one angle
                 --theta T (0) --shots N (8192) --seed S --json";

/// Flags that never take a value
const SWITCHES: &[&str] = &["unsigned", "chain", "json"];

/// Parsed command line: subcommand, `--key value` options, verbosity
struct Args {
    command: String,
    opts: HashMap<String, String>,
    verbosity: u8,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut command = None;
    let mut opts = HashMap::new();
    let mut verbosity = 0u8;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(kv) = arg.strip_prefix("--") {
            if let Some((k, v)) = kv.split_once('=') {
                opts.insert(k.to_string(), v.to_string());
            } else if SWITCHES.contains(&kv) {
                opts.insert(kv.to_string(), "true".to_string());
            } else {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("option --{kv} needs a value"))?;
                opts.insert(kv.to_string(), value.clone());
            }
        } else if arg.starts_with('-') && arg.len() > 1 && arg[1..].chars().all(|c| c == 'v') {
            verbosity = verbosity.saturating_add((arg.len() - 1) as u8);
        } else if command.is_none() {
            command = Some(arg.clone());
        } else {
            bail!("unexpected argument '{arg}'");
        }
    }

    let command = command.ok_or_else(|| anyhow!("missing command\n\n{USAGE}"))?;
    Ok(Args {
        command,
        opts,
        verbosity,
    })
}

fn parse_opt<T>(opts: &HashMap<String, String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    opts.get(key)
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| anyhow!("invalid value '{v}' for --{key}: {e}"))
        })
        .transpose()
}

fn check_known(opts: &HashMap<String, String>, known: &[&str]) -> Result<()> {
    for key in opts.keys() {
        if !known.contains(&key.as_str()) {
            bail!("unknown option --{key}\n\n{USAGE}");
        }
    }
    Ok(())
}

fn print_report(report: &MabkReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn witness_config(opts: &HashMap<String, String>) -> Result<WitnessConfig> {
    let mut config = WitnessConfig::new();
    if let Some(shots) = parse_opt(opts, "shots")? {
        config = config.with_shots(shots);
    }
    if let Some(seed) = parse_opt(opts, "seed")? {
        config = config.with_seed(seed);
    }
    if opts.contains_key("chain") {
        config = config.with_topology(GhzTopology::Chain);
    }
    Ok(config)
}

fn run_four_setting(opts: &HashMap<String, String>) -> Result<()> {
    check_known(opts, &["shots", "seed", "unsigned", "chain", "json"])?;
    let config = witness_config(opts)?;
    let strategy = if opts.contains_key("unsigned") {
        FourSettingWitness::unsigned()
    } else {
        FourSettingWitness::mabk()
    };

    let backend = LocalSimulatorBackend::try_with_config(config.backend_config())?;
    let report = report::evaluate(&strategy, &backend, &config)?;
    print_report(&report, opts.contains_key("json"))
}

fn run_single(opts: &HashMap<String, String>) -> Result<()> {
    check_known(opts, &["theta", "shots", "seed", "json"])?;
    let config = witness_config(opts)?;
    let theta: f64 = parse_opt(opts, "theta")?.unwrap_or(0.0);
    let strategy = SingleCircuitWitness::uniform(theta);

    let backend = LocalSimulatorBackend::try_with_config(config.backend_config())?;
    let report = report::evaluate(&strategy, &backend, &config)?;
    print_report(&report, opts.contains_key("json"))
}

fn run_sweep(opts: &HashMap<String, String>) -> Result<()> {
    check_known(opts, &["shots", "seed", "points", "output", "csv"])?;
    let mut config = SweepConfig::new();
    if let Some(shots) = parse_opt(opts, "shots")? {
        config = config.with_shots(shots);
    }
    if let Some(seed) = parse_opt(opts, "seed")? {
        config = config.with_seed(seed);
    }
    if let Some(points) = parse_opt(opts, "points")? {
        config = config.with_points(points);
    }
    if let Some(output) = opts.get("output") {
        config = config.with_output(output);
    }
    if let Some(csv) = opts.get("csv") {
        config = config.with_csv(csv);
    }

    let backend = LocalSimulatorBackend::try_with_config(config.backend_config())?;
    let result = sweep(&backend, &config)?;

    result
        .write_svg(&config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;
    if let Some(csv) = &config.csv {
        result
            .write_csv(csv)
            .with_context(|| format!("writing {}", csv.display()))?;
    }

    info!(
        plot = %config.output.display(),
        points = result.points.len(),
        max_abs = result.max_abs(),
        violations = result.violations(),
        "sweep written"
    );
    Ok(())
}

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let args = parse_args(&raw)?;
    init_tracing(&TracingConfig::from_verbosity(args.verbosity))?;

    match args.command.as_str() {
        "four-setting" => run_four_setting(&args.opts),
        "sweep" => run_sweep(&args.opts),
        "single" => run_single(&args.opts),
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
}
