//! Hallway estimator CLI.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                         # Default: 10,000 runs per policy
//!   cargo run -- -n 1000 -l 8         # 1000 runs, 8 levels to clear
//!   cargo run -- --seed 42 --report   # Reproducible run with full report

use hallway_estimator::build_info;
use hallway_estimator::simulator::{run_estimation, EstimatorConfig};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'hallway-estimator --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    let default_filter = if options.config.verbosity >= 2 {
        "hallway_estimator=debug"
    } else {
        "hallway_estimator=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = match run_estimation(&options.config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if options.full_report {
        println!("{}", report.to_text());
    } else {
        for line in report.summary_lines() {
            println!("{}", line);
        }
    }

    if options.json {
        let filename = format!(
            "estimate_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

struct CliOptions {
    config: EstimatorConfig,
    full_report: bool,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        config: EstimatorConfig::default(),
        full_report: false,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => options.config.test_iterations = parse_value(args, &mut i)?,
            "-s" | "--seed" => options.config.seed = Some(parse_value(args, &mut i)?),
            "-p" | "--probability" => {
                options.config.hallway.success_probability = parse_value(args, &mut i)?
            }
            "-m" | "--memory-probability" => {
                options.config.hallway.success_probability_with_memory =
                    parse_value(args, &mut i)?
            }
            "-l" | "--levels" => options.config.hallway.level_count = parse_value(args, &mut i)?,
            "-r" | "--rage-quit" => {
                options.config.hallway.rage_quit_count = parse_value(args, &mut i)?
            }
            "--halls" => options.config.hallway.max_hall_number = parse_value(args, &mut i)?,
            "--quick" => {
                options.config.test_iterations = EstimatorConfig::quick().test_iterations;
            }
            "-v" | "--verbose" => options.config.verbosity = 2,
            "--report" => options.full_report = true,
            "--json" => options.json = true,
            "--version" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

/// Parse the value following the flag at `args[*i]`, advancing `i` past it.
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = &args[*i];
    let raw = args
        .get(*i + 1)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    *i += 1;
    raw.parse()
        .map_err(|_| format!("{} got an invalid value: {}", flag, raw))
}

fn print_help() {
    println!("Hallway Estimator");
    println!();
    println!("USAGE:");
    println!("    hallway-estimator [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>                Runs per policy (default: 10,000)");
    println!("    -s, --seed <S>                Random seed for reproducibility");
    println!("    -p, --probability <P>         Chance to clear an unseen hallway (default: 0.75)");
    println!("    -m, --memory-probability <P>  Chance to clear a seen hallway (default: 0.9)");
    println!("    -l, --levels <L>              Hallways to clear in a row (default: 5)");
    println!("    -r, --rage-quit <R>           Attempts before giving up (default: 1000)");
    println!("    --halls <H>                   Number of hallway layouts (default: 15)");
    println!("    --quick                       Quick estimate (1000 runs per policy)");
    println!("    --report                      Print the full text report");
    println!("    --json                        Save JSON report");
    println!("    -v, --verbose                 Log every simulated run");
    println!("    --version                     Show version information");
    println!("    -h, --help                    Show this help");
}
