mod scan_report;

use std::error::Error;
use std::io::{self, BufRead, IsTerminal};
use strmask::{Options, StringMask, TokenCatalog};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STRMASK_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging();

    let masker = match build_masker(&config) {
        Ok(masker) => masker,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let values = match config.values {
        Some(values) => values,
        None => match read_stdin_values() {
            Ok(values) => values,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
    };

    let mut invalid = 0usize;
    for value in &values {
        if config.trace {
            let report = masker.process_verbose(value);
            if !report.outcome.valid {
                invalid += 1;
            }
            scan_report::print_report(&report, config.color);
        } else {
            let outcome = masker.process(value);
            if !outcome.valid {
                invalid += 1;
                if config.check {
                    eprintln!("invalid: \"{value}\" -> \"{}\"", outcome.result);
                }
            }
            println!("{outcome}");
        }
    }

    if config.check && invalid > 0 {
        std::process::exit(1);
    }
}

struct CliConfig {
    mask: String,
    values: Option<Vec<String>>,
    reverse: bool,
    use_defaults: Option<bool>,
    tokens: Option<String>,
    trace: bool,
    check: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut mask: Option<String> = None;
    let mut values: Vec<String> = Vec::new();
    let mut reverse = false;
    let mut use_defaults: Option<bool> = None;
    let mut tokens: Option<String> = None;
    let mut trace = false;
    let mut check = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("strmask {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-r" | "--reverse" => reverse = true,
            "--defaults" => use_defaults = Some(true),
            "--no-defaults" => use_defaults = Some(false),
            "--trace" => trace = true,
            "--check" => check = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "-m" | "--mask" => {
                let value = args.next().ok_or_else(|| "error: --mask expects a value".to_string())?;
                set_mask(&mut mask, value)?;
            }
            "-t" | "--tokens" => {
                let value = args.next().ok_or_else(|| "error: --tokens expects a file".to_string())?;
                tokens = Some(value);
            }
            "--" => {
                values.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--mask=") => {
                set_mask(&mut mask, arg.trim_start_matches("--mask=").to_string())?;
            }
            _ if arg.starts_with("--tokens=") => {
                tokens = Some(arg.trim_start_matches("--tokens=").to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => values.push(arg),
        }
    }

    let Some(mask) = mask else {
        return Err(format!("error: no mask provided\n\n{}", help_text()));
    };

    let values = if values.is_empty() { None } else { Some(values) };

    Ok(CliConfig { mask, values, reverse, use_defaults, tokens, trace, check, color })
}

fn set_mask(mask: &mut Option<String>, value: String) -> Result<(), String> {
    if mask.is_some() {
        return Err("error: mask provided multiple times".to_string());
    }
    *mask = Some(value);
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn build_masker(config: &CliConfig) -> Result<StringMask, String> {
    let options = Options { reverse: config.reverse, use_defaults: config.use_defaults };

    let Some(path) = &config.tokens else {
        return Ok(StringMask::with_options(config.mask.clone(), options));
    };

    let json = std::fs::read_to_string(path).map_err(|err| format!("error: failed to read '{path}': {err}"))?;
    let mut catalog = TokenCatalog::standard();
    catalog.extend_from_json(&json).map_err(|err| {
        let mut message = format!("error: {path}: {err}");
        if let Some(source) = err.source().map(|s| s.to_string()).filter(|s| !message.contains(s.as_str())) {
            message.push_str(&format!(": {source}"));
        }
        message
    })?;
    tracing::debug!(path = %path, tokens = catalog.len(), "loaded token catalog");

    Ok(StringMask::with_catalog(config.mask.clone(), options, catalog))
}

fn read_stdin_values() -> Result<Vec<String>, String> {
    let mut values = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| format!("error: failed to read stdin: {err}"))?;
        values.push(line.trim_end_matches('\r').to_string());
    }
    Ok(values)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "strmask {version}

Format and validate values against a positional mask.

Usage:
  strmask [OPTIONS] --mask <pattern> [--] <value...>
  strmask [OPTIONS] --mask <pattern> < values.txt

Options:
  -m, --mask <pattern>       Mask to apply.
  -r, --reverse              Scan mask and value right-to-left.
  --defaults                 Fill unmet required tokens with their default.
  --no-defaults              Never fill defaults.
                             Default: on with --reverse, off otherwise.
  -t, --tokens <file.json>   Add or override tokens from a JSON catalog.
  --trace                    Print a step-by-step scan report per value.
  --check                    Exit with 1 if any value is invalid.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Values are read from the remaining arguments, or one per line from stdin
when none are given.

Environment:
  {log_env}                Log filter, e.g. {log_env}=strmask=trace

Exit codes:
  0  Success.
  1  At least one invalid value (with --check).
  2  Invalid arguments or token catalog.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
