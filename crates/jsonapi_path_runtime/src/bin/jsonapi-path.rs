//! jsonapi-path CLI entry point.

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use jsonapi_path_runtime::{PathResolver, RuntimeConfig, render};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `jsonapi_path_parser=trace`.
const LOG_ENV: &str = "JSONAPI_PATH_LOG";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    config_file: Option<PathBuf>,
    relationship_mark: Option<String>,
    paths: Vec<String>,
    json_output: bool,
    dump_config: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--json" => config.json_output = true,
            "--dump-config" => config.dump_config = true,
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("--config requires a file".into());
                }
                config.config_file = Some(PathBuf::from(&args[i]));
            }
            "--mark" => {
                i += 1;
                if i >= args.len() {
                    return Err("--mark requires a value".into());
                }
                config.relationship_mark = Some(args[i].clone());
            }
            "--" => {
                config.paths.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.paths.push(path.to_string()),
        }
        i += 1;
    }

    Ok(config)
}

/// Returns whether every path resolved.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("jsonapi-path {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let mut runtime_config = match &cli.config_file {
        Some(file) => RuntimeConfig::from_file(file)?,
        None => {
            tracing::warn!("no --config given; every path will be reported as not found");
            RuntimeConfig::default()
        }
    };
    if let Some(mark) = cli.relationship_mark {
        runtime_config.parser.relationship_mark = mark;
    }
    let resolver = PathResolver::from_config(&runtime_config)?;

    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&runtime_config)?);
        if cli.paths.is_empty() {
            return Ok(true);
        }
    }

    // Without positional paths, read one path per line from stdin
    let paths = if cli.paths.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.paths
    };

    let mut all_ok = true;
    for raw in &paths {
        let outcome = resolver.parse(raw);
        all_ok &= outcome.is_ok();

        if cli.json_output {
            let value = render::outcome_to_json(raw, &outcome, resolver.config());
            println!("{value}");
            continue;
        }

        match &outcome {
            Ok(path) => {
                println!("\x1b[1m{raw}\x1b[0m");
                println!("{}", render::describe(path, resolver.config()));
            }
            Err(err) => {
                println!("\x1b[1m{raw}\x1b[0m");
                println!(
                    "  \x1b[31m{}\x1b[0m: {err}",
                    render::error_kind_name(err)
                );
            }
        }
    }

    Ok(all_ok)
}

fn print_help() {
    println!(
        "\x1b[1mjsonapi-path\x1b[0m - Resolve JSON:API resource paths

\x1b[1mUSAGE:\x1b[0m
    jsonapi-path [OPTIONS] [PATHS...]

\x1b[1mARGUMENTS:\x1b[0m
    [PATHS...]    Paths to resolve; read from stdin when omitted

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -c, --config FILE    Resource directory configuration (JSON)
    --mark NAME          Override the relationship marker
    --json               Print one JSON object per path
    --dump-config        Print the effective configuration as JSON

\x1b[1mENVIRONMENT:\x1b[0m
    {LOG_ENV}     Log filter, e.g. jsonapi_path_parser=trace

\x1b[1mEXIT STATUS:\x1b[0m
    0    Every path resolved
    1    Invalid arguments or configuration
    2    At least one path failed to resolve

\x1b[1mEXAMPLES:\x1b[0m
    jsonapi-path -c api.json /articles/1
    jsonapi-path -c api.json --json /articles/1/relationships/author
    cat paths.txt | jsonapi-path -c api.json"
    );
}
