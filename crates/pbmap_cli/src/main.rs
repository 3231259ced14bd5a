use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use pbmap_cli::{load_config, run, CliError, CommandKind};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}

fn run_cli() -> Result<(), CliError> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        return Err(CliError::Usage(usage_text()));
    }
    if args[0] == "-h" || args[0] == "--help" {
        println!("{}", usage_text());
        return Ok(());
    }

    let mut config_path = None::<PathBuf>;
    let mut index = 0usize;
    while index < args.len() {
        match args[index].as_str() {
            "--config" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| usage("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
                index += 2;
            }
            _ => break,
        }
    }

    let command = args
        .get(index)
        .ok_or_else(|| usage("missing subcommand"))?
        .as_str();
    let kind = parse_command(command, &args[(index + 1)..])?;

    let config = load_config(config_path.as_deref())?;
    init_tracing(&config.log_filter);
    run(kind, &config, &mut io::stdout().lock())
}

fn parse_command(command: &str, command_args: &[String]) -> Result<CommandKind, CliError> {
    let mut positional = Vec::<&str>::new();
    let mut json = false;
    let mut records = false;
    let mut out = None::<PathBuf>;
    let mut index = 0usize;
    while index < command_args.len() {
        match command_args[index].as_str() {
            "--json" if command == "inspect" => json = true,
            "--records" if command == "unpack" || command == "fetch" => records = true,
            "--out" if command == "fetch" => {
                let value = command_args
                    .get(index + 1)
                    .ok_or_else(|| usage("missing value for --out"))?;
                out = Some(PathBuf::from(value));
                index += 1;
            }
            flag if flag.starts_with("--") => {
                return Err(usage(&format!("unknown {command} argument '{flag}'")));
            }
            value => positional.push(value),
        }
        index += 1;
    }

    let kind = match (command, positional.as_slice()) {
        ("convert", [input, output]) => CommandKind::Convert {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        },
        ("convert", _) => return Err(usage("convert requires <input> <output>")),
        ("inspect", [input]) => CommandKind::Inspect {
            input: PathBuf::from(input),
            json,
        },
        ("inspect", _) => return Err(usage("inspect requires exactly one <input>")),
        ("unpack", [input]) => CommandKind::Unpack {
            input: PathBuf::from(input),
            records,
        },
        ("unpack", _) => return Err(usage("unpack requires exactly one <qpack-file>")),
        ("fetch", [map_id]) => CommandKind::Fetch {
            map_id: map_id.to_string(),
            out,
            records,
        },
        ("fetch", _) => return Err(usage("fetch requires exactly one <map-id>")),
        (other, _) => return Err(usage(&format!("unknown subcommand '{other}'"))),
    };
    Ok(kind)
}

fn usage(message: &str) -> CliError {
    CliError::Usage(message.to_string())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn usage_text() -> String {
    [
        "pbmap - Plazma Burst 2 level tool",
        "",
        "Usage:",
        "  pbmap [--config <file>] convert <input> <output>",
        "  pbmap [--config <file>] inspect <input> [--json]",
        "  pbmap [--config <file>] unpack <qpack-file> [--records]",
        "  pbmap [--config <file>] fetch <map-id> [--out <file>] [--records]",
        "",
        "Environment:",
        "  PBMAP_CONFIG    config file used when --config is absent",
        "  PBMAP_ENDPOINT  map server URL override",
        "  RUST_LOG        log filter (default from config, else 'info')",
    ]
    .join("\n")
}
