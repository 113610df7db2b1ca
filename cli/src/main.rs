use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use command_tokenizer::{ParsedArg, Tokenizer, suggest};
use command_tokenizer_core::{Command as CommandSchema, load_command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Output format for the event stream.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "cmd-tokenize")]
#[command(about = "Tokenize argument lists against a declarative command schema")]
struct Cli {
    /// Log resolver decisions to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the events produced for the tokens after `--`.
    Parse(ParseArgs),
    /// Print completion candidates for a partial command line after `--`.
    Complete(CompleteArgs),
    /// Compile a schema and report option conflicts.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    schema: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Argument tokens, without the program name.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct CompleteArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    schema: PathBuf,
    /// Emit the completion as JSON instead of one word per line.
    #[arg(long)]
    json: bool,
    /// The partial command line, starting with the program name. Pass an
    /// empty last token when the cursor follows a space.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Schema files (JSON or YAML).
    #[arg(long, required = true, num_args = 1..)]
    schema: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Complete(args) => run_complete(args),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn read_schema(path: &Path) -> Result<CommandSchema, String> {
    load_command(path).map_err(|err| format!("Failed to load schema '{}': {err}", path.display()))
}

// ---------------------------------------------------------------------------
// parse command
// ---------------------------------------------------------------------------

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let schema = read_schema(&args.schema)?;
    let tokenizer = Tokenizer::new(&schema).map_err(|err| err.to_string())?;
    let events = tokenizer
        .tokenize(&args.tokens)
        .map_err(|err| err.to_string())?;
    debug!(tokens = args.tokens.len(), events = events.len(), "Parsed tokens");

    print!("{}", format_events(&events, args.format)?);
    Ok(())
}

fn format_events(events: &[ParsedArg], format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(events)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("Failed to serialize output: {e}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(events).map_err(|e| format!("Failed to serialize output: {e}"))
        }
        CliOutputFormat::Text => Ok(events
            .iter()
            .map(|event| format!("{event}\n"))
            .collect()),
    }
}

// ---------------------------------------------------------------------------
// complete command
// ---------------------------------------------------------------------------

fn run_complete(args: CompleteArgs) -> Result<(), String> {
    let schema = read_schema(&args.schema)?;

    // A partially typed last word is completed from the state before it.
    let mut replay = args.tokens.clone();
    let has_words = replay.len() > 1;
    let prefix = match replay.last_mut() {
        Some(last) if has_words => std::mem::take(last),
        _ => String::new(),
    };
    let completion = suggest(&schema, &replay).map_err(|err| err.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&completion)
            .map_err(|e| format!("Failed to serialize output: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    // A leading marker line lets a shell script switch to file completion.
    if completion.expects_path() {
        println!("#path");
    } else if let Some(kind) = completion.value_hint {
        println!("#value:{kind}");
    }
    for word in completion.matching(&prefix) {
        println!("{word}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// check command
// ---------------------------------------------------------------------------

fn run_check(args: CheckArgs) -> Result<(), String> {
    let mut failures = 0usize;
    for path in &args.schema {
        let outcome = read_schema(path).and_then(|schema| {
            Tokenizer::new(&schema)
                .map(|tokenizer| tokenizer.registry().option_names().count())
                .map_err(|err| format!("{}: {err}", path.display()))
        });

        match outcome {
            Ok(options) => println!("{}: ok ({options} options)", path.display()),
            Err(err) => {
                eprintln!("{err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} schema(s) failed to compile"));
    }
    Ok(())
}
