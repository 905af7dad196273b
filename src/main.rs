mod report;

use numcore::{Options, find_words_for_core, load_wordlist, parse_target, reduce_token_verbose_with};
use report::Row;
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const DEFAULT_WORDLIST: &str = "wordlist.txt";
const LOG_ENV: &str = "NUMCORE_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging();

    let options = Options { max_depth: config.max_depth };
    match config.mode {
        Mode::Reduce { input } => {
            let rows: Vec<Row> = input
                .split_whitespace()
                .map(|token| match reduce_token_verbose_with(token, &options) {
                    Ok(v) => Row::Reduced { result: v.result, metrics: config.verbose.then_some(v.metrics) },
                    Err(error) => Row::Rejected { token: token.to_string(), error },
                })
                .collect();
            report::print_tokens(&rows, config.color);
        }
        Mode::Reverse { target, wordlist } => {
            let words = match load_wordlist(&wordlist) {
                Ok(words) => words,
                Err(err) => {
                    eprintln!("error: failed to read word list '{wordlist}': {err}");
                    std::process::exit(1);
                }
            };
            let matches = find_words_for_core(target, &words, &options);
            report::print_matches(target, words.len(), &matches, config.color);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

enum Mode {
    Reduce { input: String },
    Reverse { target: u64, wordlist: String },
}

struct CliConfig {
    mode: Mode,
    max_depth: usize,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut target: Option<u64> = None;
    let mut wordlist = DEFAULT_WORDLIST.to_string();
    let mut max_depth = Options::DEFAULT_MAX_DEPTH;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("numcore {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" | "--verbose" => verbose = true,
            "--max-depth" => {
                let value = args.next().ok_or_else(|| "error: --max-depth expects a value".to_string())?;
                max_depth = parse_max_depth(&value)?;
            }
            "--reverse" | "-r" => {
                let value = args.next().ok_or_else(|| "error: --reverse expects a value".to_string())?;
                target = Some(parse_target(&value).map_err(|err| format!("error: {err}"))?);
            }
            "--wordlist" | "-w" => {
                wordlist = args.next().ok_or_else(|| "error: --wordlist expects a value".to_string())?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--max-depth=") => {
                max_depth = parse_max_depth(arg.trim_start_matches("--max-depth="))?;
            }
            _ if arg.starts_with("--reverse=") => {
                let value = arg.trim_start_matches("--reverse=");
                target = Some(parse_target(value).map_err(|err| format!("error: {err}"))?);
            }
            _ if arg.starts_with("--wordlist=") => {
                wordlist = arg.trim_start_matches("--wordlist=").to_string();
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !arg[1..].bytes().all(|b| b.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                input = Some(rest);
                break;
            }
        }
    }

    let mode = match target {
        Some(target) => {
            if input.is_some() {
                return Err("error: --reverse does not take input tokens".to_string());
            }
            Mode::Reverse { target, wordlist }
        }
        None => {
            let input = match input {
                Some(value) => value,
                None => read_stdin_input()?,
            };
            if input.trim().is_empty() {
                return Err(format!("error: no input provided\n\n{}", help_text()));
            }
            Mode::Reduce { input }
        }
    };

    Ok(CliConfig { mode, max_depth, verbose, color })
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("error: invalid --max-depth '{value}' (expected a positive integer)")),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "numcore {version}

Numeric core solver: reduces four-letter words and numbers to a minimal
positive core using one each of -, *, / over 1-2 digit operand chunks.

Usage:
  numcore [OPTIONS] [--] <token...>
  numcore [OPTIONS] --reverse <target> [--wordlist <path>]

Tokens are read from the remaining args, or from stdin when none are given.
Alphabetic tokens must have exactly four letters (A=1 .. Z=26); any token
containing digits is reduced from its digits alone.

Options:
  -r, --reverse <target>     Find words whose core equals <target> (a number,
                             or a single letter A-Z).
  -w, --wordlist <path>      Word list for --reverse. Default: {default_wordlist}
  --max-depth <n>            Maximum reduction stages per token. Default: {default_depth}
  -v, --verbose              Print per-stage search metrics.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                  Log filter (e.g. debug, numcore=trace). Default: warn

Exit codes:
  0  Success.
  1  Word list could not be read.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_wordlist = DEFAULT_WORDLIST,
        default_depth = Options::DEFAULT_MAX_DEPTH,
        log_env = LOG_ENV,
    )
}
