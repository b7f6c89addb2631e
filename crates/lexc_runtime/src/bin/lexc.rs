//! Lexc CLI entry point.

use lexc_runtime::logging;
use lexc_runtime::{Language, Repl, RuntimeConfig, Session, load_from_file, save_to_file};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line options and actions.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    lect: Option<String>,
    seed: Option<u64>,
    log: Option<String>,
    case_sensitive: Option<bool>,
    // Actions
    transcribe: Vec<String>,
    generate: Option<usize>,
    complete: Option<String>,
    retranscribe: bool,
    save: Option<PathBuf>,
}

impl CliConfig {
    fn has_actions(&self) -> bool {
        !self.transcribe.is_empty()
            || self.generate.is_some()
            || self.complete.is_some()
            || self.retranscribe
            || self.save.is_some()
    }

    fn runtime_config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::default()
            .with_log_filter(logging::resolve_filter(self.log.as_deref()))
            .with_batch(self.batch_mode || self.has_actions())
            .with_banner(self.file.is_none());
        if let Some(lect) = &self.lect {
            config = config.with_lect(lect.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(case_sensitive) = self.case_sensitive {
            config = config.with_case_sensitive(case_sensitive);
        }
        config
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Returns the value following option `name`, advancing `i`.
fn value<'a>(args: &'a [String], i: &mut usize, name: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{name} requires a value"))
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--case-sensitive" => config.case_sensitive = Some(true),
            "--ignore-case" => config.case_sensitive = Some(false),
            "--retranscribe" => config.retranscribe = true,
            "--lect" => config.lect = Some(value(&args, &mut i, "--lect")?.to_string()),
            "--log" => config.log = Some(value(&args, &mut i, "--log")?.to_string()),
            "--seed" => {
                let raw = value(&args, &mut i, "--seed")?;
                config.seed = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --seed value: {raw}"))?,
                );
            }
            "--transcribe" | "-t" => {
                config
                    .transcribe
                    .push(value(&args, &mut i, "--transcribe")?.to_string());
            }
            "--generate" | "-g" => {
                let raw = value(&args, &mut i, "--generate")?;
                config.generate = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --generate value: {raw}"))?,
                );
            }
            "--complete" => {
                config.complete = Some(value(&args, &mut i, "--complete")?.to_string());
            }
            "--save" => config.save = Some(PathBuf::from(value(&args, &mut i, "--save")?)),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("lexc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = cli.runtime_config();
    logging::init(&config.log_filter)?;

    let language = match &cli.file {
        Some(path) => load_from_file(path)?,
        None => Language::default(),
    };
    let mut session = Session::from_config(language, &config);
    if let Some(path) = &cli.file {
        session.set_path(path.clone());
    }
    session.language().require_lect(&config.lect)?;
    let lect = config.lect.as_str();

    if cli.retranscribe {
        let updated = session.retranscribe_all()?;
        eprintln!("re-transcribed {updated} pronunciations");
    }

    for text in &cli.transcribe {
        println!("{}", session.transcribe(text, lect)?);
    }

    if let Some(count) = cli.generate {
        for _ in 0..count {
            match session.generate_word(lect)? {
                Some(word) => println!("{word}"),
                None => eprintln!("no legal word found"),
            }
        }
    }

    if let Some(trial) = &cli.complete {
        match session.complete_word(trial, lect)? {
            Some(word) => println!("{word}"),
            None => eprintln!("completion of '{trial}' has an illegal sequence"),
        }
    }

    if let Some(path) = &cli.save {
        save_to_file(session.language(), path)?;
        eprintln!("saved {}", path.display());
    }

    if config.batch {
        return Ok(());
    }

    let mut repl = Repl::new(session)?.with_lect(lect)?;
    if !config.show_banner {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mlexc\x1b[0m - Pronunciation rules and word generation for constructed languages

\x1b[1mUSAGE:\x1b[0m
    lexc [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    Language document to load (.json, or a MessagePack snapshot)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Run actions and exit (no REPL)
    --lect NAME            Lect to use (default: General)
    --seed N               Seed the word generator
    --case-sensitive       Rules distinguish letter case
    --ignore-case          Rules ignore letter case
    --log FILTER           Log filter (default: $LEXC_LOG, then warn)

\x1b[1mACTIONS:\x1b[0m
    -t, --transcribe TEXT  Transcribe TEXT (repeatable)
    -g, --generate N       Generate N words
    --complete TRIAL       Complete a partial word
    --retranscribe         Re-transcribe every regular pronunciation
    --save PATH            Save the document to PATH

\x1b[1mEXAMPLES:\x1b[0m
    lexc                                 Start the REPL on an empty language
    lexc kethic.json                     Load kethic.json, then start the REPL
    lexc kethic.json -t 'sha tesh'       Transcribe a phrase and exit
    lexc kethic.json --seed 7 -g 10      Generate ten words reproducibly
    lexc old.json --retranscribe --save new.json

Any action implies --batch."
    );
}
