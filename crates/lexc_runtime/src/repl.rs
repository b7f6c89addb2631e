//! The interactive REPL.
//!
//! Plain input is transcribed in the current lect. Lines starting with `:`
//! are commands; see [`Command`].

use std::io::{self, Write};
use std::path::PathBuf;

use lexc_foundation::{Error, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::serialize::{load_from_file, save_to_file};
use crate::session::Session;

/// Number of words `:gen` produces without an argument.
const DEFAULT_GENERATE_COUNT: usize = 1;

const COMMANDS: [&str; 11] = [
    ":gen",
    ":complete",
    ":lect",
    ":rule",
    ":rules",
    ":add",
    ":load",
    ":save",
    ":help",
    ":quit",
    ":q",
];

/// A parsed line of REPL input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Transcribe text in the current lect.
    Transcribe(String),
    /// `:gen [n]` generates `n` words.
    Generate(usize),
    /// `:complete <trial>` completes a partial word.
    Complete(String),
    /// `:lect [name]` shows or switches the current lect.
    Lect(Option<String>),
    /// `:rule <line>` appends a rule line to the current lect.
    Rule(String),
    /// `:rules` shows the current lect's rule text.
    Rules,
    /// `:add <word>` adds a word to the lexicon.
    Add(String),
    /// `:load <path>` replaces the document.
    Load(PathBuf),
    /// `:save [path]` writes the document.
    Save(Option<PathBuf>),
    /// `:help` lists commands.
    Help,
    /// `:quit` leaves the REPL.
    Quit,
}

impl Command {
    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns a parse error for unknown commands or missing arguments.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let Some(rest) = input.strip_prefix(':') else {
            return Ok(Self::Transcribe(input.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let arg = (!arg.is_empty()).then_some(arg);

        match (name, arg) {
            ("gen" | "g", None) => Ok(Self::Generate(DEFAULT_GENERATE_COUNT)),
            ("gen" | "g", Some(n)) => n
                .parse()
                .map(Self::Generate)
                .map_err(|_| parse_error(input, format!("invalid count: {n}"))),
            ("complete" | "c", Some(trial)) => Ok(Self::Complete(trial.to_string())),
            ("lect", lect) => Ok(Self::Lect(lect.map(str::to_string))),
            ("rule", Some(line)) => Ok(Self::Rule(line.to_string())),
            ("rules", None) => Ok(Self::Rules),
            ("add", Some(word)) => Ok(Self::Add(word.to_string())),
            ("load", Some(path)) => Ok(Self::Load(PathBuf::from(path))),
            ("save", path) => Ok(Self::Save(path.map(PathBuf::from))),
            ("help" | "h" | "?", None) => Ok(Self::Help),
            ("quit" | "q", None) => Ok(Self::Quit),
            ("complete" | "c" | "rule" | "add" | "load", None) => {
                Err(parse_error(input, format!(":{name} requires an argument")))
            }
            ("rules" | "help" | "h" | "?" | "quit" | "q", Some(_)) => {
                Err(parse_error(input, format!(":{name} takes no argument")))
            }
            _ => Err(parse_error(input, format!("unknown command: :{name}"))),
        }
    }
}

fn parse_error(input: &str, message: String) -> Error {
    Error::new(ErrorKind::ParseError {
        message,
        line: 1,
        column: 1,
        context: input.to_string(),
    })
}

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Lines to print.
    Output(Vec<String>),
    /// Leave the REPL.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// Input source.
    editor: E,

    /// Session state.
    session: Session,

    /// Lect used for transcription, generation and rule edits.
    lect: String,

    /// Print the banner on `run`.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Opens a terminal REPL over `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be opened.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Builds a REPL that reads from `editor`.
    pub fn with_editor(editor: E, session: Session) -> Self {
        let lect = session
            .language()
            .lects
            .first()
            .cloned()
            .unwrap_or_else(|| lexc_foundation::GENERAL_LECT.to_string());
        let mut repl = Self {
            editor,
            session,
            lect,
            show_banner: true,
            prompt: String::new(),
        };
        repl.refresh_prompt();
        repl.refresh_completions();
        repl
    }

    /// Sets the current lect.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined.
    pub fn with_lect(mut self, lect: &str) -> Result<Self> {
        self.switch_lect(lect)?;
        Ok(self)
    }

    /// Skips the banner on start.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// The session being edited.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The session, mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Returns the current lect.
    #[must_use]
    pub fn lect(&self) -> &str {
        &self.lect
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Reads and handles one line.
    ///
    /// `Ok(false)` means the user asked to leave or input ended.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Output(lines)) => {
                for line in lines {
                    println!("{line}");
                }
                Ok(true)
            }
            Ok(Outcome::Quit) => Ok(false),
            Err(e) => {
                Self::print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is malformed or fails.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let lines = match Command::parse(input)? {
            Command::Transcribe(text) => vec![self.session.transcribe(&text, &self.lect)?],
            Command::Generate(count) => self.generate(count)?,
            Command::Complete(trial) => {
                let word = self.session.complete_word(&trial, &self.lect)?;
                vec![word.unwrap_or_else(|| "(completion has an illegal sequence)".to_string())]
            }
            Command::Lect(None) => self.describe_lects(),
            Command::Lect(Some(lect)) => {
                self.switch_lect(&lect)?;
                vec![format!("lect: {lect}")]
            }
            Command::Rule(line) => {
                let updated = self.session.append_rule(&self.lect, &line)?;
                vec![format!("updated {updated} pronunciations")]
            }
            Command::Rules => self.describe_rules()?,
            Command::Add(word) => {
                let ipa = self.session.transcribe(&word, &self.lect)?;
                self.session.add_word(&word)?;
                vec![format!("{word} [{ipa}]")]
            }
            Command::Load(path) => self.load(path)?,
            Command::Save(path) => self.save(path)?,
            Command::Help => help_lines(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(lines))
    }

    fn generate(&mut self, count: usize) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            let line = match self.session.generate_word(&self.lect)? {
                Some(word) => word,
                None => "(no legal word found)".to_string(),
            };
            lines.push(line);
        }
        Ok(lines)
    }

    fn switch_lect(&mut self, lect: &str) -> Result<()> {
        self.session.language().require_lect(lect)?;
        self.lect = lect.to_string();
        self.refresh_prompt();
        Ok(())
    }

    fn describe_lects(&self) -> Vec<String> {
        self.session
            .language()
            .lects
            .iter()
            .map(|lect| {
                let marker = if *lect == self.lect { '*' } else { ' ' };
                format!("{marker} {lect}")
            })
            .collect()
    }

    fn describe_rules(&self) -> Result<Vec<String>> {
        let text = self.session.language().rule_text(&self.lect)?;
        let compiled = self.session.rules(&self.lect)?.len();
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        lines.push(format!("({compiled} compiled rules)"));
        Ok(lines)
    }

    fn load(&mut self, path: PathBuf) -> Result<Vec<String>> {
        let language = load_from_file(&path)?;
        let summary = format!(
            "loaded {} ({} words, {} phrases)",
            language.name,
            language.lexicon.len(),
            language.phrase_count()
        );
        self.session.replace_language(language);
        self.session.set_path(path);

        if !self.session.language().has_lect(&self.lect) {
            let first = self.session.language().lects.first().cloned();
            if let Some(lect) = first {
                self.lect = lect;
            }
            self.refresh_prompt();
        }
        self.refresh_completions();
        Ok(vec![summary])
    }

    fn save(&mut self, path: Option<PathBuf>) -> Result<Vec<String>> {
        let path = match path.or_else(|| self.session.path().map(PathBuf::from)) {
            Some(path) => path,
            None => return Err(Error::io("no file to save to; use :save <path>")),
        };
        save_to_file(self.session.language(), &path)?;
        let line = format!("saved {}", path.display());
        self.session.set_path(path);
        Ok(vec![line])
    }

    fn refresh_prompt(&mut self) {
        self.prompt = format!("{}> ", self.lect);
    }

    fn refresh_completions(&mut self) {
        let words = COMMANDS
            .iter()
            .map(|c| (*c).to_string())
            .chain(self.session.language().lects.iter().cloned())
            .collect();
        self.editor.set_completions(words);
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
        if let Some(context) = &error.context {
            eprintln!("{context}");
        }
    }

    fn print_banner(&self) {
        let language = self.session.language();
        println!("\x1b[1;36mlexc\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "{}: {} lects, {} words. Type :help for commands, Ctrl+D to exit.\n",
            language.name,
            language.lects.len(),
            language.lexicon.len()
        );

        let _ = io::stdout().flush();
    }
}

fn help_lines() -> Vec<String> {
    [
        "<text>             transcribe text in the current lect",
        ":gen [n]           generate n words (default 1)",
        ":complete <trial>  complete a partial word",
        ":lect [name]       list lects, or switch to one",
        ":rule <line>       append a rule or category line",
        ":rules             show the current lect's rules",
        ":add <word>        add a word to the lexicon",
        ":load <path>       load a language (.json or snapshot)",
        ":save [path]       save the language",
        ":help              show this help",
        ":quit              exit",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
