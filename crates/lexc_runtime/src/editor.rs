//! Terminal input for the REPL.
//!
//! [`Repl`](crate::Repl) reads through the [`LineEditor`] trait so tests can
//! feed it a script. [`RustylineEditor`] is the interactive implementation.

use std::borrow::Cow;

use lexc_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

const HISTORY_LIMIT: usize = 500;

/// What came back from one prompt.
#[derive(Debug)]
pub enum ReadResult {
    /// The text the user entered.
    Line(String),
    /// Ctrl+C; the REPL discards the line and prompts again.
    Interrupted,
    /// Ctrl+D or end of piped input.
    Eof,
}

/// Source of REPL input.
pub trait LineEditor {
    /// Prompts for one line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Records an entered line.
    fn add_history(&mut self, line: &str);

    /// Replaces the completion vocabulary.
    ///
    /// Words starting with `:` are commands; the rest are lect names.
    fn set_completions(&mut self, words: Vec<String>);
}

// =============================================================================
// Completion
// =============================================================================

/// Where in a REPL line the cursor sits.
#[derive(Debug, PartialEq, Eq)]
enum Slot<'l> {
    /// Still typing the command name.
    Command(&'l str),
    /// Typing the argument of `:lect`.
    Lect(&'l str),
    /// Typing the argument of `:load` or `:save`.
    Path,
    /// Transcription text or an argument with nothing to offer.
    Free,
}

fn slot(line: &str) -> Slot<'_> {
    if !line.starts_with(':') {
        return Slot::Free;
    }
    match line.split_once(char::is_whitespace) {
        None => Slot::Command(line),
        Some((":lect", rest)) => Slot::Lect(rest.trim_start()),
        Some((":load" | ":save", _)) => Slot::Path,
        Some(_) => Slot::Free,
    }
}

struct LexcCompleter {
    paths: FilenameCompleter,
    commands: Vec<String>,
    lects: Vec<String>,
}

impl LexcCompleter {
    fn pairs<'w>(candidates: impl Iterator<Item = &'w String>, prefix: &str) -> Vec<Pair> {
        candidates
            .filter(|c| c.starts_with(prefix))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect()
    }
}

impl Completer for LexcCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        Ok(match slot(head) {
            Slot::Command(prefix) => (0, Self::pairs(self.commands.iter(), prefix)),
            Slot::Lect(prefix) => (pos - prefix.len(), Self::pairs(self.lects.iter(), prefix)),
            Slot::Path => return self.paths.complete(line, pos, ctx),
            Slot::Free => (pos, Vec::new()),
        })
    }
}

#[derive(Helper, Completer, Hinter, Validator)]
struct LexcHelper {
    #[rustyline(Completer)]
    completer: LexcCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for LexcHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[90m{hint}\x1b[0m"))
    }
}

// =============================================================================
// Rustyline Editor
// =============================================================================

/// Interactive terminal editor with history hints and completion.
pub struct RustylineEditor {
    inner: Editor<LexcHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Opens the terminal editor.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        let internal = |e: ReadlineError| Error::new(ErrorKind::Internal(e.to_string()));

        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(HISTORY_LIMIT)
            .map_err(internal)?
            .history_ignore_dups(true)
            .map_err(internal)?
            .build();

        let mut inner = Editor::with_config(config).map_err(internal)?;
        inner.set_helper(Some(LexcHelper {
            completer: LexcCompleter {
                paths: FilenameCompleter::new(),
                commands: Vec::new(),
                lects: Vec::new(),
            },
            hinter: HistoryHinter::new(),
        }));

        Ok(Self { inner })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.inner.readline(prompt).map_or_else(
            |e| match e {
                ReadlineError::Interrupted => Ok(ReadResult::Interrupted),
                ReadlineError::Eof => Ok(ReadResult::Eof),
                other => Err(Error::io(other.to_string())),
            },
            |line| Ok(ReadResult::Line(line)),
        )
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.inner.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        let Some(helper) = self.inner.helper_mut() else {
            return;
        };
        let (commands, lects): (Vec<String>, Vec<String>) =
            words.into_iter().partition(|w| w.starts_with(':'));
        helper.completer.commands = commands;
        helper.completer.lects = lects;
    }
}
