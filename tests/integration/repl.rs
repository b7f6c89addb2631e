//! The REPL driven through scripted input.

use lexc::foundation::Result;
use lexc::runtime::{Language, LineEditor, Outcome, ReadResult, Repl, Session};

struct Script {
    lines: std::vec::IntoIter<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| (*l).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _words: Vec<String>) {}
}

fn outputs(repl: &mut Repl<Script>, input: &str) -> Vec<String> {
    match repl.eval(input).unwrap() {
        Outcome::Output(lines) => lines,
        Outcome::Quit => Vec::new(),
    }
}

#[test]
fn building_rules_interactively() {
    let session = Session::with_language(Language::new("Scratch")).with_seed(4);
    let mut repl = Repl::with_editor(Script::new(&[]), session).without_banner();

    assert_eq!(outputs(&mut repl, "kiki"), vec!["kiki"]);
    outputs(&mut repl, ":rule V :: a, i");
    outputs(&mut repl, ":rule VkV > VgV");
    assert_eq!(outputs(&mut repl, "kiki"), vec!["kigi"]);
    assert_eq!(
        outputs(&mut repl, ":rules"),
        vec!["V :: a, i", "VkV > VgV", "(2 compiled rules)"]
    );
}

#[test]
fn run_stops_at_quit() {
    let session = Session::with_language(Language::new("Scratch"));
    let script = Script::new(&[":rule a > e", ":quit", ":rule e > i"]);
    let mut repl = Repl::with_editor(script, session).without_banner();
    repl.run().unwrap();
    assert_eq!(
        repl.session().language().rule_text("General").unwrap(),
        "a > e"
    );
}
