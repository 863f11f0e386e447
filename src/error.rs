use crate::object::Object;
use crate::token::{Kind, Token};

/// Collects and prints errors on behalf of every pipeline stage.
///
/// The driver owns a single `Reporter` and lends it to the scanner, the
/// parser, and the resolver; runtime errors are handed to it after
/// `interpret` unwinds. The exit code of a run is derived from the flags
/// accumulated here, and the REPL clears them between lines.
#[derive(Debug, Default)]
pub struct Reporter {
    had_error: bool,
    had_runtime_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Reports a static error that only has a line number, such as a
    /// malformed lexeme found while scanning.
    pub fn line_error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Reports a static error at a token.
    pub fn error(&mut self, token: &Token, message: &str) {
        if token.kind == Kind::EOF {
            self.report(token.line, " at end", message);
        } else {
            self.report(token.line, &format!(" at '{}'", token.lexeme), message);
        }
    }

    /// Reports an error raised while the program was running.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}\n[line {}]", error.message, error.token.line);
        self.had_runtime_error = true;
    }

    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {line}] Error{location}: {message}");
        self.had_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears the flags so one bad REPL line does not poison the next.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

/// A syntax error raised while parsing, caught and reported at the nearest
/// declaration boundary before the parser synchronizes.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

/// A type or name error raised while evaluating the program.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        RuntimeError {
            token: token.clone(),
            message: message.into(),
        }
    }
}

/// A non-local exit threaded through statement execution.
///
/// `return` unwinds as `Unwind::Return` until the active call frame consumes
/// it and turns it into the call's result; a `RuntimeError` unwinds all the
/// way out of `interpret`.
#[derive(Debug)]
pub enum Unwind {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
