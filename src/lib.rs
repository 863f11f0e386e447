//! plox is a tree-walking interpreter for Lox, a small dynamically typed
//! scripting language with first-class functions, closures, and
//! single-inheritance classes.
//!
//! Source text flows through four stages, each consuming only the output of
//! the one before it:
//!
//! 1. **Scanning** ([`scanner`]): the source string becomes a flat token
//!    sequence terminated by `EOF`. Bad characters and unterminated strings
//!    are reported and skipped, so a single pass surfaces every lexical
//!    problem in a file.
//! 2. **Parsing** ([`parser`]): a recursive descent parser turns the tokens
//!    into a statement list over the sum types in [`expr`] and [`stmt`].
//!    After a syntax error the parser synchronizes at the next statement
//!    boundary and keeps going.
//! 3. **Resolving** ([`resolver`]): a static pre-pass computes, for every
//!    local variable reference, how many environments sit between the
//!    reference and the scope that declares the name. Those hop counts make
//!    closures capture bindings, not whatever happens to share a name at
//!    call time, and the same pass rejects misuses of `return`, `this`, and
//!    `super`.
//! 4. **Interpreting** ([`interpreter`]): the tree is evaluated against a
//!    chain of environments ([`environment`]). Runtime values are
//!    [`object::Object`]s; functions, natives, and classes all implement the
//!    [`object::Callable`] contract, and `return` unwinds through the
//!    executor as an [`error::Unwind`] until the active call frame catches
//!    it.
//!
//! The [`Plox`] driver wires the stages together, owns the error sink that
//! decides exit codes, and provides the file runner and the interactive
//! prompt used by the binary.

use std::fs;
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::Reporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The interpreter driver.
///
/// Owns the state that outlives a single program fragment (the interpreter
/// and the error sink) and borrows the writer that program output goes to,
/// so tests can run whole programs against an in-memory buffer.
pub struct Plox<'a> {
    interpreter: Interpreter<'a>,
    reporter: Reporter,
}

impl<'a> Plox<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        Plox {
            interpreter: Interpreter::new(output),
            reporter: Reporter::new(),
        }
    }

    /// Runs a script file and returns the exit code for the process.
    pub fn run_file(&mut self, path: &str) -> i32 {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("Could not read {path}: {error}");
                return 74;
            }
        };

        self.run_source(&source)
    }

    /// Runs one program fragment and returns the exit code it maps to:
    /// 65 after any static error, 70 after a runtime error, 0 otherwise.
    pub fn run_source(&mut self, source: &str) -> i32 {
        self.run(source);

        if self.reporter.had_error() {
            65
        } else if self.reporter.had_runtime_error() {
            70
        } else {
            0
        }
    }

    /// Reads and runs lines until end of input. Each line is a complete
    /// program fragment executed against the shared interpreter state, and
    /// the error flags are cleared afterwards so one bad line does not
    /// poison the next.
    pub fn run_prompt(&mut self) {
        let mut editor = DefaultEditor::new().expect("line editor to initialize");

        let history = home::home_dir().map(|dir| dir.join(".plox_history"));
        if let Some(history) = &history {
            // No history yet is fine on a first run.
            let _ = editor.load_history(history);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    if line.is_empty() {
                        break;
                    }

                    let _ = editor.add_history_entry(&line);
                    self.run(&line);
                    self.reporter.reset();
                }
                // Ctrl-C cancels the line, not the session.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(error) => {
                    eprintln!("Could not read line: {error}");
                    break;
                }
            }
        }

        println!("bye");

        if let Some(history) = &history {
            let _ = editor.save_history(history);
        }
    }

    /// Pushes a program fragment through the pipeline. Scan and parse
    /// errors accumulate before the run stops; a resolution error stops it
    /// before any statement executes.
    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source, &mut self.reporter).scan_tokens();
        let statements = Parser::new(tokens, &mut self.reporter).parse();

        if self.reporter.had_error() {
            return;
        }

        Resolver::new(&mut self.interpreter, &mut self.reporter).resolve(&statements);

        if self.reporter.had_error() {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            self.reporter.runtime_error(&error);
        }
    }
}
