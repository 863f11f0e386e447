use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};
use substring::Substring;

use crate::error::Reporter;
use crate::literal::Literal;
use crate::token::{Kind, Token};

/// Translates source text into a token sequence terminated by `EOF`.
///
/// The scanner makes a single forward pass over the characters, tracking the
/// char offsets of the token in progress (`start..current`) and the current
/// line. Malformed input is reported through the sink and skipped; scanning
/// always continues to the end of the source.
pub struct Scanner<'a> {
    source: &'a str,
    chars: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    reporter: &'a mut Reporter,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, reporter: &'a mut Reporter) -> Scanner<'a> {
        Scanner {
            source,
            chars: source.chars().peekmore(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            reporter,
        }
    }

    /// Scans the whole source and returns the tokens.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::new(Kind::EOF, String::new(), None, self.line));
        self.tokens
    }

    /// Scans one token (or one piece of skippable input) starting at the
    /// current character.
    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(Kind::LeftParen),
            ')' => self.add_token(Kind::RightParen),
            '{' => self.add_token(Kind::LeftBrace),
            '}' => self.add_token(Kind::RightBrace),
            ',' => self.add_token(Kind::Comma),
            '.' => self.add_token(Kind::Dot),
            '-' => self.add_token(Kind::Minus),
            '+' => self.add_token(Kind::Plus),
            ';' => self.add_token(Kind::Semicolon),
            '*' => self.add_token(Kind::Star),

            '!' => {
                let kind = if self.advance_if('=') { Kind::BangEqual } else { Kind::Bang };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.advance_if('=') { Kind::EqualEqual } else { Kind::Equal };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.advance_if('=') { Kind::LessEqual } else { Kind::Less };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.advance_if('=') { Kind::GreaterEqual } else { Kind::Greater };
                self.add_token(kind);
            }

            '/' => {
                if self.advance_if('/') {
                    // A comment runs to the end of the line.
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(Kind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            _ => self.reporter.line_error(self.line, "Unexpected character."),
        }
    }

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    /// Consumes and returns the next character.
    fn advance(&mut self) -> char {
        let c = self.chars.next().expect("scanner advanced past end of input");
        self.current += 1;
        c
    }

    /// Returns the next character without consuming it, or the `'\0'`
    /// sentinel at end of input.
    fn peek(&mut self) -> char {
        self.chars.peek().copied().unwrap_or('\0')
    }

    /// Returns the character after the next one without consuming anything.
    fn peek_next(&mut self) -> char {
        let c = self.chars.peek_next().copied().unwrap_or('\0');
        self.chars.reset_cursor();
        c
    }

    /// Consumes the next character only if it is the expected one.
    fn advance_if(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: Kind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: Kind, literal: Option<Literal>) {
        let lexeme = self.source.substring(self.start, self.current).to_string();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    /// Handles a string literal. The literal value is the raw contents
    /// between the quotes; newlines inside the string are allowed.
    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.reporter.line_error(self.line, "Unterminated string.");
            return;
        }

        self.advance(); // The closing quote.

        let value = self.source.substring(self.start + 1, self.current - 1).to_string();
        self.add_literal_token(Kind::String, Some(Literal::String(value)));
    }

    /// Handles a number literal. A fractional part needs at least one digit,
    /// so a trailing `.` is left for the next token.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // The dot.

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value: f64 = self.source.substring(self.start, self.current)
            .parse()
            .expect("number lexeme parses as f64");

        self.add_literal_token(Kind::Number, Some(Literal::Number(value)));
    }

    /// Handles an identifier or a keyword.
    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let kind = match self.source.substring(self.start, self.current) {
            "and"    => Kind::And,
            "class"  => Kind::Class,
            "else"   => Kind::Else,
            "false"  => Kind::False,
            "for"    => Kind::For,
            "fun"    => Kind::Fun,
            "if"     => Kind::If,
            "nil"    => Kind::Nil,
            "or"     => Kind::Or,
            "print"  => Kind::Print,
            "return" => Kind::Return,
            "super"  => Kind::Super,
            "this"   => Kind::This,
            "true"   => Kind::True,
            "var"    => Kind::Var,
            "while"  => Kind::While,
            _        => Kind::Identifier,
        };

        self.add_token(kind);
    }
}
