use std::rc::Rc;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOL_LOOKUP};

/// A pull-based scanner over a byte buffer.
///
/// `position` is the byte under `ch`, `read_position` is always one past it.
/// `ch` holds the zero byte exactly when the input is exhausted.
pub struct Lexer {
    source: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source: source.into_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();

        lexer
    }

    fn read_char(&mut self) {
        if self.read_position >= self.source.len() {
            self.ch = 0;
        } else {
            self.ch = self.source[self.read_position];
        }

        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.source.len() {
            0
        } else {
            self.source[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }

        String::from_utf8_lossy(&self.source[start..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        String::from_utf8_lossy(&self.source[start..self.position]).into_owned()
    }

    /// Returns the next token, consuming as many bytes as it spans.
    ///
    /// Once the input is exhausted every further call returns an EOF token
    /// without moving the cursor.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = Position(self.position as u32, Rc::clone(&self.file));

        if self.ch == 0 {
            return MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: start.clone(), end: start });
        }

        // The greedy branches leave the cursor on the first unconsumed byte,
        // so they return without the trailing read_char.
        if is_letter(self.ch) {
            let value = self.read_identifier();
            let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);

            return MK_TOKEN!(kind, value, Span { start, end: Position(self.position as u32, Rc::clone(&self.file)) });
        }

        if self.ch.is_ascii_digit() {
            let value = self.read_number();

            return MK_TOKEN!(TokenKind::Number, value, Span { start, end: Position(self.position as u32, Rc::clone(&self.file)) });
        }

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::Equals, String::from("=="), Span { start, end: Position(self.read_position as u32, Rc::clone(&self.file)) })
                } else {
                    MK_TOKEN!(TokenKind::Assignment, String::from("="), Span { start, end: Position(self.read_position as u32, Rc::clone(&self.file)) })
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NotEquals, String::from("!="), Span { start, end: Position(self.read_position as u32, Rc::clone(&self.file)) })
                } else {
                    MK_TOKEN!(TokenKind::Not, String::from("!"), Span { start, end: Position(self.read_position as u32, Rc::clone(&self.file)) })
                }
            }
            ch => {
                // An unrecognised byte still consumes one position, so the
                // scan always makes forward progress.
                let kind = SYMBOL_LOOKUP.get(&ch).copied().unwrap_or(TokenKind::Illegal);
                MK_TOKEN!(kind, (ch as char).to_string(), Span { start, end: Position(self.read_position as u32, Rc::clone(&self.file)) })
            }
        };

        self.read_char();

        token
    }
}

// isLetter range: [a-zA-Z_]. Digits never appear inside identifiers.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Drains the lexer into a vector, EOF token included.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            break;
        }
    }

    tokens
}
