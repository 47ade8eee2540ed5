use std::io::{BufRead, Write};

use crate::lexer::{lexer::Lexer, tokens::TokenKind};

pub const PROMPT: &str = ">> ";

/// Runs the line-based shell.
///
/// Reads one line at a time, runs a fresh lexer over it and echoes every
/// token until end of input. Returns when the input stream is closed.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(line.clone(), None);

        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EOF {
                break;
            }

            writeln!(output, "{}", token.debug())?;
        }
    }
}
