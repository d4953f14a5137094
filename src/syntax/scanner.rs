use std::cell::RefCell;
use std::iter::Peekable;
use std::rc::Rc;
use std::str::CharIndices;

use super::cst::{Character, Rng, Token};
use super::error::SyntaxError;
use super::file::File;

pub type Result<T> = std::result::Result<T, SyntaxError>;

pub struct Scanner<'a> {
    pub source: &'a Rc<File>,
    chars: RefCell<Peekable<CharIndices<'a>>>,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a Rc<File>) -> Scanner<'a> {
        Scanner {
            source: s,
            chars: RefCell::new(s.text.char_indices().peekable()),
        }
    }

    pub fn current(&self) -> Option<char> {
        self.chars.borrow_mut().peek().map(|t| t.1)
    }

    pub fn advance(&self) -> Option<char> {
        self.chars.borrow_mut().next().map(|t| t.1)
    }

    pub fn pos(&self) -> usize {
        self.chars
            .borrow_mut()
            .peek()
            .map_or_else(|| self.source.text.len(), |t| t.0)
    }

    pub fn rng(&self, start: usize) -> Rng {
        Rng::new(self.source.clone(), start, self.pos())
    }

    pub fn error(&self, msg: Option<String>, want: Token, got: Token) -> SyntaxError {
        SyntaxError {
            file: self.source.clone(),
            pos: self.pos(),
            msg,
            want,
            got,
        }
    }

    pub fn read_char(&self, want: Character) -> Result<Rng> {
        let start = self.pos();
        match self.current() {
            Some(c) if want.is(Some(c)) => {
                self.advance();
                Ok(self.rng(start))
            }
            o => Err(self.error(None, Token::Character(want), Token::from_char(o))),
        }
    }

    pub fn read_while(&self, want: &Character) -> Rng {
        let start = self.pos();
        while want.is(self.current()) {
            self.advance();
        }
        self.rng(start)
    }

    pub fn read_while_1(&self, want: Character) -> Result<Rng> {
        if !want.is(self.current()) {
            return Err(self.error(
                None,
                Token::Character(want),
                Token::from_char(self.current()),
            ));
        }
        Ok(self.read_while(&want))
    }

    pub fn read_n(&self, n: usize, want: Character) -> Result<Rng> {
        let start = self.pos();
        for _ in 0..n {
            self.read_char(want.clone())?;
        }
        Ok(self.rng(start))
    }

    pub fn read_string(&self, want: &str) -> Result<Rng> {
        let start = self.pos();
        for c in want.chars() {
            self.read_char(Character::Char(c))?;
        }
        Ok(self.rng(start))
    }

    /// Consumes an optional carriage return followed by a newline or the
    /// end of input.
    pub fn read_eol(&self) -> Result<Rng> {
        let start = self.pos();
        if let Some('\r') = self.current() {
            self.advance();
        }
        match self.current() {
            None => Ok(self.rng(start)),
            Some('\n') => {
                self.advance();
                Ok(self.rng(start))
            }
            Some(c) => Err(self.error(
                None,
                Token::Either(vec![
                    Token::Character(Character::NewLine),
                    Token::Character(Character::EOF),
                ]),
                Token::Character(Character::Char(c)),
            )),
        }
    }

    /// Reads the remainder of the line, excluding a single trailing
    /// carriage return, and consumes the line terminator.
    pub fn read_line(&self) -> Rng {
        let mut rng = self.read_while(&Character::NotChar('\n'));
        if rng.text().ends_with('\r') {
            rng.end -= 1;
        }
        if let Some('\n') = self.current() {
            self.advance();
        }
        rng
    }
}
