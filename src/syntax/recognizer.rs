use std::rc::Rc;

use super::cst::{Character, Date, Record, Rng, Split, Token, Value, Year};
use super::error::SyntaxError;
use super::file::File;
use super::scanner::{Result, Scanner};

/// Scans QIF records off the front of the source, one at a time. Every
/// record is anchored at the cursor; the scan never searches ahead.
pub struct Recognizer<'a> {
    scanner: Scanner<'a>,
}

struct Scope<'a, 'b> {
    recognizer: &'a Recognizer<'b>,
    start: usize,
    token: Token,
}

impl<'a, 'b> Scope<'a, 'b> {
    fn error(&self, e: SyntaxError) -> SyntaxError {
        e.update(format!("reading {}", self.token))
    }

    fn rng(&self) -> Rng {
        self.recognizer.scanner.rng(self.start)
    }
}

impl<'a> Recognizer<'a> {
    pub fn new(s: &'a Rc<File>) -> Recognizer<'a> {
        Recognizer {
            scanner: Scanner::new(s),
        }
    }

    fn scope(&self, token: Token) -> Scope<'_, 'a> {
        Scope {
            recognizer: self,
            start: self.scanner.pos(),
            token,
        }
    }

    /// Recognizes the record at the cursor, or returns None at the end of
    /// the input. Any line whose leading marker is not one of the known
    /// record markers is an error.
    pub fn next_record(&self) -> Result<Option<Record>> {
        let record = match self.scanner.current() {
            None => return Ok(None),
            Some('!') => self.header()?,
            Some('D') => self.date()?,
            Some('T') => Record::TotalAmount(self.amount('T', Token::TotalAmount)?),
            Some('U') => Record::UnitAmount(self.amount('U', Token::UnitAmount)?),
            Some('C') => self.cleared()?,
            Some('P') => Record::Payee(self.value('P', Token::Payee)?),
            Some('M') => Record::Memo(self.value('M', Token::Memo)?),
            Some('L') => Record::Category(self.value('L', Token::Category)?),
            Some('A') => Record::Address(self.value('A', Token::Address)?),
            Some('N') => Record::Number(self.value('N', Token::Number)?),
            Some('S') => self.split()?,
            Some('^') => self.end()?,
            o => return Err(self.scanner.error(None, Token::Record, Token::from_char(o))),
        };
        Ok(Some(record))
    }

    fn header(&self) -> Result<Record> {
        let scope = self.scope(Token::Header);
        self.scanner
            .read_string("!Type")
            .map_err(|e| scope.error(e))?;
        Ok(Record::Header(Value(self.scanner.read_line())))
    }

    fn value(&self, marker: char, token: Token) -> Result<Value> {
        let scope = self.scope(token);
        self.scanner
            .read_char(Character::Char(marker))
            .map_err(|e| scope.error(e))?;
        Ok(Value(self.scanner.read_line()))
    }

    fn date(&self) -> Result<Record> {
        let scope = self.scope(Token::Date);
        self.scanner
            .read_char(Character::Char('D'))
            .map_err(|e| scope.error(e))?;
        let month = self.month().map_err(|e| scope.error(e))?;
        self.scanner
            .read_char(Character::Char('/'))
            .map_err(|e| scope.error(e))?;
        let day = self.day().map_err(|e| scope.error(e))?;
        let year = self.year().map_err(|e| scope.error(e))?;
        let range = scope.rng();
        self.scanner.read_eol().map_err(|e| scope.error(e))?;
        Ok(Record::Date(Date {
            range,
            month,
            day,
            year,
        }))
    }

    /// One digit, or two characters when a space, '0' or '1' prefixes a
    /// digit.
    fn month(&self) -> Result<Rng> {
        let start = self.scanner.pos();
        match self.scanner.current() {
            Some(c @ (' ' | '0' | '1')) => {
                self.scanner.advance();
                if Character::Digit.is(self.scanner.current()) {
                    self.scanner.advance();
                } else if c == ' ' {
                    return Err(self.scanner.error(
                        None,
                        Token::Character(Character::Digit),
                        Token::from_char(self.scanner.current()),
                    ));
                }
            }
            _ => {
                self.scanner.read_char(Character::Digit)?;
            }
        }
        Ok(self.scanner.rng(start))
    }

    /// Exactly two characters: a space or '0'..'3', then a digit.
    fn day(&self) -> Result<Rng> {
        let start = self.scanner.pos();
        self.scanner.read_char(Character::OneOf(vec![
            Character::Char(' '),
            Character::Char('0'),
            Character::Char('1'),
            Character::Char('2'),
            Character::Char('3'),
        ]))?;
        self.scanner.read_char(Character::Digit)?;
        Ok(self.scanner.rng(start))
    }

    /// A quote introduces a 1-2 digit year (optionally space-padded), a
    /// slash a 4-digit year.
    fn year(&self) -> Result<Year> {
        match self.scanner.current() {
            Some('\'') => {
                self.scanner.advance();
                let start = self.scanner.pos();
                if let Some(' ') = self.scanner.current() {
                    self.scanner.advance();
                }
                self.scanner.read_char(Character::Digit)?;
                if Character::Digit.is(self.scanner.current()) {
                    self.scanner.advance();
                }
                Ok(Year::Short(self.scanner.rng(start)))
            }
            Some('/') => {
                self.scanner.advance();
                Ok(Year::Long(self.scanner.read_n(4, Character::Digit)?))
            }
            o => Err(self.scanner.error(
                None,
                Token::Character(Character::OneOf(vec![
                    Character::Char('\''),
                    Character::Char('/'),
                ])),
                Token::from_char(o),
            )),
        }
    }

    fn amount(&self, marker: char, token: Token) -> Result<Value> {
        let scope = self.scope(token);
        self.scanner
            .read_char(Character::Char(marker))
            .map_err(|e| scope.error(e))?;
        let value = self.decimal().map_err(|e| scope.error(e))?;
        self.scanner.read_eol().map_err(|e| scope.error(e))?;
        Ok(Value(value))
    }

    /// An optional minus sign, digits with optional comma grouping and an
    /// optional decimal fraction.
    fn decimal(&self) -> Result<Rng> {
        let start = self.scanner.pos();
        if let Some('-') = self.scanner.current() {
            self.scanner.advance();
        }
        self.scanner.read_while_1(Character::OneOf(vec![
            Character::Digit,
            Character::Char(','),
        ]))?;
        if let Some('.') = self.scanner.current() {
            self.scanner.advance();
            self.scanner.read_while_1(Character::Digit)?;
        }
        Ok(self.scanner.rng(start))
    }

    fn cleared(&self) -> Result<Record> {
        let scope = self.scope(Token::Cleared);
        self.scanner
            .read_char(Character::Char('C'))
            .map_err(|e| scope.error(e))?;
        let value = self
            .scanner
            .read_char(Character::OneOf(vec![
                Character::Char('*'),
                Character::Char('c'),
                Character::Char('X'),
                Character::Char('R'),
            ]))
            .map_err(|e| scope.error(e))?;
        self.scanner.read_eol().map_err(|e| scope.error(e))?;
        Ok(Record::Cleared(Value(value)))
    }

    /// A split spans up to three physical lines and is consumed as one
    /// record: the category line, an optional memo line and the amount
    /// line.
    fn split(&self) -> Result<Record> {
        let scope = self.scope(Token::Split);
        self.scanner
            .read_char(Character::Char('S'))
            .map_err(|e| scope.error(e))?;
        let category = self.scanner.read_line();
        let memo = if let Some('E') = self.scanner.current() {
            self.scanner.advance();
            Some(self.scanner.read_line())
        } else {
            None
        };
        self.scanner
            .read_char(Character::Char('$'))
            .map_err(|e| scope.error(e))?;
        let amount = self.decimal().map_err(|e| scope.error(e))?;
        self.scanner.read_eol().map_err(|e| scope.error(e))?;
        Ok(Record::Split(Split {
            category,
            memo,
            amount,
        }))
    }

    fn end(&self) -> Result<Record> {
        let scope = self.scope(Token::End);
        self.scanner
            .read_char(Character::Char('^'))
            .map_err(|e| scope.error(e))?;
        self.scanner.read_eol().map_err(|e| scope.error(e))?;
        Ok(Record::End)
    }
}
