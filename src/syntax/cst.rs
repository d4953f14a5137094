use std::fmt::Display;
use std::rc::Rc;

use super::file::File;

/// A span of the source text.
#[derive(Clone, Eq, PartialEq)]
pub struct Rng {
    pub file: Rc<File>,
    pub start: usize,
    pub end: usize,
}

impl Rng {
    pub fn new(file: Rc<File>, start: usize, end: usize) -> Rng {
        Rng { file, start, end }
    }

    pub fn text(&self) -> &str {
        &self.file.text[self.start..self.end]
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Debug for Rng {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Rng({}..{}, {:?})", self.start, self.end, self.text())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Character {
    EOF,
    Char(char),
    NotChar(char),
    Digit,
    NewLine,
    OneOf(Vec<Character>),
}

impl Character {
    pub fn from_char(ch: Option<char>) -> Self {
        match ch {
            None => Self::EOF,
            Some('\n') => Self::NewLine,
            Some(c) => Self::Char(c),
        }
    }

    pub fn is(&self, o: Option<char>) -> bool {
        match o {
            None => matches!(self, Character::EOF),
            Some(c) => match self {
                Character::EOF => false,
                Character::Char(a) => c == *a,
                Character::NotChar(a) => c != *a,
                Character::Digit => c.is_ascii_digit(),
                Character::NewLine => c == '\n',
                Character::OneOf(cs) => cs.iter().any(|d| d.is(o)),
            },
        }
    }
}

impl Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Character::EOF => write!(f, "EOF"),
            Character::Char(ch) => write!(f, "{:?}", ch),
            Character::NotChar(ch) => write!(f, "not '{}'", ch),
            Character::Digit => write!(f, "a digit (0-9)"),
            Character::NewLine => write!(f, "a line break"),
            Character::OneOf(chs) => {
                write!(
                    f,
                    "one of: {}",
                    chs.iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

/// What the recognizer was looking for when a scan failed. Used in error
/// messages only.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Header,
    Date,
    TotalAmount,
    UnitAmount,
    Cleared,
    Payee,
    Memo,
    Category,
    Address,
    Number,
    Split,
    End,
    Record,
    Character(Character),
    Either(Vec<Token>),
}

impl Token {
    pub fn from_char(ch: Option<char>) -> Token {
        Token::Character(Character::from_char(ch))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Header => write!(f, "a header record (!Type)"),
            Token::Date => write!(f, "a date record (D)"),
            Token::TotalAmount => write!(f, "a total amount record (T)"),
            Token::UnitAmount => write!(f, "a unit amount record (U)"),
            Token::Cleared => write!(f, "a cleared-status record (C)"),
            Token::Payee => write!(f, "a payee record (P)"),
            Token::Memo => write!(f, "a memo record (M)"),
            Token::Category => write!(f, "a category record (L)"),
            Token::Address => write!(f, "an address record (A)"),
            Token::Number => write!(f, "a number record (N)"),
            Token::Split => write!(f, "a split record (S)"),
            Token::End => write!(f, "an end-of-transaction record (^)"),
            Token::Record => write!(f, "a record"),
            Token::Character(ch) => write!(f, "{}", ch),
            Token::Either(tokens) => {
                let n = tokens.len().saturating_sub(2);
                for (i, token) in tokens.iter().enumerate() {
                    write!(f, "{}", token)?;
                    match i.cmp(&n) {
                        std::cmp::Ordering::Less => write!(f, ", ")?,
                        std::cmp::Ordering::Equal => write!(f, " or ")?,
                        std::cmp::Ordering::Greater => (),
                    }
                }
                Ok(())
            }
        }
    }
}

/// A recognized record, fields captured as source spans.
#[derive(Eq, PartialEq, Debug)]
pub enum Record {
    Header(Value),
    Date(Date),
    TotalAmount(Value),
    UnitAmount(Value),
    Cleared(Value),
    Payee(Value),
    Memo(Value),
    Category(Value),
    Address(Value),
    Number(Value),
    Split(Split),
    End,
}

#[derive(Eq, PartialEq, Debug)]
pub struct Value(pub Rng);

#[derive(Eq, PartialEq, Debug)]
pub struct Date {
    pub range: Rng,
    pub month: Rng,
    pub day: Rng,
    pub year: Year,
}

#[derive(Eq, PartialEq, Debug)]
pub enum Year {
    Short(Rng),
    Long(Rng),
}

#[derive(Eq, PartialEq, Debug)]
pub struct Split {
    pub category: Rng,
    pub memo: Option<Rng>,
    pub amount: Rng,
}
