use crate::syntax::cst::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidDate(Rng),
    InvalidAmount(Rng),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (rng, what) = match self {
            ModelError::InvalidDate(rng) => (rng, "not a valid calendar date"),
            ModelError::InvalidAmount(rng) => (rng, "not a valid amount"),
        };
        let (line, col) = rng.file.position(rng.start);
        write!(
            f,
            "Line {line}, column {col}: '{text}' is {what}",
            text = rng.text(),
        )
    }
}

impl std::error::Error for ModelError {}
