//! Input validation: pure parsing rules plus the re-prompting readers built on them.

use crate::domain::ports::Prompter;
use crate::utils::error::Result;
use std::fmt;
use std::num::IntErrorKind;

/// Why a line of input was refused. `Display` is the message shown before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotAnInteger,
    BelowMinimum(i64),
    AboveMaximum(i64),
    Empty,
    TooLong(usize),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAnInteger => write!(f, "Valor inválido: digite um número inteiro."),
            Rejection::BelowMinimum(min) => write!(f, "Valor deve ser maior ou igual a {}.", min),
            Rejection::AboveMaximum(max) => write!(f, "Valor deve ser menor ou igual a {}.", max),
            Rejection::Empty => write!(f, "O campo não pode ficar vazio."),
            Rejection::TooLong(max) => write!(f, "Texto muito longo (máximo {} caracteres).", max),
        }
    }
}

pub fn parse_bounded_integer(
    raw: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> std::result::Result<i64, Rejection> {
    // Integers outside i64 still count as integers and are out of range.
    let value: i64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => Rejection::AboveMaximum(max.unwrap_or(i64::MAX)),
        IntErrorKind::NegOverflow => Rejection::BelowMinimum(min.unwrap_or(i64::MIN)),
        _ => Rejection::NotAnInteger,
    })?;
    if let Some(min) = min {
        if value < min {
            return Err(Rejection::BelowMinimum(min));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(Rejection::AboveMaximum(max));
        }
    }
    Ok(value)
}

pub fn parse_nonempty_text(
    raw: &str,
    max_length: Option<usize>,
) -> std::result::Result<String, Rejection> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(Rejection::Empty);
    }
    if let Some(max) = max_length {
        if text.chars().count() > max {
            return Err(Rejection::TooLong(max));
        }
    }
    Ok(text.to_string())
}

/// Prompts until the answer is an integer inside the optional inclusive bounds.
pub fn read_bounded_integer<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<i64> {
    loop {
        let line = prompter.read_line(prompt)?;
        match parse_bounded_integer(&line, min, max) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                tracing::debug!("Rejected integer input: {:?}", rejection);
                prompter.say(&rejection.to_string())?;
            }
        }
    }
}

/// Prompts until the trimmed answer is non-empty and within `max_length` characters.
pub fn read_nonempty_text<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    max_length: Option<usize>,
) -> Result<String> {
    loop {
        let line = prompter.read_line(prompt)?;
        match parse_nonempty_text(&line, max_length) {
            Ok(text) => return Ok(text),
            Err(rejection) => {
                tracing::debug!("Rejected text input: {:?}", rejection);
                prompter.say(&rejection.to_string())?;
            }
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

/// Single yes/no question; anything that is not affirmative counts as no.
pub fn confirm<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> Result<bool> {
    let answer = prompter.read_line(prompt)?;
    Ok(is_affirmative(&answer))
}
