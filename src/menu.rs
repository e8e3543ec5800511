//! Validation of the numeric choice typed at the notation menu.

use thiserror::Error;

use crate::notation::Notation;

pub const QUIT_CHOICE: i64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("The input could not be converted to an integer")]
    NotAnInteger(String),

    #[error("The input is not allowed to be less than {0}")]
    TooSmall(i64),

    #[error("The input is not allowed to be more than {0}")]
    TooLarge(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Evaluate(Notation),
    Quit,
}

/// Parses `text` as an integer in `min..=max`.
pub fn parse_choice(text: &str, min: i64, max: i64) -> Result<i64, ChoiceError> {
    let num = text
        .trim()
        .parse::<i64>()
        .map_err(|_| ChoiceError::NotAnInteger(text.to_string()))?;
    if num < min {
        return Err(ChoiceError::TooSmall(min));
    }
    if num > max {
        return Err(ChoiceError::TooLarge(max));
    }
    Ok(num)
}

pub fn parse_menu(text: &str) -> Result<MenuChoice, ChoiceError> {
    let num = parse_choice(text, 1, QUIT_CHOICE)?;
    Ok(Notation::from_menu_number(num).map_or(MenuChoice::Quit, MenuChoice::Evaluate))
}

pub fn menu_text() -> String {
    let mut text = String::from("What kind of mathematical expressions do you want to parse?\n");
    for (i, notation) in Notation::ALL.iter().enumerate() {
        text.push_str(&format!(
            "{}) {:<22}e.g. {}\n",
            i + 1,
            notation.to_string(),
            notation.example()
        ));
    }
    text.push_str(&format!("{}) quit", QUIT_CHOICE));
    text
}

pub fn menu_prompt() -> String {
    format!("Enter an integer between 1 and {}> ", QUIT_CHOICE)
}
