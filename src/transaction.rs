use chrono::NaiveDate;
use log::error;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

// $1,234,567.89 or $1234 etc.
static MONEY: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\$([0-9]{1,3},([0-9]{3},)*[0-9]{3}|[0-9]+)(\.[0-9][0-9])?"));

// Over-captures the word following the name, see `name_from`.
static NAME: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"(to|by) [a-zA-Z]+(([',. -][a-zA-Z ])?[a-zA-Z]*)*"));

// MM/DD/YYYY, day checked against month, Feb 29 only on leap years.
static DATE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(concat!(
        r"(((0?[1-9]|1[012])/(0?[1-9]|1\d|2[0-8])",
        r"|(0?[13456789]|1[012])/(29|30)",
        r"|(0?[13578]|1[02])/31)/(19|[2-9]\d)\d{2}",
        r"|0?2/29/((19|[2-9]\d)(0[48]|[2468][048]|[13579][26])|(([2468][048]|[3579][26])00)))"
    ))
});

const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid transaction, no money: {0}")]
    NoMoney(String),
    #[error("Invalid transaction, can't get amount from: {0}")]
    UnparsableAmount(String),
    #[error("Invalid transaction, no name: {0}")]
    NoName(String),
    #[error("Invalid transaction, no date: {0}")]
    NoDate(String),
    #[error("Invalid transaction, can't get date from: {0}")]
    UnparsableDate(String),
}

/// A single statement line with all three fields extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub name: String,
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl TryFrom<&str> for Transaction {
    type Error = ParseError;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let amount = money_from(line)?;
        let name = name_from(line)?;
        let date = date_from(line)?;

        Ok(Transaction { name, date, amount })
    }
}

/// First `$` amount in the line, commas stripped, kept at its written scale.
pub fn money_from(line: &str) -> Result<Decimal, ParseError> {
    let matched = first_match(&MONEY, line).ok_or_else(|| ParseError::NoMoney(line.to_owned()))?;
    let digits = matched.replace(['$', ','], "");

    Decimal::from_str_exact(&digits).map_err(|_| ParseError::UnparsableAmount(line.to_owned()))
}

/// Name following the first `to `/`by ` in the line.
///
/// The pattern also swallows the word after the name (`on`, `for`, ...), so the
/// last word of the match is dropped along with the keyword. A name directly
/// followed by a digit loses its own last word instead; that is a known
/// limitation of the heuristic and is left as is.
pub fn name_from(line: &str) -> Result<String, ParseError> {
    let matched = first_match(&NAME, line).ok_or_else(|| ParseError::NoName(line.to_owned()))?;

    let words: Vec<&str> = matched.trim().split(' ').collect();
    let name = match words.as_slice() {
        [_, name @ .., _] => name.join(" "),
        _ => String::new(),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::NoName(line.to_owned()));
    }

    Ok(name.to_owned())
}

pub fn date_from(line: &str) -> Result<NaiveDate, ParseError> {
    let matched = first_match(&DATE, line).ok_or_else(|| ParseError::NoDate(line.to_owned()))?;

    NaiveDate::parse_from_str(matched, DATE_FORMAT)
        .map_err(|_| ParseError::UnparsableDate(line.to_owned()))
}

/// A pattern that failed to compile never matches.
fn first_match<'a>(pattern: &Lazy<Result<Regex, regex::Error>>, text: &'a str) -> Option<&'a str> {
    match &**pattern {
        Ok(regex) => regex.find(text).map(|m| m.as_str()),
        Err(err) => {
            error!("Invalid regex: {err}");
            None
        }
    }
}
