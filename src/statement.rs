use crate::error::Error;
use crate::transaction::Transaction;
use log::debug;
use std::path::Path;

/// Reads a statement file and parses every line, stopping at the first bad one.
pub fn read_transactions<P>(path: P) -> Result<Vec<Transaction>, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let display = path.display().to_string();

    if !path.exists() {
        return Err(Error::MissingFile(display));
    }

    let contents = std::fs::read_to_string(path).map_err(|err| Error::Read(display, err))?;

    parse_transactions(&contents)
}

pub fn parse_transactions(contents: &str) -> Result<Vec<Transaction>, Error> {
    lines(contents)
        .enumerate()
        .map(|(index, line)| -> Result<Transaction, Error> {
            let transaction = Transaction::try_from(line).map_err(|source| Error::Transaction {
                line_number: index + 1,
                source,
            })?;
            debug!(
                "line {}: {} {} {}",
                index + 1,
                transaction.name,
                transaction.amount,
                transaction.date
            );
            Ok(transaction)
        })
        .collect()
}

/// Splits on every newline character and drops the empty pieces. Lines made of
/// whitespace only are kept.
fn lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .split(is_newline)
        .filter(|line| !line.is_empty())
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::ParseError;

    #[test]
    fn drops_empty_lines() {
        let contents = "a\n\nb\r\nc\rd\u{2028}e\n";
        assert_eq!(lines(contents).collect::<Vec<_>>(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn keeps_whitespace_lines() {
        let contents = "a\n  \n\tb";
        assert_eq!(lines(contents).collect::<Vec<_>>(), ["a", "  ", "\tb"]);
    }

    #[test]
    fn parses_every_line() {
        let contents = "Paid $1,200.00 to John Smith on 03/15/2023\n\
                        \n\
                        Paid $300.50 to John Smith on 04/01/2023\n";
        let transactions = parse_transactions(contents).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].amount.to_string(), "300.50");
    }

    #[test]
    fn first_bad_line_stops_parsing() {
        let contents = "Paid $1 to Al Bo on 03/15/2023\n\
                        Paid to Al Bo on 03/15/2023\n\
                        Paid $2 to Al Bo on 03/15/2023\n\
                        garbage";
        match parse_transactions(contents) {
            Err(Error::Transaction {
                line_number,
                source,
            }) => {
                assert_eq!(line_number, 2);
                assert_eq!(
                    source,
                    ParseError::NoMoney("Paid to Al Bo on 03/15/2023".to_owned())
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn whitespace_line_fails() {
        let result = parse_transactions("Paid $1 to Al Bo on 03/15/2023\n   \n");
        assert!(matches!(
            result,
            Err(Error::Transaction { line_number: 2, .. })
        ));
    }

    #[test]
    fn missing_file() {
        let result = read_transactions("./tests/this_file_does_not_exist.txt");
        assert!(matches!(result, Err(Error::MissingFile(_))));
    }
}
