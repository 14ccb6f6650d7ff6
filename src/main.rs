mod error;
mod statement;
mod totals;
mod transaction;

use error::Error;
use log::{debug, info};
use std::io::Write;
use totals::Totals;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        if let Error::Transaction { line_number, .. } = &err {
            debug!("failed on line {line_number}");
        }
        let _ = writeln!(std::io::stdout(), "❌ {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let filename = filename()?;
    let transactions = statement::read_transactions(&filename)?;
    let count = transactions.len();
    let totals = Totals::from_transactions(transactions)?;
    info!("{count} transactions, {} counterparties", totals.len());

    totals.write_to(&mut std::io::stdout().lock())?;

    Ok(())
}

fn filename() -> Result<String, Error> {
    let mut args = std::env::args().skip(1);

    match (args.next(), args.next()) {
        (Some(filename), None) => Ok(filename),
        _ => Err(Error::Usage),
    }
}
