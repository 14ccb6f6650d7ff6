use crate::error::Error;
use crate::transaction::Transaction;
use rust_decimal::Decimal;
use std::{collections::HashMap, hash::Hash, io::Write};

/// Buckets `items` by `key`, keeping their relative order inside each bucket.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();

    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }

    groups
}

/// Summed amount per counterparty name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Totals(HashMap<String, Decimal>);

impl Totals {
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self, Error> {
        let groups = group_by(transactions, |transaction| transaction.name.clone());
        let mut totals = HashMap::with_capacity(groups.len());

        for (name, group) in groups {
            let total = group
                .iter()
                .try_fold(Decimal::ZERO, |sum, transaction| {
                    sum.checked_add(transaction.amount)
                })
                .ok_or_else(|| Error::Overflow(name.clone()))?;
            totals.insert(name, total);
        }

        Ok(Totals(totals))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// One `<name> : <total>` line per counterparty, in no particular order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (name, total) in &self.0 {
            writeln!(writer, "{name} : {total}")?;
        }

        Ok(())
    }
}
