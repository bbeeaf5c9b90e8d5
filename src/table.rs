use crate::entry::EntryInput;
use crate::errors::{Field, ValidationError};
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable handle for one entry. Ranks move on delete, ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(EntryId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: EntryId,
    pub food: String,
    pub amount: u64,
    pub kcal_per_unit: u64,
    pub centikcal: u64,
}

impl LogEntry {
    pub fn kcal(&self) -> f64 {
        self.centikcal as f64 / 100.0
    }
}

/// An entry as it appears in the table, with its 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRow {
    pub id: EntryId,
    pub rank: usize,
    pub food: String,
    pub amount: u64,
    pub kcal: f64,
    #[serde(skip)]
    pub centikcal: u64,
}

impl LogRow {
    fn project(rank: usize, entry: &LogEntry) -> Self {
        Self {
            id: entry.id,
            rank,
            food: entry.food.clone(),
            amount: entry.amount,
            kcal: entry.kcal(),
            centikcal: entry.centikcal,
        }
    }
}

/// Everything the table view needs, derived from the log in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSnapshot {
    pub rows: Vec<LogRow>,
    pub total_amount: u64,
    pub total_centikcal: u64,
    pub hidden: bool,
}

impl LogSnapshot {
    pub fn total_kcal(&self) -> f64 {
        self.total_centikcal as f64 / 100.0
    }
}

/// Ordered food log. Row order is insertion order and rank is position, so
/// ranks are `1..=len` after every operation.
#[derive(Debug, Default)]
pub struct FoodLog {
    entries: Vec<LogEntry>,
    total_amount: u64,
    total_centikcal: u64,
    next_id: u64,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an entry. Nothing changes when validation fails,
    /// including when the entry would overflow either running total.
    pub fn submit_entry(
        &mut self,
        food: &str,
        amount: &str,
        kcal_per_unit: &str,
    ) -> Result<LogRow, ValidationError> {
        let input = EntryInput::parse(food, amount, kcal_per_unit)?;
        self.push(input)
    }

    fn push(&mut self, input: EntryInput) -> Result<LogRow, ValidationError> {
        let centikcal = input.centikcal();
        let total_amount = self
            .total_amount
            .checked_add(input.amount)
            .ok_or(ValidationError::TotalsOverflow { field: Field::Amount })?;
        let total_centikcal = self
            .total_centikcal
            .checked_add(centikcal)
            .ok_or(ValidationError::TotalsOverflow {
                field: Field::KcalPerUnit,
            })?;

        self.next_id += 1;
        self.entries.push(LogEntry {
            id: EntryId(self.next_id),
            centikcal,
            food: input.food,
            amount: input.amount,
            kcal_per_unit: input.kcal_per_unit,
        });
        self.total_amount = total_amount;
        self.total_centikcal = total_centikcal;

        let rank = self.entries.len();
        Ok(LogRow::project(rank, &self.entries[rank - 1]))
    }

    /// Removes the entry and takes its amount and calories back out of the
    /// totals. Unknown ids leave the log untouched.
    pub fn delete_entry(&mut self, id: EntryId) -> Option<LogEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let entry = self.entries.remove(index);

        // totals always include every live entry, so these cannot underflow
        self.total_amount -= entry.amount;
        self.total_centikcal -= entry.centikcal;
        Some(entry)
    }

    pub fn rows(&self) -> impl Iterator<Item = LogRow> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| LogRow::project(index + 1, entry))
    }

    pub fn rank_of(&self, id: EntryId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .map(|index| index + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The empty-state indicator: hidden exactly when there are no rows.
    pub fn is_hidden(&self) -> bool {
        self.is_empty()
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn total_centikcal(&self) -> u64 {
        self.total_centikcal
    }

    pub fn total_kcal(&self) -> f64 {
        self.total_centikcal as f64 / 100.0
    }

    pub fn snapshot(&self) -> LogSnapshot {
        LogSnapshot {
            rows: self.rows().collect(),
            total_amount: self.total_amount,
            total_centikcal: self.total_centikcal,
            hidden: self.is_hidden(),
        }
    }
}
