use std::collections::HashMap;

use crate::score::{DateKey, ScoreRow};

/// Rows sharing one date, in store order (score descending)
#[derive(Debug, Clone, PartialEq)]
pub struct DateBucket {
    pub date: DateKey,
    pub rows: Vec<ScoreRow>,
}

impl DateBucket {
    fn new(date: DateKey) -> Self {
        Self {
            date,
            rows: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ScoreRow)> {
        self.rows.iter().enumerate()
    }
}

/// Date buckets in the order each date first appeared in the input
#[derive(Debug, Clone, Default)]
pub struct DateGroups {
    buckets: Vec<DateBucket>,
    index: HashMap<DateKey, usize>,
}

impl DateGroups {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, row: ScoreRow) {
        let slot = match self.index.get(&row.date) {
            Some(&slot) => slot,
            None => {
                self.buckets.push(DateBucket::new(row.date.clone()));
                let slot = self.buckets.len() - 1;
                self.index.insert(row.date.clone(), slot);
                slot
            }
        };
        self.buckets[slot].rows.push(row);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Partition rows by date, preserving input order within each bucket.
///
/// Expects rows sorted by (date desc, score desc) and does not re-sort them.
pub fn group<I>(rows: I) -> DateGroups
where
    I: IntoIterator<Item = ScoreRow>,
{
    let mut groups = DateGroups::new();
    for row in rows {
        groups.push(row);
    }
    groups
}
