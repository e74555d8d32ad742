//! Client-side ordering for record lists.
//!
//! # Invariants
//! - Comparison is case-insensitive and accent-insensitive first; accents
//!   only break ties between otherwise equal keys.
//! - Sorting is stable: equal keys keep collection order.

use crate::model::record::Record;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sortable record column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Current list ordering. Defaults to title ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl RecordSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column-header click semantics: same field flips, new field resets to ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = SortKey::new(field_text(a, self.field))
            .cmp(&SortKey::new(field_text(b, self.field)));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn apply(&self, records: &mut [Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted(&self, mut records: Vec<Record>) -> Vec<Record> {
        self.apply(&mut records);
        records
    }
}

fn field_text(record: &Record, field: SortField) -> &str {
    match field {
        SortField::Title => &record.title,
        SortField::Body => &record.body,
    }
}

/// Primary key strips diacritics (`É` -> `e`); secondary keeps them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    folded: String,
    lowered: String,
}

impl SortKey {
    fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let folded = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
        Self { folded, lowered }
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordSort, SortDirection, SortField};
    use crate::model::record::{seed_records, Record};

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(|record| record.title.as_str()).collect()
    }

    #[test]
    fn default_sorts_titles_ascending() {
        let sorted = RecordSort::default().sorted(seed_records());
        assert_eq!(
            titles(&sorted),
            vec![
                "Another Entry",
                "Final Example",
                "First Record",
                "Important Data",
                "Second Record",
            ]
        );
    }

    #[test]
    fn comparison_ignores_case() {
        let records = vec![
            Record::new("1", "beta", ""),
            Record::new("2", "Alpha", ""),
            Record::new("3", "ALPHA", ""),
        ];
        let sorted = RecordSort::default().sorted(records);
        let ids: Vec<&str> = sorted.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn accented_titles_sort_with_their_base_letter() {
        let records = vec![
            Record::new("1", "Zebra", ""),
            Record::new("2", "Éclair", ""),
            Record::new("3", "apple", ""),
            Record::new("4", "eclair", ""),
        ];
        let sorted = RecordSort::default().sorted(records);
        assert_eq!(titles(&sorted), vec!["apple", "eclair", "Éclair", "Zebra"]);

        let sort = RecordSort::new(SortField::Title, SortDirection::Desc);
        let sorted = sort.sorted(sorted);
        assert_eq!(titles(&sorted), vec!["Zebra", "Éclair", "eclair", "apple"]);
    }

    #[test]
    fn toggle_flips_same_field_and_resets_new_field() {
        let mut sort = RecordSort::default();
        sort.toggle(SortField::Title);
        assert_eq!(sort, RecordSort::new(SortField::Title, SortDirection::Desc));

        sort.toggle(SortField::Body);
        assert_eq!(sort, RecordSort::new(SortField::Body, SortDirection::Asc));
    }

    #[test]
    fn descending_body_order() {
        let sort = RecordSort::new(SortField::Body, SortDirection::Desc);
        let sorted = sort.sorted(seed_records());
        let ids: Vec<&str> = sorted.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "1", "2", "5", "3"]);
    }
}
