//! Grouped temporal index - per-key ordered record lists with occurrence counting
//!
//! The index answers the two temporal question shapes of the engine:
//! snapshot ("most recent record at-or-before a date") and interval
//! ("earliest record whose period end is at-or-after a date"), plus the
//! range bracket derived from the snapshot scan.

use crate::types::DateRange;
use chrono::NaiveDate;
use hashbrown::HashMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// A record that can be grouped and ordered by the temporal index
pub trait TemporalRecord {
    /// Grouping key (security, deposit, currency, ...)
    type Key: Eq + Hash + Clone;

    /// Key of the group this record belongs to
    fn group_key(&self) -> Self::Key;

    /// Date the record is ordered by; `None` marks an open-ended record
    /// and sorts before every concrete date
    fn effective_date(&self) -> Option<NaiveDate>;
}

/// Canonical record ordering: descending by date, open-ended first
pub fn canonical_date_cmp(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => y.cmp(&x),
    }
}

/// Per-key ordered record storage with a (key, date) occurrence counter
///
/// The index is owned exclusively by one record collection. It is rebuilt
/// wholesale (`reset` + `load`) when the collection is reconstructed and
/// updated incrementally on each insert.
#[derive(Debug, Clone)]
pub struct GroupedTemporalIndex<K, R>
where
    K: Eq + Hash + Clone,
    R: TemporalRecord<Key = K>,
{
    /// Records per grouping key, held in canonical order
    groups: HashMap<K, Vec<R>>,
    /// Live record count per (key, date); duplicates are tolerated here
    /// and surfaced only through `valid_count`
    counts: HashMap<(K, Option<NaiveDate>), u32>,
}

impl<K, R> GroupedTemporalIndex<K, R>
where
    K: Eq + Hash + Clone,
    R: TemporalRecord<Key = K>,
{
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            counts: HashMap::new(),
        }
    }

    /// Append a record to its key's list and bump the (key, date) counter.
    ///
    /// Precondition: records for a key must arrive in canonical order
    /// (descending date, open-ended first). This entry point never sorts;
    /// use [`insert`](Self::insert) for records arriving out of order or
    /// [`load`](Self::load) for bulk input of unknown order.
    pub fn adjust(&mut self, record: R) {
        let key = record.group_key();
        *self
            .counts
            .entry((key.clone(), record.effective_date()))
            .or_insert(0) += 1;
        self.groups.entry(key).or_default().push(record);
    }

    /// Insert a single record at its canonical position within its group
    pub fn insert(&mut self, record: R) {
        let key = record.group_key();
        let date = record.effective_date();
        *self.counts.entry((key.clone(), date)).or_insert(0) += 1;
        let group = self.groups.entry(key).or_default();
        let pos = group
            .partition_point(|r| canonical_date_cmp(r.effective_date(), date) != Ordering::Greater);
        group.insert(pos, record);
    }

    /// Bulk-load records, sorting each group defensively afterwards
    pub fn load<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = R>,
    {
        for record in records {
            self.adjust(record);
        }
        for group in self.groups.values_mut() {
            group.sort_by(|a, b| canonical_date_cmp(a.effective_date(), b.effective_date()));
        }
    }

    /// Clear all state ahead of a full rebuild
    pub fn reset(&mut self) {
        self.groups.clear();
        self.counts.clear();
    }

    /// True iff exactly one live record shares this record's (key, date)
    pub fn valid_count(&self, record: &R) -> bool {
        self.counts
            .get(&(record.group_key(), record.effective_date()))
            .copied()
            == Some(1)
    }

    /// Records for a key in canonical order
    pub fn records(&self, key: &K) -> &[R] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every record in the index
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.groups.values().flat_map(|group| group.iter())
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Snapshot query: the most recent record at-or-before `date`.
    ///
    /// Scans the key's list in stored order (descending date) and returns
    /// the first record whose date is present and not after `date`. A
    /// value holds constant until superseded by a later observation.
    pub fn snapshot_at(&self, key: &K, date: NaiveDate) -> Option<&R> {
        self.groups
            .get(key)?
            .iter()
            .find(|r| matches!(r.effective_date(), Some(d) if d <= date))
    }

    /// Interval query: the period covering `date`.
    ///
    /// Scans from earliest period-end to latest (reverse of stored order)
    /// and returns the first record whose end is open or at-or-after
    /// `date`. Periods are non-overlapping, so the minimal qualifying end
    /// identifies the unique covering period.
    pub fn covering_at(&self, key: &K, date: NaiveDate) -> Option<&R> {
        self.groups.get(key)?.iter().rev().find(|r| {
            match r.effective_date() {
                None => true,
                Some(end) => end >= date,
            }
        })
    }

    /// Range bracket: the records in effect at the start and end of `range`.
    ///
    /// Walks the key's records from earliest to latest date. `latest`
    /// tracks every record visited; `first` tracks them only while the
    /// record's date is at-or-before `range.start`. The scan stops at the
    /// first record strictly after `range.end`; open-ended records sort as
    /// latest and also stop it.
    pub fn bracket(&self, key: &K, range: &DateRange) -> (Option<&R>, Option<&R>) {
        let mut first = None;
        let mut latest = None;
        if let Some(group) = self.groups.get(key) {
            for record in group.iter().rev() {
                let date = match record.effective_date() {
                    Some(d) if d <= range.end => d,
                    _ => break,
                };
                latest = Some(record);
                if date <= range.start {
                    first = Some(record);
                }
            }
        }
        (first, latest)
    }
}

impl<K, R> Default for GroupedTemporalIndex<K, R>
where
    K: Eq + Hash + Clone,
    R: TemporalRecord<Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}
