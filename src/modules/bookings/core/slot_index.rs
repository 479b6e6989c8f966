// In-memory index of the reservations that can block a slot.
//
// Purpose
// - Group live reservations per business date, sorted by start, so repeated slot
//   queries against one snapshot do not rescan unrelated dates.
//
// Responsibilities
// - Drop cancelled and completed reservations at build time.
// - Answer "is this span free on this date" with the same half-open test as the overlap checker.

use crate::modules::bookings::core::overlap::MinuteSpan;
use crate::modules::bookings::core::reservation::Reservation;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Occupied {
    id: String,
    span: MinuteSpan,
}

#[derive(Debug, Clone, Default)]
pub struct SlotIndex {
    by_date: BTreeMap<NaiveDate, Vec<Occupied>>,
}

impl SlotIndex {
    pub fn build<'a>(reservations: impl IntoIterator<Item = &'a Reservation>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Vec<Occupied>> = BTreeMap::new();
        for reservation in reservations {
            if !reservation.status.blocks_slot() {
                continue;
            }
            by_date.entry(reservation.date).or_default().push(Occupied {
                id: reservation.id.clone(),
                span: reservation.span(),
            });
        }
        for entries in by_date.values_mut() {
            entries.sort_by_key(|entry| entry.span.start);
        }
        Self { by_date }
    }

    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Occupied spans on `date`, ascending by start.
    pub fn occupied_on(&self, date: NaiveDate) -> impl Iterator<Item = MinuteSpan> + '_ {
        self.by_date
            .get(&date)
            .into_iter()
            .flatten()
            .map(|entry| entry.span)
    }

    pub fn is_free(&self, date: NaiveDate, span: MinuteSpan, exclude_id: Option<&str>) -> bool {
        let Some(entries) = self.by_date.get(&date) else {
            return true;
        };
        // sorted by start: nothing past the first entry starting at or after span.end can overlap
        entries
            .iter()
            .take_while(|entry| entry.span.start < span.end)
            .filter(|entry| exclude_id != Some(entry.id.as_str()))
            .all(|entry| !entry.span.overlaps(&span))
    }
}
