use crate::domain::model::{ReservationId, SeatPosition};
use crate::utils::error::{Result, SeatingError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A validated request for seats, grouped by row number.
///
/// Seat numbers inside a row keep the order they were requested in. Repeated
/// seat numbers within a row are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    seats_by_row: BTreeMap<u32, Vec<u32>>,
}

impl Reservation {
    pub const MIN_SEAT_COUNT: usize = 1;
    pub const MAX_SEAT_COUNT: usize = 5;

    pub fn new(seats: Vec<SeatPosition>) -> Result<Self> {
        if seats.is_empty() {
            return Err(SeatingError::rule(
                "Reservation must have at least one seat.",
            ));
        }

        let seats_by_row = Self::group_by_row(&seats);

        let invalid_group = seats_by_row
            .values()
            .any(|group| group.len() < Self::MIN_SEAT_COUNT || group.len() > Self::MAX_SEAT_COUNT);
        if invalid_group {
            return Err(SeatingError::rule(format!(
                "Reservation must be between {} and {} seats.",
                Self::MIN_SEAT_COUNT,
                Self::MAX_SEAT_COUNT
            )));
        }

        Ok(Self {
            id: ReservationId::new(),
            seats_by_row,
        })
    }

    fn group_by_row(seats: &[SeatPosition]) -> BTreeMap<u32, Vec<u32>> {
        let mut grouped: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for seat in seats {
            grouped.entry(seat.row()).or_default().push(seat.number());
        }
        grouped
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn seats_by_row(&self) -> &BTreeMap<u32, Vec<u32>> {
        &self.seats_by_row
    }

    pub fn seats_in_row(&self, row: u32) -> Option<&[u32]> {
        self.seats_by_row.get(&row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = u32> + '_ {
        self.seats_by_row.keys().copied()
    }

    pub fn seat_count(&self) -> usize {
        self.seats_by_row.values().map(Vec::len).sum()
    }
}
