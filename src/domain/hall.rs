use crate::domain::model::{HallId, ReservationId, Row};
use crate::domain::reservation::Reservation;
use crate::utils::error::{Result, SeatingError};
use crate::utils::sequence::has_duplicates;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate root: a hall's fixed row layout plus every committed reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CinemaHall {
    id: HallId,
    rows: Vec<Row>,
    reservations: Vec<Reservation>,
}

impl CinemaHall {
    pub const MIN_ROW_COUNT: usize = 1;
    pub const MAX_ROW_COUNT: usize = 9;
    pub const EXPECTED_FIRST_ROW_NUMBER: u32 = 1;
    pub const SOCIAL_DISTANCE: u32 = 1;

    /// Builds a hall after checking the layout rules.
    ///
    /// Rules are checked in a fixed order and only the first violation is
    /// reported: row count, first row number, duplicate numbers, row order,
    /// seat count growth.
    pub fn create(rows: Vec<Row>) -> Result<Self> {
        Self::validate_rows(&rows)?;

        Ok(Self {
            id: HallId::new(),
            rows,
            reservations: Vec::new(),
        })
    }

    fn validate_rows(rows: &[Row]) -> Result<()> {
        Self::validate_row_count(rows.len())?;
        Self::validate_first_row_number(rows)?;
        Self::validate_duplicate_rows(rows)?;
        Self::validate_row_order(rows)?;
        Self::validate_seat_count_increasing(rows)
    }

    fn validate_row_count(count: usize) -> Result<()> {
        if count < Self::MIN_ROW_COUNT {
            return Err(SeatingError::rule(format!(
                "Cinema hall should have at least {} row.",
                Self::MIN_ROW_COUNT
            )));
        }
        if count > Self::MAX_ROW_COUNT {
            return Err(SeatingError::rule(format!(
                "Cinema hall should have at most {} rows.",
                Self::MAX_ROW_COUNT
            )));
        }
        Ok(())
    }

    fn validate_first_row_number(rows: &[Row]) -> Result<()> {
        match rows.first() {
            Some(first) if first.number() != Self::EXPECTED_FIRST_ROW_NUMBER => {
                Err(SeatingError::rule(format!(
                    "Cinema hall first row should have number {}.",
                    Self::EXPECTED_FIRST_ROW_NUMBER
                )))
            }
            _ => Ok(()),
        }
    }

    fn validate_duplicate_rows(rows: &[Row]) -> Result<()> {
        if has_duplicates(rows, Row::number) {
            return Err(SeatingError::rule(
                "Cannot add two or more rows with the same number to the cinema hall.",
            ));
        }
        Ok(())
    }

    fn validate_row_order(rows: &[Row]) -> Result<()> {
        if rows.windows(2).any(|pair| pair[1].number() <= pair[0].number()) {
            return Err(SeatingError::rule("Cinema hall rows should be in order."));
        }
        Ok(())
    }

    fn validate_seat_count_increasing(rows: &[Row]) -> Result<()> {
        if rows.windows(2).any(|pair| pair[1].seats() <= pair[0].seats()) {
            return Err(SeatingError::rule(
                "Rows seat count should increase with each row.",
            ));
        }
        Ok(())
    }

    /// Appends without re-checking; callers run the reservation rules first.
    pub fn reserve(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    pub fn does_reservation_exist(&self, reservation: &Reservation) -> bool {
        self.does_reservation_id_exist(reservation.id())
    }

    pub fn does_reservation_id_exist(&self, reservation_id: ReservationId) -> bool {
        self.reservations.iter().any(|r| r.id() == reservation_id)
    }

    pub fn does_row_exist(&self, row_number: u32) -> bool {
        self.row(row_number).is_some()
    }

    /// Compares against the row's total capacity, not its free seats.
    pub fn does_row_contain_enough_seats(&self, row_number: u32, seat_count: usize) -> bool {
        self.row(row_number)
            .is_some_and(|row| row.seats() as usize >= seat_count)
    }

    /// One row-to-seats map per committed reservation.
    pub fn reserved_seats_by_row(&self) -> Vec<&BTreeMap<u32, Vec<u32>>> {
        self.reservations
            .iter()
            .map(Reservation::seats_by_row)
            .collect()
    }

    pub fn id(&self) -> HallId {
        self.id
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row_number: u32) -> Option<&Row> {
        self.rows.iter().find(|row| row.number() == row_number)
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
}
