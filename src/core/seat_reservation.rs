use crate::core::hall_lock::HallLocks;
use crate::domain::hall::CinemaHall;
use crate::domain::model::HallId;
use crate::domain::ports::CinemaHallRepository;
use crate::domain::reservation::Reservation;
use crate::utils::error::{Result, SeatingError};
use crate::utils::sequence::split_by_gaps;

/// Coordinates loading a hall, running the reservation rules, committing and
/// persisting. Attempts against the same hall are serialized.
pub struct SeatReservationService<R: CinemaHallRepository> {
    repository: R,
    locks: HallLocks,
}

impl<R: CinemaHallRepository> SeatReservationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            locks: HallLocks::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn register_hall(&self, hall: CinemaHall) -> Result<HallId> {
        let hall_id = hall.id();
        let _guard = self.locks.acquire(hall_id).await;

        if self.repository.get_cinema_hall(hall_id).await?.is_some() {
            tracing::warn!(%hall_id, "Cinema hall registered twice");
            return Err(SeatingError::rule("Cinema hall was already registered."));
        }

        self.repository.save(&hall).await?;
        tracing::info!(%hall_id, rows = hall.rows().len(), "Registered cinema hall");
        Ok(hall_id)
    }

    pub async fn hall(&self, hall_id: HallId) -> Result<CinemaHall> {
        self.repository
            .get_cinema_hall(hall_id)
            .await?
            .ok_or(SeatingError::NotFound { hall_id })
    }

    pub async fn reserve(&self, hall_id: HallId, reservation: Reservation) -> Result<()> {
        let _guard = self.locks.acquire(hall_id).await;

        let mut hall = self.hall(hall_id).await?;
        let reservation_id = reservation.id();

        if let Err(e) = check_reservation_possible(&hall, &reservation) {
            tracing::warn!(%hall_id, %reservation_id, "Reservation rejected: {}", e);
            return Err(e);
        }

        let seat_count = reservation.seat_count();
        hall.reserve(reservation);

        if !hall.does_reservation_id_exist(reservation_id) {
            tracing::error!(%hall_id, %reservation_id, "Reservation missing after commit");
            return Err(SeatingError::OperationFailed {
                message: "Reservation failed".to_string(),
            });
        }

        self.repository.save(&hall).await?;
        tracing::info!(%hall_id, %reservation_id, seats = seat_count, "Reservation committed");
        Ok(())
    }
}

/// Runs every reservation rule against the hall's current state without
/// touching it. The first broken rule is returned.
pub fn check_reservation_possible(hall: &CinemaHall, reservation: &Reservation) -> Result<()> {
    if hall.does_reservation_exist(reservation) {
        return Err(SeatingError::rule("Reservation was already added."));
    }

    let reserved = hall.reserved_seats_by_row();

    ensure_seats_are_free(&reserved, reservation)?;
    ensure_rows_can_hold(hall, reservation)?;
    ensure_social_distance(&reserved, reservation)?;

    tracing::debug!(
        hall_id = %hall.id(),
        reservation_id = %reservation.id(),
        existing = reserved.len(),
        "Reservation passed all checks"
    );
    Ok(())
}

type ReservedSeats<'a> = [&'a std::collections::BTreeMap<u32, Vec<u32>>];

/// Yields (requested seats, already reserved seats) for every row both sides touch.
fn shared_rows<'a>(
    reserved: &'a ReservedSeats<'a>,
    reservation: &'a Reservation,
) -> impl Iterator<Item = (&'a [u32], &'a [u32])> + 'a {
    reserved.iter().flat_map(move |existing| {
        reservation
            .seats_by_row()
            .iter()
            .filter_map(move |(row, requested)| {
                existing
                    .get(row)
                    .map(|taken| (requested.as_slice(), taken.as_slice()))
            })
    })
}

fn ensure_seats_are_free(reserved: &ReservedSeats<'_>, reservation: &Reservation) -> Result<()> {
    let overlaps = shared_rows(reserved, reservation)
        .any(|(requested, taken)| requested.iter().any(|seat| taken.contains(seat)));

    if overlaps {
        return Err(SeatingError::rule("Seats are already reserved."));
    }
    Ok(())
}

fn ensure_rows_can_hold(hall: &CinemaHall, reservation: &Reservation) -> Result<()> {
    for (&row, seats) in reservation.seats_by_row() {
        if !hall.does_row_exist(row) {
            return Err(SeatingError::rule(format!(
                "Row {} does not exist in the cinema hall.",
                row
            )));
        }

        if !hall.does_row_contain_enough_seats(row, seats.len()) {
            return Err(SeatingError::rule(format!(
                "Not enough seats available in the row {}.",
                row
            )));
        }
    }
    Ok(())
}

fn ensure_social_distance(reserved: &ReservedSeats<'_>, reservation: &Reservation) -> Result<()> {
    for (requested, taken) in shared_rows(reserved, reservation) {
        for block in split_by_gaps(taken) {
            if too_close(&block, requested) {
                return Err(SeatingError::rule(format!(
                    "Cannot reserve seats without social distance. Minimum distance required {} seats.",
                    CinemaHall::SOCIAL_DISTANCE
                )));
            }
        }
    }
    Ok(())
}

/// Compares the edges of an existing seat block with the edges of the request.
fn too_close(block: &[u32], requested: &[u32]) -> bool {
    let (Some(block_min), Some(block_max)) = (block.iter().min(), block.iter().max()) else {
        return false;
    };
    let (Some(new_min), Some(new_max)) = (requested.iter().min(), requested.iter().max()) else {
        return false;
    };

    [
        block_min.abs_diff(*new_max),
        block_max.abs_diff(*new_min),
        block_min.abs_diff(*new_min),
        block_max.abs_diff(*new_max),
    ]
    .into_iter()
    .any(|distance| distance <= CinemaHall::SOCIAL_DISTANCE)
}
