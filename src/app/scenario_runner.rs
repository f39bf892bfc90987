use crate::config::scenario::{Expectation, ReservationRequest, ScenarioConfig};
use crate::core::seat_reservation::SeatReservationService;
use crate::core::{CinemaHall, CinemaHallRepository, HallId, Reservation, Row, SeatPosition};
use crate::utils::error::{Result, SeatingError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationOutcome {
    pub label: String,
    pub hall: String,
    pub status: OutcomeStatus,
    pub reason: Option<String>,
    pub expected: Option<Expectation>,
}

impl ReservationOutcome {
    pub fn matches_expectation(&self) -> bool {
        match self.expected {
            Some(Expectation::Accepted) => self.status == OutcomeStatus::Accepted,
            Some(Expectation::Rejected) => self.status == OutcomeStatus::Rejected,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HallSummary {
    pub name: String,
    pub hall_id: HallId,
    pub rows: usize,
    pub reservations: usize,
    pub reserved_seats: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub outcomes: Vec<ReservationOutcome>,
    pub halls: Vec<HallSummary>,
}

impl ScenarioReport {
    pub fn accepted(&self) -> usize {
        self.count(OutcomeStatus::Accepted)
    }

    pub fn rejected(&self) -> usize {
        self.count(OutcomeStatus::Rejected)
    }

    fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn expectation_mismatches(&self) -> Vec<&ReservationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.matches_expectation())
            .collect()
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenario: {}", self.scenario)?;
        for outcome in &self.outcomes {
            let status = match outcome.status {
                OutcomeStatus::Accepted => "accepted",
                OutcomeStatus::Rejected => "rejected",
            };
            write!(f, "  [{}] {} ({})", status, outcome.label, outcome.hall)?;
            if let Some(reason) = &outcome.reason {
                write!(f, ": {}", reason)?;
            }
            if !outcome.matches_expectation() {
                write!(f, "  <- unexpected")?;
            }
            writeln!(f)?;
        }
        for hall in &self.halls {
            writeln!(
                f,
                "  Hall {}: {} rows, {} reservations, {} seats taken",
                hall.name, hall.rows, hall.reservations, hall.reserved_seats
            )?;
        }
        write!(
            f,
            "Accepted: {}, Rejected: {}, Unexpected: {}",
            self.accepted(),
            self.rejected(),
            self.expectation_mismatches().len()
        )
    }
}

/// Replays a scenario: registers every hall, then submits the reservation
/// requests in file order.
pub struct ScenarioRunner<R: CinemaHallRepository> {
    service: SeatReservationService<R>,
}

impl<R: CinemaHallRepository> ScenarioRunner<R> {
    pub fn new(service: SeatReservationService<R>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &SeatReservationService<R> {
        &self.service
    }

    pub async fn run(&self, config: &ScenarioConfig) -> Result<ScenarioReport> {
        tracing::info!(
            "Running scenario '{}' with {} halls and {} reservations",
            config.scenario.name,
            config.halls.len(),
            config.reservations.len()
        );

        let mut hall_ids: Vec<(String, HallId)> = Vec::with_capacity(config.halls.len());
        for (index, definition) in config.halls.iter().enumerate() {
            let rows = definition
                .rows
                .iter()
                .map(|&(number, seats)| Row::new(number, seats))
                .collect();

            let hall = CinemaHall::create(rows).map_err(|e| SeatingError::InvalidConfigValueError {
                field: format!("halls[{}].rows", index),
                value: definition.name.clone(),
                reason: e.to_string(),
            })?;

            let hall_id = self.service.register_hall(hall).await?;
            hall_ids.push((definition.name.clone(), hall_id));
        }
        let lookup: HashMap<&str, HallId> = hall_ids
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
            .collect();

        let mut outcomes = Vec::with_capacity(config.reservations.len());
        for (index, request) in config.reservations.iter().enumerate() {
            let hall_id = lookup.get(request.hall.as_str()).copied().ok_or_else(|| {
                SeatingError::InvalidConfigValueError {
                    field: format!("reservations[{}].hall", index),
                    value: request.hall.clone(),
                    reason: "No hall with this name is defined".to_string(),
                }
            })?;

            let outcome = self.submit(hall_id, request, index).await?;
            if !outcome.matches_expectation() {
                tracing::warn!("'{}' did not end as expected", outcome.label);
            }
            outcomes.push(outcome);
        }

        let mut halls = Vec::with_capacity(hall_ids.len());
        for (name, hall_id) in hall_ids {
            let hall = self.service.hall(hall_id).await?;
            halls.push(HallSummary {
                name,
                hall_id,
                rows: hall.rows().len(),
                reservations: hall.reservations().len(),
                reserved_seats: hall.reservations().iter().map(Reservation::seat_count).sum(),
            });
        }

        Ok(ScenarioReport {
            scenario: config.scenario.name.clone(),
            outcomes,
            halls,
        })
    }

    /// Rule violations become rejected outcomes; anything else aborts the run.
    async fn submit(
        &self,
        hall_id: HallId,
        request: &ReservationRequest,
        index: usize,
    ) -> Result<ReservationOutcome> {
        let label = request.display_name(index);

        let attempt = match build_reservation(request) {
            Ok(reservation) => self.service.reserve(hall_id, reservation).await,
            Err(e) => Err(e),
        };

        let (status, reason) = match attempt {
            Ok(()) => (OutcomeStatus::Accepted, None),
            Err(e) if e.is_rule_violation() => (OutcomeStatus::Rejected, Some(e.to_string())),
            Err(e) => return Err(e),
        };

        Ok(ReservationOutcome {
            label,
            hall: request.hall.clone(),
            status,
            reason,
            expected: request.expect,
        })
    }
}

pub fn build_reservation(request: &ReservationRequest) -> Result<Reservation> {
    let seats = request
        .seats
        .iter()
        .map(|&(row, number)| SeatPosition::new(row, number))
        .collect::<Result<Vec<_>>>()?;

    Reservation::new(seats)
}
