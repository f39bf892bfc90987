pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::memory::InMemoryCinemaHallRepository;
pub use crate::app::scenario_runner::{ScenarioReport, ScenarioRunner};
pub use crate::config::scenario::ScenarioConfig;
pub use crate::core::seat_reservation::{check_reservation_possible, SeatReservationService};
pub use crate::core::{
    CinemaHall, CinemaHallRepository, HallId, Reservation, ReservationId, Row, SeatPosition,
};
pub use crate::utils::error::{Result, SeatingError};
