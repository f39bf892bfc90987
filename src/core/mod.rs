pub mod hall_lock;
pub mod seat_reservation;

pub use crate::domain::hall::CinemaHall;
pub use crate::domain::model::{HallId, ReservationId, Row, RowId, SeatPosition};
pub use crate::domain::ports::CinemaHallRepository;
pub use crate::domain::reservation::Reservation;
pub use crate::utils::error::Result;
