use crate::domain::hall::CinemaHall;
use crate::domain::model::HallId;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage port for hall aggregates.
///
/// Implementations must return exactly what was last saved for an id.
#[async_trait]
pub trait CinemaHallRepository: Send + Sync {
    async fn get_cinema_hall(&self, id: HallId) -> Result<Option<CinemaHall>>;
    async fn save(&self, hall: &CinemaHall) -> Result<()>;
}
