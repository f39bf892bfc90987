use crate::core::{CinemaHall, CinemaHallRepository, HallId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keeps halls in process memory. Loads hand out clones, so nothing a caller
/// does to a loaded hall is visible until it is saved.
#[derive(Debug, Default)]
pub struct InMemoryCinemaHallRepository {
    store: RwLock<HashMap<HallId, CinemaHall>>,
}

impl InMemoryCinemaHallRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl CinemaHallRepository for InMemoryCinemaHallRepository {
    async fn get_cinema_hall(&self, id: HallId) -> Result<Option<CinemaHall>> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, hall: &CinemaHall) -> Result<()> {
        tracing::debug!(hall_id = %hall.id(), "Saving cinema hall");
        self.store.write().await.insert(hall.id(), hall.clone());
        Ok(())
    }
}
