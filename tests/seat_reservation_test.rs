use async_trait::async_trait;
use hall_seating::{
    CinemaHall, CinemaHallRepository, HallId, InMemoryCinemaHallRepository, Reservation, Row,
    SeatPosition, SeatReservationService, SeatingError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Wraps the in-memory store and counts saves.
#[derive(Default)]
struct RecordingRepository {
    inner: InMemoryCinemaHallRepository,
    saves: AtomicUsize,
}

impl RecordingRepository {
    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CinemaHallRepository for RecordingRepository {
    async fn get_cinema_hall(&self, id: HallId) -> hall_seating::Result<Option<CinemaHall>> {
        self.inner.get_cinema_hall(id).await
    }

    async fn save(&self, hall: &CinemaHall) -> hall_seating::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(hall).await
    }
}

fn hall(layout: &[(u32, u32)]) -> CinemaHall {
    CinemaHall::create(
        layout
            .iter()
            .map(|&(number, seats)| Row::new(number, seats))
            .collect(),
    )
    .unwrap()
}

fn reservation(pairs: &[(u32, u32)]) -> Reservation {
    Reservation::new(
        pairs
            .iter()
            .map(|&(row, number)| SeatPosition::new(row, number).unwrap())
            .collect(),
    )
    .unwrap()
}

fn full_booking() -> Reservation {
    reservation(&[
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 2),
        (2, 3),
        (3, 1),
        (3, 2),
        (3, 3),
        (3, 4),
        (9, 1),
        (9, 2),
        (9, 3),
        (9, 4),
        (9, 5),
    ])
}

async fn service_with(
    layout: &[(u32, u32)],
) -> (SeatReservationService<RecordingRepository>, HallId) {
    let service = SeatReservationService::new(RecordingRepository::default());
    let hall_id = service.register_hall(hall(layout)).await.unwrap();
    (service, hall_id)
}

fn message(result: hall_seating::Result<()>) -> String {
    result.unwrap_err().to_string()
}

#[tokio::test]
async fn test_full_row_booking_succeeds() {
    let (service, hall_id) = service_with(&[(1, 2), (2, 3), (3, 4), (9, 5)]).await;

    service.reserve(hall_id, full_booking()).await.unwrap();

    let stored = service.hall(hall_id).await.unwrap();
    assert_eq!(stored.reservations().len(), 1);
    assert_eq!(service.repository().saves(), 2);
}

#[tokio::test]
async fn test_cannot_reserve_already_reserved_seats() {
    let (service, hall_id) = service_with(&[(1, 2), (2, 3), (3, 4), (9, 5)]).await;

    service.reserve(hall_id, full_booking()).await.unwrap();
    let result = service.reserve(hall_id, full_booking()).await;

    assert_eq!(message(result), "Seats are already reserved.");
}

#[tokio::test]
async fn test_same_reservation_twice_is_rejected() {
    let (service, hall_id) = service_with(&[(1, 10)]).await;
    let booking = reservation(&[(1, 1), (1, 2)]);

    service.reserve(hall_id, booking.clone()).await.unwrap();
    let result = service.reserve(hall_id, booking).await;

    assert_eq!(message(result), "Reservation was already added.");
}

#[tokio::test]
async fn test_cannot_reserve_without_social_distance() {
    let (service, hall_id) = service_with(&[(1, 10)]).await;

    service
        .reserve(hall_id, reservation(&[(1, 1), (1, 2)]))
        .await
        .unwrap();
    let result = service.reserve(hall_id, reservation(&[(1, 3)])).await;

    assert_eq!(
        message(result),
        "Cannot reserve seats without social distance. Minimum distance required 1 seats."
    );
}

#[tokio::test]
async fn test_reserve_with_social_distance_passes() {
    let (service, hall_id) = service_with(&[(1, 10)]).await;

    service
        .reserve(hall_id, reservation(&[(1, 1), (1, 2)]))
        .await
        .unwrap();
    service
        .reserve(hall_id, reservation(&[(1, 5)]))
        .await
        .unwrap();
    service
        .reserve(hall_id, reservation(&[(1, 8), (1, 9), (1, 10)]))
        .await
        .unwrap();

    let stored = service.hall(hall_id).await.unwrap();
    assert_eq!(stored.reservations().len(), 3);
}

#[tokio::test]
async fn test_missing_row_is_rejected() {
    let (service, hall_id) = service_with(&[(1, 3), (2, 4)]).await;

    let result = service.reserve(hall_id, reservation(&[(5, 1)])).await;

    assert_eq!(message(result), "Row 5 does not exist in the cinema hall.");
}

#[tokio::test]
async fn test_not_enough_seats_in_row() {
    let (service, hall_id) = service_with(&[(1, 1), (2, 4), (3, 5), (9, 6)]).await;

    let result = service.reserve(hall_id, full_booking()).await;

    assert!(message(result).starts_with("Not enough seats available in the row"));
}

#[tokio::test]
async fn test_rejection_leaves_hall_untouched() {
    let (service, hall_id) = service_with(&[(1, 10)]).await;
    service
        .reserve(hall_id, reservation(&[(1, 1), (1, 2)]))
        .await
        .unwrap();
    let before = service.hall(hall_id).await.unwrap();
    let saves_before = service.repository().saves();

    let result = service.reserve(hall_id, reservation(&[(1, 2), (1, 3)])).await;

    assert!(result.unwrap_err().is_rule_violation());
    assert_eq!(service.hall(hall_id).await.unwrap(), before);
    assert_eq!(service.repository().saves(), saves_before);
}

#[tokio::test]
async fn test_registering_stale_copy_keeps_committed_reservations() {
    let (service, hall_id) = service_with(&[(1, 10)]).await;
    let stale_copy = service.hall(hall_id).await.unwrap();

    service
        .reserve(hall_id, reservation(&[(1, 1)]))
        .await
        .unwrap();
    let saves_before = service.repository().saves();

    let result = service.register_hall(stale_copy).await;

    let err = result.unwrap_err();
    assert!(err.is_rule_violation());
    assert_eq!(err.to_string(), "Cinema hall was already registered.");
    assert_eq!(service.hall(hall_id).await.unwrap().reservations().len(), 1);
    assert_eq!(service.repository().saves(), saves_before);
}

#[tokio::test]
async fn test_unknown_hall_is_not_found() {
    let service = SeatReservationService::new(InMemoryCinemaHallRepository::new());
    let hall_id = HallId::new();

    let err = service
        .reserve(hall_id, reservation(&[(1, 1)]))
        .await
        .unwrap_err();

    assert!(matches!(err, SeatingError::NotFound { hall_id: id } if id == hall_id));
}

#[tokio::test]
async fn test_concurrent_overlapping_requests_book_once() {
    let service = Arc::new(SeatReservationService::new(
        InMemoryCinemaHallRepository::new(),
    ));
    let hall_id = service.register_hall(hall(&[(1, 10)])).await.unwrap();

    let attempts: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .reserve(hall_id, reservation(&[(1, 4), (1, 5)]))
                    .await
            })
        })
        .collect();

    let mut committed = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(()) => committed += 1,
            Err(e) => assert_eq!(e.to_string(), "Seats are already reserved."),
        }
    }

    assert_eq!(committed, 1);
    assert_eq!(
        service.hall(hall_id).await.unwrap().reservations().len(),
        1
    );
}
