//! Unit tests for the in-memory booking repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingOtp, BookingStatus};
use crate::domain::entities::one_time_code::hash_code;
use crate::repositories::booking::{BookingRepository, MockBookingRepository};

async fn seeded(status: BookingStatus) -> (MockBookingRepository, Booking) {
    let repo = MockBookingRepository::new();
    let mut booking = Booking::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
    booking.status = status;
    let booking = repo.create(booking).await.unwrap();
    (repo, booking)
}

fn otp(code: &str) -> BookingOtp {
    BookingOtp::new(hash_code(code), Duration::minutes(30))
}

#[tokio::test]
async fn test_transition_applies_only_from_expected_status() {
    let (repo, booking) = seeded(BookingStatus::Pending).await;

    let updated = repo
        .transition_status(booking.id, BookingStatus::Pending, BookingStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(updated.unwrap().status, BookingStatus::Confirmed);

    // Second writer with the same expectation loses
    let lost = repo
        .transition_status(booking.id, BookingStatus::Pending, BookingStatus::Closed)
        .await
        .unwrap();
    assert!(lost.is_none());
    let stored = repo.find_by_id(booking.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_attach_proof_requires_confirmed() {
    let (repo, booking) = seeded(BookingStatus::Pending).await;
    let result = repo
        .attach_proof(booking.id, "before.jpg", "after.jpg", otp("123456"))
        .await
        .unwrap();
    assert!(result.is_none());

    let (repo, booking) = seeded(BookingStatus::Confirmed).await;
    let updated = repo
        .attach_proof(booking.id, "before.jpg", "after.jpg", otp("123456"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, BookingStatus::Completed);
    assert_eq!(updated.before_working.as_deref(), Some("before.jpg"));
    assert!(updated.otp.is_some());
}

#[tokio::test]
async fn test_consume_otp_checks_digest_and_clears() {
    let (repo, booking) = seeded(BookingStatus::Confirmed).await;
    repo.attach_proof(booking.id, "b", "a", otp("654321"))
        .await
        .unwrap();

    assert!(repo
        .consume_otp(booking.id, &hash_code("111111"))
        .await
        .unwrap()
        .is_none());

    let closed = repo
        .consume_otp(booking.id, &hash_code("654321"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(closed.status, BookingStatus::Closed);
    assert!(closed.otp.is_none());

    assert!(repo
        .consume_otp(booking.id, &hash_code("654321"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_set_rating_rejected_while_pending() {
    let (repo, booking) = seeded(BookingStatus::Pending).await;
    assert!(repo.set_rating(booking.id, 4.0).await.unwrap().is_none());

    let (repo, booking) = seeded(BookingStatus::Closed).await;
    let rated = repo.set_rating(booking.id, 4.0).await.unwrap().unwrap();
    assert_eq!(rated.rating, Some(4.0));
}

#[tokio::test]
async fn test_find_by_listings_and_ratings() {
    let repo = MockBookingRepository::new();
    let listing_a = Uuid::new_v4();
    let listing_b = Uuid::new_v4();
    let customer = Uuid::new_v4();

    for (listing, rating) in [(listing_a, Some(5.0)), (listing_a, None), (listing_b, Some(2.0))] {
        let mut booking = Booking::new(customer, listing, Utc::now());
        booking.status = BookingStatus::Closed;
        booking.rating = rating;
        repo.create(booking).await.unwrap();
    }

    assert_eq!(repo.find_by_listings(&[listing_a]).await.unwrap().len(), 2);
    assert_eq!(repo.find_by_listings(&[listing_a, listing_b]).await.unwrap().len(), 3);
    assert!(repo.find_by_listings(&[]).await.unwrap().is_empty());
    assert_eq!(repo.find_by_customer(customer).await.unwrap().len(), 3);
    assert_eq!(repo.ratings_for_listing(listing_a).await.unwrap(), vec![5.0]);
}

#[tokio::test]
async fn test_unknown_booking_yields_none() {
    let repo = MockBookingRepository::new();
    let id = Uuid::new_v4();
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(repo
        .transition_status(id, BookingStatus::Pending, BookingStatus::Confirmed)
        .await
        .unwrap()
        .is_none());
}
