use cinema_client::api::{SeatInventory, StudioDirectory};
use database::entities::booking;
use database::services::booking::{BookingStore, NewBooking};
use log::{error, info, warn};
use models::booking_channel::BookingChannel;
use models::booking_status::BookingStatus;
use models::details::BookingWithDetails;
use models::holder::HolderIdentity;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::error::BookingError;
use crate::token::{self, TokenPayload};

/// Orchestrates booking creation, redemption, and the enriched read side
/// on top of the store and the remote cinema service.
///
/// Creation is a saga: reserve seats remotely, mint the code and QR
/// payload, persist locally, and commit — compensating with a seat
/// release if anything after the reservation fails. The local
/// transaction protects only the local write; the remote hold is undone
/// by compensation, never by rollback.
#[derive(Debug, Clone)]
pub struct BookingService<C> {
    cinema: C,
}

impl<C> BookingService<C> {
    pub const fn new(cinema: C) -> Self {
        Self { cinema }
    }
}

/// Rollback failures cannot change the outcome the caller already has,
/// and a dropped transaction rolls back regardless.
async fn rollback(txn: DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        warn!("transaction rollback failed: {e}");
    }
}

impl<C: SeatInventory> BookingService<C> {
    /// Books seats for a registered user
    pub async fn create_online_booking(
        &self,
        db: &DatabaseConnection,
        studio_id: u32,
        seat_ids: Vec<u32>,
        user_id: i64,
        user_name: String,
        user_email: String,
    ) -> Result<booking::Model, BookingError> {
        let holder = HolderIdentity::online(user_id, user_name, user_email);
        self.create_booking(db, studio_id, seat_ids, holder, BookingChannel::Online)
            .await
    }

    /// Books seats for a walk-in customer with no account
    pub async fn create_offline_booking(
        &self,
        db: &DatabaseConnection,
        studio_id: u32,
        seat_ids: Vec<u32>,
        customer_name: String,
        customer_email: String,
    ) -> Result<booking::Model, BookingError> {
        let holder = HolderIdentity::offline(customer_name, customer_email);
        self.create_booking(db, studio_id, seat_ids, holder, BookingChannel::Offline)
            .await
    }

    async fn create_booking(
        &self,
        db: &DatabaseConnection,
        studio_id: u32,
        seat_ids: Vec<u32>,
        holder: HolderIdentity,
        channel: BookingChannel,
    ) -> Result<booking::Model, BookingError> {
        if seat_ids.is_empty() {
            return Err(BookingError::EmptySeatSelection);
        }

        let txn = db
            .begin()
            .await
            .map_err(|_| BookingError::PersistenceFailed)?;

        // No compensation for a failed reservation: nothing was held.
        if let Err(e) = self.cinema.reserve_seats(&seat_ids).await {
            warn!("seat reservation failed for studio {studio_id}: {e}");
            rollback(txn).await;
            return Err(BookingError::ReservationFailed);
        }

        let booking_code = Uuid::new_v4().to_string();
        let payload = TokenPayload {
            booking_code: booking_code.clone(),
            studio_id,
            seat_ids: seat_ids.clone(),
            user_id: holder.user_id,
            user_name: holder.name.clone(),
        };
        let qr_code = match token::generate(&payload) {
            Ok(qr_code) => qr_code,
            Err(e) => {
                error!("QR generation failed for booking {booking_code}: {e}");
                rollback(txn).await;
                self.cinema.release_seats(&seat_ids).await;
                return Err(BookingError::TokenGenerationFailed);
            }
        };

        let new = NewBooking {
            booking_code,
            holder,
            studio_id,
            seat_ids: seat_ids.clone(),
            qr_code,
            channel,
        };
        let model = match BookingStore::insert(&txn, new).await {
            Ok(model) => model,
            Err(e) => {
                error!("booking insert failed: {e}");
                rollback(txn).await;
                self.cinema.release_seats(&seat_ids).await;
                return Err(BookingError::PersistenceFailed);
            }
        };

        if let Err(e) = txn.commit().await {
            error!("booking commit failed: {e}");
            // The write is not durable, so the hold must not outlive it.
            self.cinema.release_seats(&seat_ids).await;
            return Err(BookingError::CommitFailed);
        }

        info!(
            "created {} booking {} for studio {studio_id}",
            model.booking_type, model.booking_code
        );
        Ok(model)
    }
}

impl<C> BookingService<C> {
    /// Redeems a QR code exactly once: active -> used, replay rejected.
    ///
    /// An unknown code and an already-used code produce the same error.
    /// The conditional update in the store is the only guard against two
    /// concurrent redemptions of the same code.
    pub async fn redeem(
        &self,
        db: &DatabaseConnection,
        booking_code: &str,
    ) -> Result<booking::Model, BookingError> {
        let txn = db
            .begin()
            .await
            .map_err(|_| BookingError::StoreQueryFailed)?;

        let found = match BookingStore::find_active_by_code(&txn, booking_code).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                rollback(txn).await;
                return Err(BookingError::InvalidOrRedeemedToken);
            }
            Err(e) => {
                error!("redemption lookup failed: {e}");
                rollback(txn).await;
                return Err(BookingError::InvalidOrRedeemedToken);
            }
        };

        let affected = match BookingStore::mark_used(&txn, found.id).await {
            Ok(affected) => affected,
            Err(e) => {
                error!("redemption update failed: {e}");
                rollback(txn).await;
                return Err(BookingError::PersistenceFailed);
            }
        };
        if affected == 0 {
            rollback(txn).await;
            return Err(BookingError::ConcurrentRedemption);
        }

        txn.commit().await.map_err(|_| BookingError::CommitFailed)?;

        info!("booking {booking_code} redeemed");
        // The refreshed updated_at is visible on the next read.
        Ok(booking::Model {
            status: BookingStatus::Used,
            ..found
        })
    }
}

impl<C: StudioDirectory> BookingService<C> {
    /// Lists a user's bookings newest-first, enriched with studio and
    /// seat metadata where the cinema service can provide it.
    ///
    /// Only the store query itself can fail the call; a metadata lookup
    /// failure degrades that one booking and is logged, nothing more.
    pub async fn list_bookings_for_user(
        &self,
        db: &DatabaseConnection,
        user_id: i64,
    ) -> Result<Vec<BookingWithDetails>, BookingError> {
        let rows = BookingStore::list_for_user(db, user_id).await.map_err(|e| {
            error!("booking query failed for user {user_id}: {e}");
            BookingError::StoreQueryFailed
        })?;

        let mut detailed = Vec::with_capacity(rows.len());
        for row in rows {
            detailed.push(self.enrich(row).await);
        }

        Ok(detailed)
    }

    async fn enrich(&self, row: booking::Model) -> BookingWithDetails {
        let studio = match self.cinema.studio_details(row.studio_id as u32).await {
            Ok(studio) => Some(studio),
            Err(e) => {
                warn!(
                    "failed to get studio details for booking {}: {e}",
                    row.booking_code
                );
                None
            }
        };

        let seat_ids: Vec<u32> = row.seat_ids.iter().map(|id| *id as u32).collect();
        let seats = if seat_ids.is_empty() {
            Vec::new()
        } else {
            match self.cinema.seat_details(&seat_ids).await {
                Ok(seats) => seats,
                Err(e) => {
                    warn!(
                        "failed to get seat details for booking {}: {e}",
                        row.booking_code
                    );
                    Vec::new()
                }
            }
        };

        BookingWithDetails {
            id: row.id,
            booking_code: row.booking_code,
            user_id: row.user_id,
            user_name: row.user_name,
            user_email: row.user_email,
            qr_code: row.qr_code,
            booking_type: row.booking_type,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            studio,
            seats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use cinema_client::error::{MetadataError, ReservationError};
    use models::details::{SeatDetails, StudioDetails};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
    use std::sync::{Arc, Mutex};

    /// Records every call so tests can assert exactly what went over the
    /// wire; clones share state.
    #[derive(Debug, Default, Clone)]
    struct FakeCinema {
        fail_reserve: bool,
        fail_studio_for: Option<u32>,
        reserve_calls: Arc<Mutex<Vec<Vec<u32>>>>,
        release_calls: Arc<Mutex<Vec<Vec<u32>>>>,
        seat_detail_calls: Arc<Mutex<Vec<Vec<u32>>>>,
    }

    #[async_trait]
    impl SeatInventory for FakeCinema {
        async fn reserve_seats(&self, seat_ids: &[u32]) -> Result<(), ReservationError> {
            self.reserve_calls.lock().unwrap().push(seat_ids.to_vec());
            if self.fail_reserve {
                Err(ReservationError::Rejected(409))
            } else {
                Ok(())
            }
        }

        async fn release_seats(&self, seat_ids: &[u32]) {
            self.release_calls.lock().unwrap().push(seat_ids.to_vec());
        }
    }

    #[async_trait]
    impl StudioDirectory for FakeCinema {
        async fn studio_details(&self, studio_id: u32) -> Result<StudioDetails, MetadataError> {
            if self.fail_studio_for == Some(studio_id) {
                return Err(MetadataError::Failed {
                    status: 500,
                    message: None,
                });
            }
            Ok(StudioDetails {
                id: studio_id,
                name: format!("Studio {studio_id}"),
                total_seats: 40,
            })
        }

        async fn seat_details(&self, seat_ids: &[u32]) -> Result<Vec<SeatDetails>, MetadataError> {
            self.seat_detail_calls
                .lock()
                .unwrap()
                .push(seat_ids.to_vec());
            Ok(seat_ids
                .iter()
                .map(|id| SeatDetails {
                    id: *id,
                    seat_number: format!("A{id}"),
                })
                .collect())
        }
    }

    fn sample_model(channel: BookingChannel, status: BookingStatus) -> booking::Model {
        let now = Utc::now().naive_utc();
        booking::Model {
            id: Uuid::new_v4(),
            booking_code: Uuid::new_v4().to_string(),
            user_id: None,
            user_name: "A. Lee".to_string(),
            user_email: "alee@example.com".to_string(),
            studio_id: 7,
            seat_ids: vec![101, 102],
            qr_code: "qr".to_string(),
            booking_type: channel,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_offline_booking_reserves_and_persists() {
        let persisted = sample_model(BookingChannel::Offline, BookingStatus::Active);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![persisted.clone()]])
            .into_connection();
        let cinema = FakeCinema::default();
        let service = BookingService::new(cinema.clone());

        let created = service
            .create_offline_booking(
                &db,
                7,
                vec![101, 102],
                "A. Lee".to_string(),
                "alee@example.com".to_string(),
            )
            .await
            .expect("booking should succeed");

        assert_eq!(created.booking_type, BookingChannel::Offline);
        assert_eq!(created.status, BookingStatus::Active);
        assert_eq!(created.user_id, None);
        assert!(!created.booking_code.is_empty());
        assert!(!created.qr_code.is_empty());
        assert_eq!(*cinema.reserve_calls.lock().unwrap(), vec![vec![101, 102]]);
        assert!(cinema.release_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_seat_selection_never_reaches_the_inventory() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let cinema = FakeCinema::default();
        let service = BookingService::new(cinema.clone());

        let err = service
            .create_offline_booking(
                &db,
                7,
                vec![],
                "A. Lee".to_string(),
                "alee@example.com".to_string(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, BookingError::EmptySeatSelection);
        assert!(cinema.reserve_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reservation_failure_makes_no_release_call() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let cinema = FakeCinema {
            fail_reserve: true,
            ..FakeCinema::default()
        };
        let service = BookingService::new(cinema.clone());

        let err = service
            .create_offline_booking(
                &db,
                7,
                vec![101, 102],
                "A. Lee".to_string(),
                "alee@example.com".to_string(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, BookingError::ReservationFailed);
        assert_eq!(cinema.reserve_calls.lock().unwrap().len(), 1);
        assert!(cinema.release_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_releases_the_reserved_seats() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "insert failed".to_string(),
            ))])
            .into_connection();
        let cinema = FakeCinema::default();
        let service = BookingService::new(cinema.clone());

        let err = service
            .create_offline_booking(
                &db,
                7,
                vec![101, 102],
                "A. Lee".to_string(),
                "alee@example.com".to_string(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, BookingError::PersistenceFailed);
        assert_eq!(*cinema.reserve_calls.lock().unwrap(), vec![vec![101, 102]]);
        assert_eq!(*cinema.release_calls.lock().unwrap(), vec![vec![101, 102]]);
    }

    #[tokio::test]
    async fn test_redeem_flips_an_active_booking_to_used() {
        let active = sample_model(BookingChannel::Offline, BookingStatus::Active);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![active.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let service = BookingService::new(FakeCinema::default());

        let redeemed = service.redeem(&db, &active.booking_code).await.unwrap();

        assert_eq!(redeemed.status, BookingStatus::Used);
        assert_eq!(redeemed.booking_code, active.booking_code);
        assert_eq!(redeemed.id, active.id);
    }

    #[tokio::test]
    async fn test_redeem_unknown_or_used_code_is_indistinguishable() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<booking::Model>::new()])
            .into_connection();
        let service = BookingService::new(FakeCinema::default());

        let err = service.redeem(&db, "no-such-code").await.unwrap_err();

        assert_eq!(err, BookingError::InvalidOrRedeemedToken);
    }

    #[tokio::test]
    async fn test_redeem_losing_the_race_reports_concurrent_redemption() {
        let active = sample_model(BookingChannel::Online, BookingStatus::Active);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![active.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let service = BookingService::new(FakeCinema::default());

        let err = service.redeem(&db, &active.booking_code).await.unwrap_err();

        assert_eq!(err, BookingError::ConcurrentRedemption);
    }

    #[tokio::test]
    async fn test_listing_degrades_per_booking_when_studio_lookup_fails() {
        let mut with_studio = sample_model(BookingChannel::Online, BookingStatus::Active);
        with_studio.user_id = Some(42);
        let mut without_studio = sample_model(BookingChannel::Online, BookingStatus::Active);
        without_studio.user_id = Some(42);
        without_studio.studio_id = 9;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![with_studio, without_studio]])
            .into_connection();
        let cinema = FakeCinema {
            fail_studio_for: Some(9),
            ..FakeCinema::default()
        };
        let service = BookingService::new(cinema);

        let listed = service.list_bookings_for_user(&db, 42).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert!(listed[0].studio.is_some());
        assert!(listed[1].studio.is_none());
        // Seat enrichment is independent of the failed studio lookup.
        assert_eq!(listed[0].seats.len(), 2);
        assert_eq!(listed[1].seats.len(), 2);
    }

    #[tokio::test]
    async fn test_listing_skips_seat_lookup_for_bookings_without_seats() {
        let mut seatless = sample_model(BookingChannel::Online, BookingStatus::Active);
        seatless.user_id = Some(42);
        seatless.seat_ids = vec![];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![seatless]])
            .into_connection();
        let cinema = FakeCinema::default();
        let service = BookingService::new(cinema.clone());

        let listed = service.list_bookings_for_user(&db, 42).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert!(listed[0].seats.is_empty());
        assert!(cinema.seat_detail_calls.lock().unwrap().is_empty());
    }
}
