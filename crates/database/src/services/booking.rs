use chrono::Utc;
use models::booking_channel::BookingChannel;
use models::booking_status::BookingStatus;
use models::holder::HolderIdentity;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::booking;

/// A booking row fully determined before it reaches the store.
///
/// The store owns the surrogate id, the initial status, and both
/// timestamps; everything else is decided by the caller.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub booking_code: String,
    pub holder: HolderIdentity,
    pub studio_id: u32,
    pub seat_ids: Vec<u32>,
    pub qr_code: String,
    pub channel: BookingChannel,
}

pub struct BookingStore;

impl BookingStore {
    /// Inserts a new active booking inside the caller's transaction
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        new: NewBooking,
    ) -> Result<booking::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let row = booking::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_code: Set(new.booking_code),
            user_id: Set(new.holder.user_id),
            user_name: Set(new.holder.name),
            user_email: Set(new.holder.email),
            studio_id: Set(i64::from(new.studio_id)),
            seat_ids: Set(new.seat_ids.iter().map(|id| i64::from(*id)).collect()),
            qr_code: Set(new.qr_code),
            booking_type: Set(new.channel),
            status: Set(BookingStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        row.insert(conn).await
    }

    /// Looks up a booking by code, restricted to rows still active.
    ///
    /// An unknown code and an already-used code both come back as `None`;
    /// callers cannot tell the two apart.
    pub async fn find_active_by_code<C: ConnectionTrait>(
        conn: &C,
        booking_code: &str,
    ) -> Result<Option<booking::Model>, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::BookingCode.eq(booking_code))
            .filter(booking::Column::Status.eq(BookingStatus::Active))
            .one(conn)
            .await
    }

    /// Flips a booking to used, conditioned on it still being active.
    ///
    /// Returns the number of rows touched; zero means a concurrent
    /// redemption got there first. This conditional update is the only
    /// concurrency guard redemption has.
    pub async fn mark_used<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = booking::Entity::update_many()
            .set(booking::ActiveModel {
                status: Set(BookingStatus::Used),
                updated_at: Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(booking::Column::Id.eq(id))
            .filter(booking::Column::Status.eq(BookingStatus::Active))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// All bookings owned by a user, newest first
    pub async fn list_for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: i64,
    ) -> Result<Vec<booking::Model>, DbErr> {
        booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::CreatedAt)
            .all(conn)
            .await
    }
}
