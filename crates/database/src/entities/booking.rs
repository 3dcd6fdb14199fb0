use models::booking_channel::BookingChannel;
use models::booking_status::BookingStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    /// External redemption key; unique for the lifetime of the system
    #[sea_orm(unique)]
    pub booking_code: String,
    pub user_id: Option<i64>,
    pub user_name: String,
    pub user_email: String,
    pub studio_id: i64,
    /// Seats held as one atomic group; immutable after creation
    pub seat_ids: Vec<i64>,
    pub qr_code: String,
    pub booking_type: BookingChannel,
    pub status: BookingStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
