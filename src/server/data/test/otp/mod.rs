use crate::server::{data::otp::OtpRepository, model::otp::StoreOtpParam};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod increment_attempts;
mod store_unless_pending;
