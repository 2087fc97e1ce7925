use crate::server::{data::session::SessionRepository, model::session::CreateSessionParam};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_token;
mod delete_expired;
mod find_by_token;
