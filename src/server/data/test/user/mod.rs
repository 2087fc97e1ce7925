use crate::server::data::user::UserRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod find_or_create_by_phone_number;
