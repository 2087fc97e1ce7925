use crate::server::{
    data::horse::HorseRepository,
    model::horse::{CreateHorseParam, UpdateHorseParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_url;
mod get_all_paginated;
mod update;
mod url_in_use;
