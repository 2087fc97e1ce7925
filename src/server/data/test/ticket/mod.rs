use crate::server::{
    data::ticket::TicketRepository,
    model::ticket::{AddTicketMessageParam, CreateTicketParam, TicketStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_message;
mod create;
mod find_by_id;
mod get_all_paginated;
mod get_by_user_paginated;
mod set_status;
