pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_session_table;
mod m20260301_000003_create_otp_table;
mod m20260302_000004_create_horse_table;
mod m20260303_000005_create_ticket_table;
mod m20260303_000006_create_ticket_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_session_table::Migration),
            Box::new(m20260301_000003_create_otp_table::Migration),
            Box::new(m20260302_000004_create_horse_table::Migration),
            Box::new(m20260303_000005_create_ticket_table::Migration),
            Box::new(m20260303_000006_create_ticket_message_table::Migration),
        ]
    }
}
