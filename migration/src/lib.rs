pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_users;
mod m20250810_000002_create_garages;
mod m20250810_000003_create_catalog;
mod m20250810_000004_create_coupons;
mod m20250810_000005_create_pre_bookings;
mod m20250810_000006_create_bookings;
mod m20250810_000007_create_jobs;
mod m20250810_000008_create_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_users::Migration),
            Box::new(m20250810_000002_create_garages::Migration),
            Box::new(m20250810_000003_create_catalog::Migration),
            Box::new(m20250810_000004_create_coupons::Migration),
            Box::new(m20250810_000005_create_pre_bookings::Migration),
            Box::new(m20250810_000006_create_bookings::Migration),
            Box::new(m20250810_000007_create_jobs::Migration),
            Box::new(m20250810_000008_create_notifications::Migration),
        ]
    }
}
