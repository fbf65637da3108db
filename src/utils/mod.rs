pub mod garage;
pub mod jwt;
pub mod notify;
pub mod pricing;
pub mod slots;
