pub mod common;

pub mod a001_branch;
pub mod a002_broker;
pub mod a003_vehicle_stock;
pub mod a004_booking;
pub mod a005_rto;
pub mod a006_voucher;
