pub mod aggregate;

pub use aggregate::{StockStatus, VehicleStock};
