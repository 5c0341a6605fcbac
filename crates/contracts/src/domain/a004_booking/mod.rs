pub mod aggregate;

pub use aggregate::{AllocateRequest, Booking, BookingStatus};
