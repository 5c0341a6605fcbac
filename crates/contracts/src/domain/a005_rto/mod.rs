pub mod aggregate;

pub use aggregate::{RtoApplication, RtoStatus};
