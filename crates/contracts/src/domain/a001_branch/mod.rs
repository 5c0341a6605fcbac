pub mod aggregate;

pub use aggregate::{Branch, BranchUpsertRequest};
