pub mod aggregate;

pub use aggregate::{Broker, BrokerKind, LedgerEntry};
