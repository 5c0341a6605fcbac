pub mod aggregate;

pub use aggregate::{Voucher, VoucherKind, VoucherStatus};
