//! Computer opponent.

pub mod threat;

pub use threat::{ScannerError, ThreatScanner};
