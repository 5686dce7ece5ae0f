//! Configuration constants for the simulator.

/// Number of frames used when a request does not name one.
///
/// Three frames is the classic textbook setup: small enough that the
/// well-known reference strings produce plenty of faults.
pub const DEFAULT_FRAMES: usize = 3;

/// Policy selector used when a request does not name one.
pub const DEFAULT_ALGORITHM: &str = "FIFO";

/// Decimal places kept in `hit_ratio` / `fault_ratio`.
pub const RATIO_DECIMALS: usize = 2;
