//! Submission backend for the sign-up form
//!
//! There is no server: the only backend simulates the network round trip
//! with a fixed delay.

mod simulated;
mod traits;

pub use simulated::SimulatedBackend;
pub use traits::SubmitBackend;

#[cfg(test)]
pub use traits::MockSubmitBackend;
