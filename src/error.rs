use thiserror::Error;

/// Convenience result type for fallible park operations.
pub type ParkResult<T> = Result<T, ParkError>;

/// Error type returned by validation and engine construction.
///
/// Queries themselves are total and never produce this error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParkError {
    /// A trip names a driver that is not registered in the park.
    #[error("trip {trip} references unknown driver '{driver}'")]
    UnknownDriver { trip: usize, driver: String },

    /// A trip carries a passenger that is not registered in the park.
    #[error("trip {trip} references unknown passenger '{passenger}'")]
    UnknownPassenger { trip: usize, passenger: String },

    /// A cost or discount is negative, NaN, or infinite.
    #[error("trip {trip} has invalid {field}: {value}")]
    InvalidAmount {
        trip: usize,
        field: &'static str,
        value: f64,
    },

    /// [`crate::engine::QueryOptions`] are out of range.
    #[error("invalid query options: {message}")]
    InvalidOptions { message: String },
}
