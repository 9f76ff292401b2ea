use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value the application does not recognise.
    ///
    /// Rows are only written through the repositories, which store known values, so
    /// this indicates manual tampering or a missing migration. Results in a 500
    /// Internal Server Error with a generic message returned to client.
    #[error("Unknown {kind} '{value}' stored in database")]
    UnknownStoredValue {
        /// Which enumeration failed to parse (e.g. "user role")
        kind: &'static str,
        /// The stored string
        value: String,
    },

    /// The sum of recorded funding amounts does not fit in an `i64`.
    #[error("Total funding amount overflows")]
    FundingTotalOverflow,

    /// Logger initialisation failed at startup.
    #[error("Failed to initialise logger: {0}")]
    Logger(String),
}
