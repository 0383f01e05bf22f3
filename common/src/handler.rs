//! [`Handler`] abstractions.

/// Executable handler.
///
/// Every [`Handler`] in this workspace operates over in-memory values only,
/// so execution is synchronous.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the execution fails, as defined by the [`Handler`].
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
