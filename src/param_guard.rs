/// A set of hyperparameters whose values have not been checked for validity.
/// A reference to the checked set can only be obtained after checking has
/// completed. Estimators implement `Fit` on the unchecked set and call
/// [`check_ref`](ParamGuard::check_ref) first, so validation errors surface
/// at fit time.
///
/// The validation performed by `check_ref()` and `check()` must be identical.
pub trait ParamGuard {
    type Checked;
    type Error: std::error::Error;

    /// Checks the hyperparameters and returns a reference to the checked set
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the hyperparameters and returns the checked set by value
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}
