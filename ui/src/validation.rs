/// Core validation trait that all validators must implement.
///
/// Validators check a value without changing it, so they can run before a
/// load commits anything to the active theme.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `Path`)
///
/// # Examples
///
/// ```
/// use tuiskin::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
