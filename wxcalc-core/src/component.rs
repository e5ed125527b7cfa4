mod inspect;

/// The core trait for defining calculators in `wxcalc`.
///
/// A `Component` takes an input and produces either an output or an error.
/// Components hold no state between calls, so calling one twice with the same
/// input always produces the same result.
///
/// ## Implementing `Component`
///
/// Implement the [`call()`] method. Each component chooses its own `Error`
/// type, which describes what counts as invalid input in its domain.
///
/// ## Observing Components
///
/// [`Component::inspect()`] wraps a component with handlers that see every
/// input and every result, which is how callers attach logging without
/// touching the calculation itself.
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// This is the only method required when implementing `Component`.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Inspects inputs and results without modifying behavior.
    ///
    /// # Parameters
    ///
    /// - `input_handler`: Called before execution to inspect the input.
    /// - `result_handler`: Called after execution with the output or error.
    ///
    /// # Returns
    ///
    /// A new component that calls the handlers but otherwise behaves the same.
    ///
    /// # Example
    ///
    /// ```
    /// use std::convert::Infallible;
    /// use wxcalc_core::Component;
    ///
    /// struct Doubler;
    ///
    /// impl Component for Doubler {
    ///     type Input = i32;
    ///     type Output = i32;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
    ///         Ok(input * 2)
    ///     }
    /// }
    ///
    /// let debug_component = Doubler.inspect(
    ///     |input| println!("Received: {input:?}"),
    ///     |result| println!("Produced: {result:?}"),
    /// );
    ///
    /// assert_eq!(debug_component.call(5).unwrap(), 10);
    /// ```
    fn inspect<InputHandler, ResultHandler>(
        self,
        input_handler: InputHandler,
        result_handler: ResultHandler,
    ) -> impl Component<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        InputHandler: Fn(&Self::Input),
        ResultHandler: Fn(&Result<Self::Output, Self::Error>),
    {
        inspect::Inspect {
            component: self,
            input_handler,
            result_handler,
        }
    }
}
