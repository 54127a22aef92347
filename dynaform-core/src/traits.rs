use crate::FormController;

/// Trait for view layers that present a form controller.
///
/// A surface owns the interaction loop: it draws the controller's state,
/// feeds user input back into controller operations, and drains the
/// notification queue for display. The controller itself never knows which
/// surface is driving it.
pub trait FormSurface {
    /// The error type for this surface.
    type Error: Into<anyhow::Error>;

    /// Drive the interaction loop until the user quits.
    ///
    /// # Returns
    /// * `Ok(())` on a normal exit
    /// * `Err` on a surface failure (terminal I/O, UI framework crash, etc.)
    fn run(&self, controller: &mut FormController) -> Result<(), Self::Error>;
}
