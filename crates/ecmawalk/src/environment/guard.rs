//! RAII guard for automatic nesting-depth cleanup

use super::Environment;
use crate::error::EnvironmentError;

/// RAII guard that leaves the current node when dropped.
///
/// # Example
///
/// ```
/// use ecmawalk::Environment;
///
/// let mut env = Environment::new();
///
/// {
///     let guard = env.nesting_guard(10).unwrap();
///     assert_eq!(guard.depth(), 1);
/// }
/// // guard dropped, depth restored
/// assert_eq!(env.depth(), 0);
/// ```
pub struct NestingGuard<'a> {
    env: &'a mut Environment,
}

impl Environment {
    /// Enter a node now and leave it when the guard drops.
    ///
    /// # Errors
    ///
    /// - `NestingTooDeep` if entering would exceed `max`
    pub fn nesting_guard(&mut self, max: usize) -> Result<NestingGuard<'_>, EnvironmentError> {
        self.enter_node(max)?;
        Ok(NestingGuard { env: self })
    }
}

impl<'a> Drop for NestingGuard<'a> {
    fn drop(&mut self) {
        self.env.exit_node();
    }
}

impl<'a> std::ops::Deref for NestingGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for NestingGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}
