//! Environment trait definition

/// Read-only access to named environment variables
///
/// # Examples
///
/// ```
/// use toolbelt::env::EnvSource;
///
/// fn port<E: EnvSource>(env: &E) -> Option<u16> {
///     env.var("PORT")?.parse().ok()
/// }
/// ```
pub trait EnvSource: Send + Sync {
    /// Value of `name`, or `None` when unset or not valid Unicode
    fn var(&self, name: &str) -> Option<String>;

    /// Whether `name` is set at all
    fn contains(&self, name: &str) -> bool {
        self.var(name).is_some()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
