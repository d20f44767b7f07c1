use crate::{
    Backend, BackendOracle, CompiledBackends, MissingBackendError, RegistryEntry,
    requires_backends_with,
};

/// Proof that the backend check of a [`DummyObject`] passed.
///
/// Only [`DummyObject::new_with`] can create one, so a placeholder cannot be built without
/// going through the check.
///
/// ```compile_fail
/// use modelhub_backends::{Backend, Checked, DummyObject};
///
/// struct WidgetModel;
///
/// impl DummyObject for WidgetModel {
///     const NAME: &'static str = "WidgetModel";
///     const BACKENDS: &'static [Backend] = &[Backend::Timm];
///
///     fn placeholder(_: Checked) -> Self {
///         WidgetModel
///     }
/// }
///
/// let widget = WidgetModel::placeholder(Checked(()));
/// ```
#[derive(Debug)]
pub struct Checked(());

/// A placeholder exported in place of an object whose backends are not enabled.
///
/// Placeholders carry no state. Building one goes through the backend check and fails with a
/// [`MissingBackendError`] unless every required backend is available, in which case an empty
/// instance is returned. Implement it with `#[derive(DummyObject)]` from `modelhub-macros`.
pub trait DummyObject: Sized {
    /// Name of the object this placeholder stands for.
    const NAME: &'static str;
    /// Backends required by the real object, in declaration order.
    const BACKENDS: &'static [Backend];

    /// Builds the empty instance once the backend check passed.
    #[doc(hidden)]
    fn placeholder(checked: Checked) -> Self;

    /// Builds the object, ignoring `args`.
    ///
    /// Any argument shape is accepted so that call sites written against the real constructor
    /// reach the backend check instead of failing on a signature mismatch.
    fn new<A>(args: A) -> Result<Self, MissingBackendError> {
        Self::new_with(&CompiledBackends, args)
    }

    /// Builds the object, asking `oracle` which backends are available.
    fn new_with<O, A>(oracle: &O, _args: A) -> Result<Self, MissingBackendError>
    where
        O: BackendOracle + ?Sized,
    {
        requires_backends_with(oracle, Self::NAME, Self::BACKENDS)?;
        Ok(Self::placeholder(Checked(())))
    }

    /// The registry entry describing this placeholder.
    fn entry() -> RegistryEntry {
        RegistryEntry::new(Self::NAME, Self::BACKENDS)
    }
}
