use std::any::Any as AnyValue;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A typed handle into the [`Environment`].
///
/// Two keys address the same slot exactly when their identifiers are equal;
/// the value type is enforced at the access sites.
pub struct EnvironmentKey<T> {
    identifier: Arc<str>,
    marker: PhantomData<fn() -> T>,
}

impl<T> EnvironmentKey<T> {
    pub fn new(identifier: impl Into<Arc<str>>) -> Self {
        Self {
            identifier: identifier.into(),
            marker: PhantomData,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl<T> Clone for EnvironmentKey<T> {
    fn clone(&self) -> Self {
        Self {
            identifier: Arc::clone(&self.identifier),
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for EnvironmentKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnvironmentKey")
            .field(&self.identifier)
            .finish()
    }
}

/// Scoped key/value configuration propagated top-down through the tree.
///
/// Every component expansion works on its own copy, so an override applied to
/// one subtree is visible to all of its descendants and to none of its
/// siblings. Entries keep their declaration order.
#[derive(Clone, Default)]
pub struct Environment {
    values: Vec<(Arc<str>, Arc<dyn AnyValue + Send + Sync>)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value for `key` set by the nearest enclosing override, if any.
    pub fn get<T: Clone + 'static>(&self, key: &EnvironmentKey<T>) -> Option<T> {
        self.values
            .iter()
            .find(|(identifier, _)| **identifier == *key.identifier)
            .and_then(|(_, value)| value.downcast_ref::<T>())
            .cloned()
    }

    /// Set or replace the value for `key`.
    pub fn set<T: Send + Sync + 'static>(&mut self, key: &EnvironmentKey<T>, value: T) {
        self.set_erased(Arc::clone(&key.identifier), Arc::new(value));
    }

    fn set_erased(&mut self, identifier: Arc<str>, value: Arc<dyn AnyValue + Send + Sync>) {
        match self
            .values
            .iter_mut()
            .find(|(existing, _)| *existing == identifier)
        {
            Some((_, slot)) => *slot = value,
            None => self.values.push((identifier, value)),
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.values.iter().map(|(identifier, _)| identifier))
            .finish()
    }
}

/// A single `(key, value)` override, applied to a copy of the current
/// environment before a component expands.
#[derive(Clone)]
pub struct EnvironmentOverride {
    identifier: Arc<str>,
    value: Arc<dyn AnyValue + Send + Sync>,
}

impl EnvironmentOverride {
    pub fn new<T: Send + Sync + 'static>(key: &EnvironmentKey<T>, value: T) -> Self {
        Self {
            identifier: Arc::clone(&key.identifier),
            value: Arc::new(value),
        }
    }

    pub fn apply(&self, env: &mut Environment) {
        env.set_erased(Arc::clone(&self.identifier), Arc::clone(&self.value));
    }
}

impl fmt::Debug for EnvironmentOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnvironmentOverride")
            .field(&self.identifier)
            .finish()
    }
}
