//! Keyed method dispatch with an explicit lookup-failure result.
//!
//! The dynamic "context object" of untyped languages (an arbitrary mapping
//! from key to callable) is rendered here as an explicit registry type,
//! [`MethodTable`], with a `Result`-typed lookup. [`call`] stores a key and
//! arguments up front and dispatches when later handed a table.

use std::collections::HashMap;
use std::hash::Hash;

use crate::adapt::AdaptError;

/// A registry mapping keys to callables sharing one argument and return type.
///
/// Methods are stored as boxed closures, so entries may be free functions,
/// closures, or captured state, as long as they agree on the `Arguments`
/// and `R` types. Lookup failures surface as
/// [`AdaptError::MissingMethod`] rather than panicking.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::MethodTable;
///
/// let table: MethodTable<&str, String, String> = MethodTable::new()
///     .register("greet", |name: String| format!("hi {name}"))
///     .register("shout", |name: String| name.to_uppercase());
///
/// assert_eq!(
///     table.invoke(&"greet", "sam".to_string()).unwrap(),
///     "hi sam"
/// );
/// assert!(table.invoke(&"missing", "sam".to_string()).is_err());
/// ```
pub struct MethodTable<K, Arguments, R> {
    methods: HashMap<K, Box<dyn Fn(Arguments) -> R>>,
}

impl<K: Eq + Hash, Arguments, R> MethodTable<K, Arguments, R> {
    /// Creates an empty method table.
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Registers a method under the given key, replacing any existing entry.
    ///
    /// Builder-style: consumes and returns the table so registrations can
    /// be chained.
    pub fn register<F>(mut self, key: K, method: F) -> Self
    where
        F: Fn(Arguments) -> R + 'static,
    {
        self.methods.insert(key, Box::new(method));
        self
    }

    /// Returns the number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if no methods are registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Invokes the method registered under `key` with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns [`AdaptError::MissingMethod`] if no method is registered
    /// under the key.
    pub fn invoke(&self, key: &K, arguments: Arguments) -> Result<R, AdaptError>
    where
        K: std::fmt::Display,
    {
        self.methods.get(key).map_or_else(
            || {
                Err(AdaptError::MissingMethod {
                    key: key.to_string(),
                })
            },
            |method| Ok(method(arguments)),
        )
    }
}

impl<K: Eq + Hash, Arguments, R> Default for MethodTable<K, Arguments, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stores a key and arguments, producing a dispatcher over a method table.
///
/// The returned closure, when given a [`MethodTable`], invokes the method
/// registered under the stored key with a clone of the stored arguments.
/// The same dispatcher can therefore be applied to several tables.
///
/// # Errors
///
/// The returned closure yields [`AdaptError::MissingMethod`] when the
/// table lacks an entry for the stored key.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::{call, MethodTable};
///
/// let table: MethodTable<&str, String, String> = MethodTable::new()
///     .register("greet", |name: String| format!("hi {name}"));
///
/// let greet_sam = call("greet", "sam".to_string());
/// assert_eq!(greet_sam(&table).unwrap(), "hi sam");
///
/// let missing = call("farewell", "sam".to_string());
/// assert!(missing(&table).is_err());
/// ```
pub fn call<K, Arguments, R>(
    key: K,
    arguments: Arguments,
) -> impl Fn(&MethodTable<K, Arguments, R>) -> Result<R, AdaptError>
where
    K: Eq + Hash + std::fmt::Display,
    Arguments: Clone,
{
    move |table| table.invoke(&key, arguments.clone())
}
