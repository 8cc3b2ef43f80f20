//! Key sequences.

use std::fmt;
use std::ops::Index;

use serde_json::Value as JsonValue;

use super::component::{Component, Object};
use crate::errors::KeyError;

/// An ordered sequence of [`Component`]s forming one lookup key.
///
/// Keys are compared component-wise with the mixed equality rule of
/// [`Component`]; the empty key is a valid, distinct key.
///
/// # Examples
///
/// ```
/// use multikey::{Component, Key, key};
///
/// let a = key![1, "one", true];
/// let b = Key::from(vec![Component::from(1), "one".into(), true.into()]);
/// assert_eq!(a, b);
///
/// // `_` marks an elided position, equal to an explicit absent component.
/// assert_eq!(key![_, 2], key![Component::Absent, 2]);
/// assert!(key![].is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Key {
    components: Vec<Component>,
}

impl Key {
    /// Create a key from its components.
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// The empty key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a key from a JSON array document.
    ///
    /// Nested arrays and objects become [`Object`] components and therefore
    /// compare by identity, so they never match a later lookup.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(Key::try_from(value)?)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if this is the empty key.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the component at `index`.
    pub fn get(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    /// Iterate over the components in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Borrow the components as a slice.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Take ownership of the components.
    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// Append a component, returning the extended key.
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Check if any component compares by identity.
    pub fn has_references(&self) -> bool {
        self.components.iter().any(Component::is_reference)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.components).finish()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, "]")
    }
}

impl AsRef<[Component]> for Key {
    fn as_ref(&self) -> &[Component] {
        &self.components
    }
}

impl Index<usize> for Key {
    type Output = Component;

    fn index(&self, index: usize) -> &Component {
        &self.components[index]
    }
}

impl<T: Into<Component>> From<Vec<T>> for Key {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Component>, const N: usize> From<[T; N]> for Key {
    fn from(items: [T; N]) -> Self {
        items.into_iter().map(Into::into).collect()
    }
}

impl From<&[Component]> for Key {
    fn from(components: &[Component]) -> Self {
        Self::new(components.to_vec())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl FromIterator<Component> for Key {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Key {
    type Item = Component;
    type IntoIter = std::vec::IntoIter<Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Key {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// A component is only a key when it is an [`Object`] wrapping a `Key` or a
/// `Vec<Component>`; any scalar is rejected.
impl TryFrom<Component> for Key {
    type Error = KeyError;

    fn try_from(component: Component) -> Result<Self, Self::Error> {
        if let Component::Object(object) = &component {
            if let Some(key) = object.downcast_ref::<Key>() {
                return Ok(key.clone());
            }
            if let Some(components) = object.downcast_ref::<Vec<Component>>() {
                return Ok(Key::from(components.as_slice()));
            }
        }
        tracing::warn!(kind = component.type_name(), "rejected non-sequence key");
        Err(KeyError::InvalidArgument {
            reason: format!("expected a key sequence, found {}", component.type_name()),
        })
    }
}

impl TryFrom<JsonValue> for Key {
    type Error = KeyError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| component_from_json(index, item))
                .collect(),
            other => {
                let kind = json_kind(&other);
                tracing::warn!(kind, "rejected non-array JSON key");
                Err(KeyError::InvalidArgument {
                    reason: format!("expected a JSON array, found {kind}"),
                })
            }
        }
    }
}

fn component_from_json(index: usize, value: JsonValue) -> Result<Component, KeyError> {
    Ok(match value {
        JsonValue::Null => Component::Null,
        JsonValue::Bool(b) => Component::Bool(b),
        JsonValue::Number(n) => Component::Number(json_number(index, &n)?),
        JsonValue::String(s) => Component::Text(s),
        // Containers are identity-compared, like any other non-primitive.
        nested @ (JsonValue::Array(_) | JsonValue::Object(_)) => {
            Component::Object(Object::new(nested))
        }
    })
}

// Integers must convert to f64 exactly; rounding would merge distinct keys.
fn json_number(index: usize, n: &serde_json::Number) -> Result<f64, KeyError> {
    let unsupported = || KeyError::UnsupportedJson {
        index,
        reason: format!("number {n} is not exactly representable as f64"),
    };
    if let Some(u) = n.as_u64() {
        let f = u as f64;
        return if f as u128 == u128::from(u) {
            Ok(f)
        } else {
            Err(unsupported())
        };
    }
    if let Some(i) = n.as_i64() {
        let f = i as f64;
        return if f as i128 == i128::from(i) {
            Ok(f)
        } else {
            Err(unsupported())
        };
    }
    n.as_f64().ok_or_else(unsupported)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Build a [`Key`] from a list of component expressions.
///
/// Each item is converted with `Component::from`; a bare `_` stands for an
/// elided position and produces [`Component::Absent`].
///
/// ```
/// use multikey::{Component, Symbol, key};
///
/// let tag = Symbol::new("tag");
/// let k = key!["a", 1, _, tag.clone()];
/// assert_eq!(k.len(), 4);
/// assert_eq!(k[2], Component::Absent);
/// ```
#[macro_export]
macro_rules! key {
    () => {
        $crate::Key::empty()
    };
    ($($items:tt)+) => {
        $crate::Key::new($crate::__key_components!([] $($items)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __key_components {
    ([$($out:expr),*]) => {
        ::std::vec![$($out),*]
    };
    ([$($out:expr),*] _) => {
        $crate::__key_components!([$($out,)* $crate::Component::Absent])
    };
    ([$($out:expr),*] _, $($rest:tt)*) => {
        $crate::__key_components!([$($out,)* $crate::Component::Absent] $($rest)*)
    };
    ([$($out:expr),*] $head:expr) => {
        $crate::__key_components!([$($out,)* $crate::Component::from($head)])
    };
    ([$($out:expr),*] $head:expr, $($rest:tt)*) => {
        $crate::__key_components!([$($out,)* $crate::Component::from($head)] $($rest)*)
    };
}
