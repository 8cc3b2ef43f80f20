//! Key components.
//!
//! A [`Component`] is one element of a key sequence. Primitive components
//! (`Absent`, `Null`, `Bool`, `Number`, `Text`) compare by value. [`Symbol`]
//! and [`Object`] components compare by identity: two components match only
//! when they are handles to the same allocation.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Shared referent behind an [`Object`] or [`Symbol`].
pub(crate) type Referent = Arc<dyn Any + Send + Sync>;

/// A single typed element of a key sequence.
///
/// # Equality
///
/// ```
/// use multikey::{Component, Object};
///
/// // Primitives compare by value, NaN included.
/// assert_eq!(Component::from(f64::NAN), Component::from(f64::NAN));
/// assert_eq!(Component::from("a"), Component::from("a".to_string()));
///
/// // Different kinds never compare equal.
/// assert_ne!(Component::from(1), Component::from("1"));
/// assert_ne!(Component::from(1), Component::from(true));
///
/// // Objects compare by identity.
/// let a = Object::new(vec![1, 2]);
/// let b = Object::new(vec![1, 2]);
/// assert_eq!(Component::from(a.clone()), Component::from(a.clone()));
/// assert_ne!(Component::from(a), Component::from(b));
/// ```
#[derive(Debug, Clone)]
pub enum Component {
    // Primitives
    /// Undefined-like value; also produced by an elided position in `key!`
    Absent,
    /// Null literal
    Null,
    /// Boolean value
    Bool(bool),
    /// Double-precision number
    Number(f64),
    /// UTF-8 text
    Text(String),

    // References
    /// Unique token, equal only to itself
    Symbol(Symbol),
    /// Any other value, compared by identity
    Object(Object),
}

impl Component {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Component::Absent => "absent",
            Component::Null => "null",
            Component::Bool(_) => "bool",
            Component::Number(_) => "number",
            Component::Text(_) => "text",
            Component::Symbol(_) => "symbol",
            Component::Object(_) => "object",
        }
    }

    /// Returns true if this component compares by value
    pub fn is_primitive(&self) -> bool {
        !self.is_reference()
    }

    /// Returns true if this component compares by identity
    pub fn is_reference(&self) -> bool {
        matches!(self, Component::Symbol(_) | Component::Object(_))
    }

    /// Returns true if this is the absent value
    pub fn is_absent(&self) -> bool {
        matches!(self, Component::Absent)
    }

    /// Returns true if this is the null literal
    pub fn is_null(&self) -> bool {
        matches!(self, Component::Null)
    }

    /// Borrow the identity-compared part of this component, if any
    pub fn as_reference(&self) -> Option<Reference<'_>> {
        match self {
            Component::Symbol(symbol) => Some(Reference::Symbol(symbol)),
            Component::Object(object) => Some(Reference::Object(object)),
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Component::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Component::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Component::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a symbol
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Component::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to an object
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Component::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// Collapse every NaN to one bit pattern and negative zero to positive zero.
pub(crate) fn canonical_number(n: f64) -> f64 {
    if n.is_nan() {
        f64::NAN
    } else if n == 0.0 {
        0.0
    } else {
        n
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Component::Absent, Component::Absent) | (Component::Null, Component::Null) => true,
            (Component::Bool(a), Component::Bool(b)) => a == b,
            (Component::Number(a), Component::Number(b)) => {
                canonical_number(*a).to_bits() == canonical_number(*b).to_bits()
            }
            (Component::Text(a), Component::Text(b)) => a == b,
            (Component::Symbol(a), Component::Symbol(b)) => a.ptr_eq(b),
            (Component::Object(a), Component::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// Reflexive: canonical_number makes NaN equal to itself.
impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Component::Absent | Component::Null => {}
            Component::Bool(b) => b.hash(state),
            Component::Number(n) => canonical_number(*n).to_bits().hash(state),
            Component::Text(s) => s.hash(state),
            Component::Symbol(s) => s.address().hash(state),
            Component::Object(o) => o.address().hash(state),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Absent => write!(f, "absent"),
            Component::Null => write!(f, "null"),
            Component::Bool(b) => write!(f, "{b}"),
            Component::Number(n) => write!(f, "{n}"),
            Component::Text(s) => write!(f, "{s:?}"),
            Component::Symbol(s) => write!(f, "{s}"),
            Component::Object(o) => write!(f, "{o:?}"),
        }
    }
}

// ===== Identity-compared kinds =====

/// An identity-compared key component wrapping an arbitrary shared value.
///
/// Cloning an `Object` produces another handle to the same identity;
/// [`Object::new`] always produces a fresh one, even for equal contents.
#[derive(Clone)]
pub struct Object {
    inner: Referent,
}

impl Object {
    /// Wrap a value in a new identity.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Use an existing shared allocation as the identity.
    ///
    /// Two objects built from clones of the same `Arc` are the same identity.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self { inner: value }
    }

    /// Borrow the wrapped value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Check whether two handles refer to the same identity.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        self.address() == other.address()
    }

    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    pub(crate) fn referent(&self) -> Referent {
        Arc::clone(&self.inner)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({:#x})", self.address())
    }
}

struct SymbolData {
    description: Option<String>,
}

/// A unique token. Every call to [`Symbol::new`] or [`Symbol::anonymous`]
/// yields a value equal only to itself and its clones.
///
/// ```
/// use multikey::Symbol;
///
/// let a = Symbol::new("id");
/// let b = Symbol::new("id");
/// assert!(a.ptr_eq(&a.clone()));
/// assert!(!a.ptr_eq(&b));
/// assert_eq!(a.description(), Some("id"));
/// ```
#[derive(Clone)]
pub struct Symbol {
    inner: Arc<SymbolData>,
}

impl Symbol {
    /// Create a new symbol with a description used for display only.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SymbolData {
                description: Some(description.into()),
            }),
        }
    }

    /// Create a new symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            inner: Arc::new(SymbolData { description: None }),
        }
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Check whether two handles refer to the same symbol.
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    pub(crate) fn referent(&self) -> Referent {
        self.inner.clone()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// A borrowed identity-compared component.
#[derive(Debug, Clone, Copy)]
pub enum Reference<'a> {
    Symbol(&'a Symbol),
    Object(&'a Object),
}

impl Reference<'_> {
    /// Allocation address identifying the referent.
    pub(crate) fn address(&self) -> usize {
        match self {
            Reference::Symbol(s) => s.address(),
            Reference::Object(o) => o.address(),
        }
    }

    /// A strong handle to the referent.
    pub(crate) fn referent(&self) -> Referent {
        match self {
            Reference::Symbol(s) => s.referent(),
            Reference::Object(o) => o.referent(),
        }
    }

    /// Returns the kind name, matching [`Component::type_name`]
    pub fn kind(&self) -> &'static str {
        match self {
            Reference::Symbol(_) => "symbol",
            Reference::Object(_) => "object",
        }
    }
}

// ===== Conversions =====

impl From<bool> for Component {
    fn from(b: bool) -> Self {
        Component::Bool(b)
    }
}

impl From<f64> for Component {
    fn from(n: f64) -> Self {
        Component::Number(n)
    }
}

// Widths that convert to f64 without loss.
macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Component {
                fn from(n: $t) -> Self {
                    Component::Number(f64::from(n))
                }
            }
        )*
    };
}

impl_from_number!(f32, i8, i16, i32, u8, u16, u32);

impl From<&str> for Component {
    fn from(s: &str) -> Self {
        Component::Text(s.to_string())
    }
}

impl From<String> for Component {
    fn from(s: String) -> Self {
        Component::Text(s)
    }
}

impl From<&String> for Component {
    fn from(s: &String) -> Self {
        Component::Text(s.clone())
    }
}

impl From<()> for Component {
    fn from(_: ()) -> Self {
        Component::Null
    }
}

impl<T: Into<Component>> From<Option<T>> for Component {
    fn from(value: Option<T>) -> Self {
        value.map_or(Component::Absent, Into::into)
    }
}

impl From<Symbol> for Component {
    fn from(s: Symbol) -> Self {
        Component::Symbol(s)
    }
}

impl From<&Symbol> for Component {
    fn from(s: &Symbol) -> Self {
        Component::Symbol(s.clone())
    }
}

impl From<Object> for Component {
    fn from(o: Object) -> Self {
        Component::Object(o)
    }
}

impl From<&Object> for Component {
    fn from(o: &Object) -> Self {
        Component::Object(o.clone())
    }
}

// Direct comparisons with primitives

impl PartialEq<str> for Component {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Component {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<bool> for Component {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<f64> for Component {
    fn eq(&self, other: &f64) -> bool {
        *self == Component::Number(*other)
    }
}
