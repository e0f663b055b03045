//! The JSON value tree: a tagged sum type plus constructors, structural
//! mutators, and typed accessors.
//!
//! Objects are stored as insertion-ordered `(key, value)` pairs rather than a
//! map: member order is preserved, duplicate keys are permitted, and lookups
//! return the first match. Arrays and objects own their children exclusively;
//! inserting a value moves it into the container, so the whole tree is freed
//! by a single (recursive) drop of the root.
//!
//! Two accessor families exist side by side:
//!
//! - `get`/`at` + `as_*` compose into a full disambiguation: `get` answers
//!   found-vs-missing, `as_*` answers whether the tag matches.
//! - `get_bool`/`get_number`/`get_str` (and the `at_*` analogues) are
//!   convenience accessors that collapse non-object, missing key, and wrong
//!   tag into a single sentinel (`false` / `0` / `None`). `{"a": false}` is
//!   indistinguishable from a missing `"a"` through `get_bool` — that is the
//!   documented trade-off; use `get` when it matters.

/// A JSON value restricted to the supported subset: numbers are integers,
/// object member order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(i64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. Duplicate keys are retained;
    /// lookups return the first match.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Fresh empty array.
    pub fn new_array() -> Value {
        Value::Array(Vec::new())
    }

    /// Fresh empty object.
    pub fn new_object() -> Value {
        Value::Object(Vec::new())
    }

    // ------------------------------------------------------------------
    // Tag predicates and downcasts
    // ------------------------------------------------------------------

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Structural mutators
    // ------------------------------------------------------------------

    /// Append `value` as the last element of this array, taking ownership.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an `Array`; pushing into a scalar or an object
    /// is an API contract violation, not a recoverable condition.
    pub fn push(&mut self, value: Value) {
        match self {
            Value::Array(items) => items.push(value),
            other => panic!("push on non-array Value ({})", other.tag_name()),
        }
    }

    /// Append the member `key: value` to this object, taking ownership.
    /// No duplicate-key detection: repeated keys are all retained in
    /// insertion order, and lookups return the first.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an `Object`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        match self {
            Value::Object(members) => members.push((key.into(), value)),
            other => panic!("insert on non-object Value ({})", other.tag_name()),
        }
    }

    // Convenience wrappers composing a constructor with push/insert.

    pub fn push_null(&mut self) {
        self.push(Value::Null);
    }

    pub fn push_bool(&mut self, b: bool) {
        self.push(Value::Bool(b));
    }

    pub fn push_number(&mut self, n: i64) {
        self.push(Value::Number(n));
    }

    pub fn push_string(&mut self, s: impl Into<String>) {
        self.push(Value::String(s.into()));
    }

    pub fn insert_null(&mut self, key: impl Into<String>) {
        self.insert(key, Value::Null);
    }

    pub fn insert_bool(&mut self, key: impl Into<String>, b: bool) {
        self.insert(key, Value::Bool(b));
    }

    pub fn insert_number(&mut self, key: impl Into<String>, n: i64) {
        self.insert(key, Value::Number(n));
    }

    pub fn insert_string(&mut self, key: impl Into<String>, s: impl Into<String>) {
        self.insert(key, Value::String(s.into()));
    }

    // ------------------------------------------------------------------
    // Object queries
    // ------------------------------------------------------------------

    /// True if this is an object with at least one member named `key`.
    /// False for any non-object value.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// First member named `key`, or `None` if this is not an object or no
    /// member matches. This is the accessor that disambiguates absence from
    /// a tag mismatch: pair it with [`Value::as_bool`] and friends.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Sentinel accessor: the member's boolean, or `false` if this is not an
    /// object, the key is missing, or the member is not a `Bool`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Sentinel accessor: the member's number, or `0` if this is not an
    /// object, the key is missing, or the member is not a `Number`.
    pub fn get_number(&self, key: &str) -> i64 {
        self.get(key).and_then(Value::as_number).unwrap_or(0)
    }

    /// Sentinel accessor: the member's string, or `None` if this is not an
    /// object, the key is missing, or the member is not a `String`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    // ------------------------------------------------------------------
    // Array queries
    // ------------------------------------------------------------------

    /// Number of elements, or `0` for any non-array value.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// True if this is not an array, or is an array with no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` if this is not an array or the index is
    /// out of range.
    pub fn at(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Sentinel accessor: the element's boolean, or `false` on any mismatch.
    pub fn at_bool(&self, index: usize) -> bool {
        self.at(index).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Sentinel accessor: the element's number, or `0` on any mismatch.
    pub fn at_number(&self, index: usize) -> i64 {
        self.at(index).and_then(Value::as_number).unwrap_or(0)
    }

    /// Sentinel accessor: the element's string, or `None` on any mismatch.
    pub fn at_str(&self, index: usize) -> Option<&str> {
        self.at(index).and_then(Value::as_str)
    }

    fn tag_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}
