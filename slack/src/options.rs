//! Request parameters: what a caller sets, and what ends up on the wire.

use std::fmt;

use crate::timestamp::Timestamp;

/// A single parameter value as Slack receives it.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Sent as a comma separated string, e.g. the `users` of `mpim.open`.
    List(Vec<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            // Form encoding of booleans, as Slack documents them
            Value::Bool(true) => f.write_str("1"),
            Value::Bool(false) => f.write_str("0"),
            Value::List(items) => f.write_str(&crate::join_comma_separated(items)),
        }
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a String> for Value {
    fn from(s: &'a String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

macro_rules! int_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

int_value!(i32, i64, u8, u16, u32);

macro_rules! wide_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                /// Past `i64::MAX` the digits are sent as they are.
                fn from(i: $ty) -> Self {
                    i64::try_from(i)
                        .map(Value::Int)
                        .unwrap_or_else(|_| Value::Str(i.to_string()))
                }
            }
        )*
    };
}

wide_value!(u64, usize);

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Str(ts.to_string())
    }
}

impl<'a, 'b> From<&'a [&'b str]> for Value {
    fn from(items: &'a [&'b str]) -> Self {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a> From<&'a [String]> for Value {
    fn from(items: &'a [String]) -> Self {
        Value::List(items.to_vec())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl<'a> From<Vec<&'a str>> for Value {
    fn from(items: Vec<&'a str>) -> Self {
        Value::List(items.into_iter().map(String::from).collect())
    }
}

/// A parameter slot: either a value, or explicitly nothing.
///
/// `Unset` entries are dropped before the request is sent.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    Unset,
    Set(Value),
}

impl Param {
    pub fn is_set(&self) -> bool {
        matches!(self, Param::Set(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Param::Set(v) => Some(v),
            Param::Unset => None,
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Param {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(v) => Param::Set(v.into()),
            None => Param::Unset,
        }
    }
}

/// An ordered mapping of Slack parameter names to [`Param`]s.
///
/// Keys are exact, case-sensitive Slack parameter names. Re-setting a key
/// replaces its value and keeps its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    entries: Vec<(String, Param)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RequestOptions::set`].
    pub fn with<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Builder form of [`RequestOptions::unset`].
    pub fn without(mut self, key: &str) -> Self {
        self.unset(key);
        self
    }

    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.insert(key, Param::Set(value.into()));
    }

    /// Marks `key` as explicitly unset, which removes it from the request
    /// even when the method has a default for it.
    pub fn unset(&mut self, key: &str) {
        self.insert(key, Param::Unset);
    }

    pub fn insert(&mut self, key: &str, param: Param) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = param,
            None => self.entries.push((key.to_string(), param)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Lays `overrides` over `self`, key for key. Keys not already present are
    /// appended in the order `overrides` has them.
    pub fn merge(mut self, overrides: RequestOptions) -> Self {
        self.extend(overrides);
        self
    }

    /// Drops every `Unset` entry.
    pub fn filtered(self) -> Self {
        RequestOptions {
            entries: self
                .entries
                .into_iter()
                .filter(|(_, p)| p.is_set())
                .collect(),
        }
    }

    /// The `(name, value)` pairs that go on the wire.
    pub fn to_params(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, p)| p.value().map(|v| (k.clone(), v.to_string())))
            .collect()
    }
}

impl Extend<(String, Param)> for RequestOptions {
    fn extend<I: IntoIterator<Item = (String, Param)>>(&mut self, iter: I) {
        for (key, param) in iter {
            self.insert(&key, param);
        }
    }
}

impl IntoIterator for RequestOptions {
    type Item = (String, Param);
    type IntoIter = ::std::vec::IntoIter<(String, Param)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = RequestOptions::new();
        for (key, value) in iter {
            let key: String = key.into();
            options.set(&key, value);
        }
        options
    }
}
