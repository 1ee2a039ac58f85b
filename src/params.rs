//! Binding descriptions.
//!
//! A [`ParamPackage`] is a flat `key → value` string map that fully describes
//! one input device. Capture produces them, applications persist them, and
//! factories turn them back into devices.
//!
//! # Text form
//! Packages persist as `key:value,key:value` with keys in sorted order.
//! Separator characters inside keys or values are escaped: `:` as `$0`,
//! `,` as `$1`, and `$` itself as `$2`.
//!
//! ```
//! use padbind::ParamPackage;
//!
//! let mut params = ParamPackage::new();
//! params.set("engine", "gcpad");
//! params.set("port", 1);
//! params.set("button", 256);
//! assert_eq!(params.to_string(), "button:256,engine:gcpad,port:1");
//! ```

use crate::error::BindingError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const KEY_VALUE_SEPARATOR: char = ':';
const PARAM_SEPARATOR: char = ',';
const ESCAPE: char = '$';

/// Flat, ordered description of one input binding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParamPackage {
    entries: BTreeMap<String, String>,
}

impl ParamPackage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.insert(key.into(), value.to_string());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Integer value of `key`, or `default` when missing or not an integer.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Float value of `key`, or `default` when missing or not a number.
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    pub fn erase(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn escape(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            KEY_VALUE_SEPARATOR => out.push_str("$0"),
            PARAM_SEPARATOR => out.push_str("$1"),
            ESCAPE => out.push_str("$2"),
            c => out.push(c),
        }
    }
}

fn unescape(s: &str) -> Result<String, BindingError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push(KEY_VALUE_SEPARATOR),
            Some('1') => out.push(PARAM_SEPARATOR),
            Some('2') => out.push(ESCAPE),
            _ => return Err(BindingError::MalformedParam(s.to_string())),
        }
    }
    Ok(out)
}

impl fmt::Display for ParamPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(PARAM_SEPARATOR);
            }
            escape(&mut out, key);
            out.push(KEY_VALUE_SEPARATOR);
            escape(&mut out, value);
        }
        f.write_str(&out)
    }
}

impl FromStr for ParamPackage {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut params = Self::new();
        if s.is_empty() {
            return Ok(params);
        }
        for pair in s.split(PARAM_SEPARATOR) {
            let (key, value) = pair
                .split_once(KEY_VALUE_SEPARATOR)
                .ok_or_else(|| BindingError::MalformedParam(pair.to_string()))?;
            params.entries.insert(unescape(key)?, unescape(value)?);
        }
        Ok(params)
    }
}

impl TryFrom<String> for ParamPackage {
    type Error = BindingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ParamPackage> for String {
    fn from(params: ParamPackage) -> Self {
        params.to_string()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ParamPackage {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
