//! Qualifier tags
//!
//! A [`Qualifier`] is a named identifier with optional string members. Two
//! qualifiers are equal only when both the name and every member match, so
//! `named(value=a)` and `named(value=b)` narrow to different candidates.
//!
//! ## Textual form
//!
//! ```text
//! formal
//! named(value=backup)
//! region(zone=eu, tier=gold)
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{NAMED_QUALIFIER, NAMED_VALUE_MEMBER, QUALIFIER_LIST_SEPARATOR};
use crate::error::{Error, Result};

/// A qualifier identifier attached to a component type or injection point
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Qualifier {
    name: Cow<'static, str>,
    members: BTreeMap<String, String>,
}

impl Qualifier {
    /// Qualifier with a static name and no members, usable in `const` items
    ///
    /// # Panics
    ///
    /// Panics when `name` is not a valid qualifier name. In a `const` item
    /// this is a compile error.
    pub const fn from_static(name: &'static str) -> Self {
        assert!(is_identifier(name), "invalid static qualifier name");
        Self {
            name: Cow::Borrowed(name),
            members: BTreeMap::new(),
        }
    }

    /// Qualifier with the given name and no members
    ///
    /// Fails when the name is empty or contains characters outside
    /// `[A-Za-z0-9_.-]`.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name, "qualifier name")?;
        Ok(Self {
            name: Cow::Owned(name),
            members: BTreeMap::new(),
        })
    }

    /// The conventional `named(value=...)` qualifier
    ///
    /// Fails under the same rules as [`Qualifier::with_member`].
    pub fn named<S: Into<String>>(value: S) -> Result<Self> {
        Self::from_static(NAMED_QUALIFIER).with_member(NAMED_VALUE_MEMBER, value)
    }

    /// Add or replace a member
    ///
    /// The key follows the qualifier name rules. The value must not contain
    /// `,` `(` or `)` and must not start or end with whitespace, otherwise
    /// the textual form would not parse back to the same qualifier.
    pub fn with_member<K: Into<String>, V: Into<String>>(
        mut self,
        key: K,
        value: V,
    ) -> Result<Self> {
        let key = key.into();
        let value = value.into();
        validate_identifier(&key, "member name")?;
        validate_member_value(&value, &key)?;
        self.members.insert(key, value);
        Ok(self)
    }

    /// Qualifier name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member value, if present
    pub fn member(&self, key: &str) -> Option<&str> {
        self.members.get(key).map(String::as_str)
    }

    /// All members, ordered by key
    pub fn members(&self) -> &BTreeMap<String, String> {
        &self.members
    }

    /// Parse a comma separated list such as `official, named(value=x)`
    ///
    /// Commas inside parentheses belong to the member list.
    pub fn parse_list(text: &str) -> Result<Vec<Self>> {
        let mut qualifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        for (index, ch) in text.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                c if c == QUALIFIER_LIST_SEPARATOR && depth == 0 => {
                    qualifiers.push(text[start..index].parse()?);
                    start = index + c.len_utf8();
                }
                _ => {}
            }
        }
        let tail = text[start..].trim();
        if !tail.is_empty() || !qualifiers.is_empty() {
            qualifiers.push(tail.parse()?);
        }
        Ok(qualifiers)
    }
}

const fn is_identifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut index = 0;
    while index < bytes.len() {
        let b = bytes[index];
        if !(b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.')) {
            return false;
        }
        index += 1;
    }
    true
}

fn validate_member_value(value: &str, key: &str) -> Result<()> {
    if let Some(bad) = value
        .chars()
        .find(|&c| c == QUALIFIER_LIST_SEPARATOR || matches!(c, '(' | ')'))
    {
        return Err(Error::invalid_qualifier(format!(
            "member value '{value}' of '{key}' contains reserved character '{bad}'"
        )));
    }
    if value.trim() != value {
        return Err(Error::invalid_qualifier(format!(
            "member value '{value}' of '{key}' has surrounding whitespace"
        )));
    }
    Ok(())
}

fn validate_identifier(text: &str, what: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::invalid_qualifier(format!("{what} cannot be empty")));
    }
    if let Some(bad) = text
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(Error::invalid_qualifier(format!(
            "{what} '{text}' contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

impl FromStr for Qualifier {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let Some(open) = text.find('(') else {
            return Self::new(text);
        };
        let Some(body) = text[open + 1..].strip_suffix(')') else {
            return Err(Error::invalid_qualifier(format!(
                "'{text}' has an unterminated member list"
            )));
        };

        let mut qualifier = Self::new(text[..open].trim())?;
        for member in body.split(QUALIFIER_LIST_SEPARATOR).map(str::trim) {
            if member.is_empty() {
                continue;
            }
            let Some((key, value)) = member.split_once('=') else {
                return Err(Error::invalid_qualifier(format!(
                    "member '{member}' of '{text}' is not of the form key=value"
                )));
            };
            qualifier = qualifier.with_member(key.trim(), value.trim())?;
        }
        Ok(qualifier)
    }
}

impl TryFrom<String> for Qualifier {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl From<Qualifier> for String {
    fn from(qualifier: Qualifier) -> Self {
        qualifier.to_string()
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.members.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (index, (key, value)) in self.members.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str(")")
    }
}

/// Ordered, de-duplicated set of qualifiers
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifierSet {
    qualifiers: BTreeSet<Qualifier>,
}

impl QualifierSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qualifier (builder form)
    pub fn with(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.insert(qualifier);
        self
    }

    /// Add a qualifier, returning whether it was new
    pub fn insert(&mut self, qualifier: Qualifier) -> bool {
        self.qualifiers.insert(qualifier)
    }

    /// Whether the set holds `qualifier`
    pub fn contains(&self, qualifier: &Qualifier) -> bool {
        self.qualifiers.contains(qualifier)
    }

    /// Whether every qualifier in `required` is present (AND semantics)
    ///
    /// An empty requirement is satisfied by every set.
    pub fn contains_all<'a, I>(&self, required: I) -> bool
    where
        I: IntoIterator<Item = &'a Qualifier>,
    {
        required.into_iter().all(|q| self.qualifiers.contains(q))
    }

    /// Whether this set is a superset of `other`
    pub fn is_superset(&self, other: &QualifierSet) -> bool {
        self.qualifiers.is_superset(&other.qualifiers)
    }

    /// Iterate in qualifier order
    pub fn iter(&self) -> impl Iterator<Item = &Qualifier> {
        self.qualifiers.iter()
    }

    /// Number of qualifiers
    pub fn len(&self) -> usize {
        self.qualifiers.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty()
    }
}

impl FromIterator<Qualifier> for QualifierSet {
    fn from_iter<I: IntoIterator<Item = Qualifier>>(iter: I) -> Self {
        Self {
            qualifiers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QualifierSet {
    type Item = &'a Qualifier;
    type IntoIter = std::collections::btree_set::Iter<'a, Qualifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.qualifiers.iter()
    }
}

impl fmt::Display for QualifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, qualifier) in self.qualifiers.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{qualifier}")?;
        }
        f.write_str("}")
    }
}
