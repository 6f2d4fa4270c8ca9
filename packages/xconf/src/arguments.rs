//! Typed constructor argument list.
//!
//! Arguments are stored as one sequence of `(value, type)` pairs. The
//! value and type views are projections of that sequence, so they always
//! have the same length and line up index for index.

use std::ops::Range;

use crate::error::{ConfigParserError, Result};
use crate::types::{ArgValue, TypeTag};

/// A constructor argument together with its exact parameter type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArgument {
    value: ArgValue,
    type_tag: TypeTag,
}

impl TypedArgument {
    /// Wrap a value; the type is taken from the value itself.
    #[must_use]
    pub fn new(value: ArgValue) -> Self {
        let type_tag = value.type_tag();
        Self { value, type_tag }
    }

    #[must_use]
    pub fn value(&self) -> &ArgValue {
        &self.value
    }

    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    #[must_use]
    pub fn into_value(self) -> ArgValue {
        self.value
    }
}

impl From<ArgValue> for TypedArgument {
    fn from(value: ArgValue) -> Self {
        Self::new(value)
    }
}

/// Ordered list of typed constructor arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentList {
    args: Vec<TypedArgument>,
}

impl ArgumentList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            args: Vec::with_capacity(capacity),
        }
    }

    /// Build a list from already-cast values.
    pub fn from_values(values: impl IntoIterator<Item = ArgValue>) -> Self {
        values.into_iter().collect()
    }

    fn index_error(&self, index: usize) -> ConfigParserError {
        ConfigParserError::ArgumentIndex {
            index,
            len: self.args.len(),
        }
    }

    /// Append a value at the end.
    pub fn push(&mut self, value: ArgValue) {
        self.args.push(TypedArgument::new(value));
    }

    /// Insert a value at `index`, shifting later arguments right.
    ///
    /// # Errors
    /// Returns `ArgumentIndex` if `index > len`.
    pub fn insert(&mut self, index: usize, value: ArgValue) -> Result<()> {
        if index > self.args.len() {
            return Err(self.index_error(index));
        }
        self.args.insert(index, TypedArgument::new(value));
        Ok(())
    }

    /// Append every value of `values` in order.
    pub fn extend(&mut self, values: impl IntoIterator<Item = ArgValue>) {
        self.args.extend(values.into_iter().map(TypedArgument::new));
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TypedArgument> {
        self.args.get(index)
    }

    /// Replace the value at `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns `ArgumentIndex` if `index >= len`.
    pub fn set(&mut self, index: usize, value: ArgValue) -> Result<ArgValue> {
        let err = self.index_error(index);
        let slot = self.args.get_mut(index).ok_or(err)?;
        let previous = std::mem::replace(slot, TypedArgument::new(value));
        Ok(previous.into_value())
    }

    /// Remove and return the value at `index`.
    ///
    /// # Errors
    /// Returns `ArgumentIndex` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<ArgValue> {
        if index >= self.args.len() {
            return Err(self.index_error(index));
        }
        Ok(self.args.remove(index).into_value())
    }

    /// Remove the first argument equal to `value`.
    ///
    /// Returns `true` if an argument was removed.
    pub fn remove(&mut self, value: &ArgValue) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.args.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every argument equal to any of `values`.
    ///
    /// Returns `true` if the list changed.
    pub fn remove_all(&mut self, values: &[ArgValue]) -> bool {
        let before = self.args.len();
        self.args.retain(|arg| !values.contains(&arg.value));
        self.args.len() != before
    }

    /// Keep only arguments equal to one of `values`, preserving order.
    ///
    /// Duplicates of a kept value are all kept. Returns `true` if the
    /// list changed.
    pub fn retain_all(&mut self, values: &[ArgValue]) -> bool {
        let before = self.args.len();
        self.args.retain(|arg| values.contains(&arg.value));
        self.args.len() != before
    }

    /// Copy the arguments in `range` into a new list.
    ///
    /// # Errors
    /// Returns `ArgumentIndex` if the range is reversed or ends past `len`.
    pub fn slice(&self, range: Range<usize>) -> Result<ArgumentList> {
        if range.start > range.end {
            return Err(self.index_error(range.start));
        }
        self.args
            .get(range.clone())
            .map(|args| ArgumentList {
                args: args.to_vec(),
            })
            .ok_or_else(|| self.index_error(range.end))
    }

    #[must_use]
    pub fn contains(&self, value: &ArgValue) -> bool {
        self.index_of(value).is_some()
    }

    #[must_use]
    pub fn index_of(&self, value: &ArgValue) -> Option<usize> {
        self.args.iter().position(|arg| &arg.value == value)
    }

    #[must_use]
    pub fn last_index_of(&self, value: &ArgValue) -> Option<usize> {
        self.args.iter().rposition(|arg| &arg.value == value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn clear(&mut self) {
        self.args.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypedArgument> {
        self.args.iter()
    }

    /// Value view, index-aligned with [`ArgumentList::types`].
    #[must_use]
    pub fn values(&self) -> Vec<&ArgValue> {
        self.args.iter().map(TypedArgument::value).collect()
    }

    /// Type view, index-aligned with [`ArgumentList::values`].
    ///
    /// This is the signature used for constructor lookup.
    #[must_use]
    pub fn types(&self) -> Vec<TypeTag> {
        self.args.iter().map(TypedArgument::type_tag).collect()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<ArgValue> {
        self.args.into_iter().map(TypedArgument::into_value).collect()
    }

    #[must_use]
    pub fn string_at(&self, index: usize) -> Option<&str> {
        match self.get(index)?.value() {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn bytes_at(&self, index: usize) -> Option<&[u8]> {
        match self.get(index)?.value() {
            ArgValue::ByteArray(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn chars_at(&self, index: usize) -> Option<&[char]> {
        match self.get(index)?.value() {
            ArgValue::CharArray(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn int_at(&self, index: usize) -> Option<i32> {
        match self.get(index)?.value() {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn short_at(&self, index: usize) -> Option<i16> {
        match self.get(index)?.value() {
            ArgValue::Short(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn long_at(&self, index: usize) -> Option<i64> {
        match self.get(index)?.value() {
            ArgValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn float_at(&self, index: usize) -> Option<f32> {
        match self.get(index)?.value() {
            ArgValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn double_at(&self, index: usize) -> Option<f64> {
        match self.get(index)?.value() {
            ArgValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn bool_at(&self, index: usize) -> Option<bool> {
        match self.get(index)?.value() {
            ArgValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromIterator<ArgValue> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = ArgValue>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(TypedArgument::new).collect(),
        }
    }
}

impl IntoIterator for ArgumentList {
    type Item = TypedArgument;
    type IntoIter = std::vec::IntoIter<TypedArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a TypedArgument;
    type IntoIter = std::slice::Iter<'a, TypedArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}
