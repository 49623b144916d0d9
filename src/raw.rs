//! Values with a raw representation, and equality against that raw value.
//!
//! The usual implementor is an enum whose variants each map to a fixed
//! string or number, declared with [`raw_enum!`](crate::raw_enum).

/// A value with a pure, total mapping to a raw representation.
pub trait HasRawValue {
    type Raw;

    fn raw_value(&self) -> Self::Raw;

    /// Whether this value's raw representation equals `raw`.
    fn raw_eq<Q>(&self, raw: Q) -> bool
    where
        Self::Raw: PartialEq<Q>,
    {
        self.raw_value() == raw
    }

    fn raw_ne<Q>(&self, raw: Q) -> bool
    where
        Self::Raw: PartialEq<Q>,
    {
        !self.raw_eq(raw)
    }
}

/// The inverse of [`HasRawValue`]: looks up the value for a raw
/// representation. Unknown raw values give `None`.
pub trait FromRawValue: HasRawValue + Sized {
    fn from_raw_value<Q: ?Sized>(raw: &Q) -> Option<Self>
    where
        Self::Raw: PartialEq<Q>;
}

impl<V: HasRawValue + ?Sized> HasRawValue for &V {
    type Raw = V::Raw;

    fn raw_value(&self) -> Self::Raw {
        V::raw_value(self)
    }
}

/// Compares a possibly absent value with a possibly absent raw value.
///
/// Two absent operands are equal; one absent operand is never equal to a
/// present one. Pass bare operands wrapped in `Some`.
pub fn value_eq_raw<V, Q>(value: Option<&V>, raw: Option<Q>) -> bool
where
    V: HasRawValue + ?Sized,
    V::Raw: PartialEq<Q>,
{
    match (value, raw) {
        (Some(value), Some(raw)) => value.raw_eq(raw),
        (None, None) => true,
        _ => false,
    }
}

pub fn value_ne_raw<V, Q>(value: Option<&V>, raw: Option<Q>) -> bool
where
    V: HasRawValue + ?Sized,
    V::Raw: PartialEq<Q>,
{
    !value_eq_raw(value, raw)
}

/// [`value_eq_raw`] with the operands swapped.
pub fn raw_eq_value<V, Q>(raw: Option<Q>, value: Option<&V>) -> bool
where
    V: HasRawValue + ?Sized,
    V::Raw: PartialEq<Q>,
{
    value_eq_raw(value, raw)
}

pub fn raw_ne_value<V, Q>(raw: Option<Q>, value: Option<&V>) -> bool
where
    V: HasRawValue + ?Sized,
    V::Raw: PartialEq<Q>,
{
    !raw_eq_value(raw, value)
}
