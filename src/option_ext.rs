use crate::empty::IsEmpty;
use crate::into_optional::IntoOptional;
use crate::raw::HasRawValue;

/// Convenience methods on [`Option`].
pub trait OptionExt<T> {
    /// Returns the contained value, or `default` when absent.
    fn unwrapped_or(self, default: T) -> T;

    /// Returns the contained value, or fails with the caller's `error`.
    ///
    /// ```
    /// use optional_helpers::OptionExt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Missing;
    ///
    /// fn name(input: Option<&str>) -> Result<&str, Missing> {
    ///     let name = input.unwrapped_or_fail(Missing)?;
    ///     Ok(name)
    /// }
    ///
    /// assert_eq!(Ok("crab"), name(Some("crab")));
    /// assert_eq!(Err(Missing), name(None));
    /// ```
    fn unwrapped_or_fail<E>(self, error: E) -> Result<T, E>;

    /// Calls `f` with the contained value, once, and only if there is one.
    fn run_if_some<F>(self, f: F)
    where
        F: FnOnce(T);

    /// Sets `self` to `value` if `self` is `None`; a `Some` is left alone.
    ///
    /// `value` may be absent, in which case a `None` stays `None`.
    fn conditional_assign(&mut self, value: impl IntoOptional<T>);

    fn is_none_or_empty(&self) -> bool
    where
        T: IsEmpty;

    /// `None` if absent or empty, otherwise `self` unchanged.
    fn non_empty(self) -> Option<T>
    where
        T: IsEmpty;

    /// True only when present and its raw value equals `raw`.
    fn raw_eq<Q>(&self, raw: Q) -> bool
    where
        T: HasRawValue,
        T::Raw: PartialEq<Q>;

    fn raw_ne<Q>(&self, raw: Q) -> bool
    where
        T: HasRawValue,
        T::Raw: PartialEq<Q>;
}

impl<T> OptionExt<T> for Option<T> {
    fn unwrapped_or(self, default: T) -> T {
        match self {
            Some(value) => value,
            None => default,
        }
    }

    fn unwrapped_or_fail<E>(self, error: E) -> Result<T, E> {
        match self {
            Some(value) => Ok(value),
            None => Err(error),
        }
    }

    fn run_if_some<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self {
            f(value);
        }
    }

    fn conditional_assign(&mut self, value: impl IntoOptional<T>) {
        if self.is_none() {
            *self = value.into_optional();
            log::trace!(
                "conditional assign into empty option, now {}",
                if self.is_some() { "some" } else { "none" }
            );
        }
    }

    fn is_none_or_empty(&self) -> bool
    where
        T: IsEmpty,
    {
        match self {
            Some(value) => value.is_empty(),
            None => true,
        }
    }

    fn non_empty(self) -> Option<T>
    where
        T: IsEmpty,
    {
        self.filter(|value| !value.is_empty())
    }

    fn raw_eq<Q>(&self, raw: Q) -> bool
    where
        T: HasRawValue,
        T::Raw: PartialEq<Q>,
    {
        match self {
            Some(value) => value.raw_eq(raw),
            None => false,
        }
    }

    fn raw_ne<Q>(&self, raw: Q) -> bool
    where
        T: HasRawValue,
        T::Raw: PartialEq<Q>,
    {
        !OptionExt::raw_eq(self, raw)
    }
}
