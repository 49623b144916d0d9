/// Accepts either a bare value or an `Option` wherever an optional
/// argument is expected.
///
/// ```
/// use optional_helpers::OptionExt;
///
/// let mut a: Option<u32> = None;
/// a.conditional_assign(3u32);
///
/// let mut b: Option<u32> = None;
/// b.conditional_assign(Some(3u32));
///
/// assert_eq!(a, b);
/// ```
pub trait IntoOptional<T> {
    fn into_optional(self) -> Option<T>;
}

impl<T> IntoOptional<T> for T {
    fn into_optional(self) -> Option<T> {
        Some(self)
    }
}

impl<T> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Option<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(value: impl IntoOptional<u64>) -> Option<u64> {
        value.into_optional()
    }

    #[test]
    fn bare_and_optional_values() {
        assert_eq!(Some(10), take(10u64));
        assert_eq!(Some(10), take(Some(10u64)));
        assert_eq!(None, take(None));
    }

    #[test]
    fn optional_of_optional_stays_nested() {
        let nested: Option<Option<&str>> = Some(None);
        let converted = IntoOptional::<Option<&str>>::into_optional(nested);
        assert_eq!(Some(None), converted);
    }
}
