use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Anything with a notion of being empty: strings and collections.
///
/// Used by [`OptionExt::is_none_or_empty`] and [`OptionExt::non_empty`].
///
/// [`OptionExt::is_none_or_empty`]: crate::OptionExt::is_none_or_empty
/// [`OptionExt::non_empty`]: crate::OptionExt::non_empty
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl IsEmpty for Cow<'_, str> {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> IsEmpty for [T; N] {
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> IsEmpty for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<C: IsEmpty + ?Sized> IsEmpty for &C {
    fn is_empty(&self) -> bool {
        C::is_empty(self)
    }
}

impl<C: IsEmpty + ?Sized> IsEmpty for &mut C {
    fn is_empty(&self) -> bool {
        C::is_empty(self)
    }
}

impl<C: IsEmpty + ?Sized> IsEmpty for Box<C> {
    fn is_empty(&self) -> bool {
        C::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(str: IsEmpty);
    assert_impl_all!(&'static str: IsEmpty);
    assert_impl_all!(Vec<u8>: IsEmpty);
    assert_impl_all!([u8]: IsEmpty);
    assert_impl_all!(Box<[u8]>: IsEmpty);
    assert_impl_all!(HashMap<String, u8>: IsEmpty);
    assert_not_impl_any!(u8: IsEmpty);
    assert_not_impl_any!(Option<String>: IsEmpty);

    #[test]
    fn strings() {
        assert!(IsEmpty::is_empty(""));
        assert!(!IsEmpty::is_empty("hello"));
        assert!(IsEmpty::is_empty(&String::new()));
        assert!(IsEmpty::is_empty(&Cow::Borrowed("")));
        assert!(!IsEmpty::is_empty(&Cow::<str>::Owned("x".to_string())));
    }

    #[test]
    fn collections() {
        assert!(IsEmpty::is_empty(&Vec::<u8>::new()));
        assert!(!IsEmpty::is_empty(&vec![1]));
        assert!(IsEmpty::is_empty(&[0u8; 0]));
        assert!(!IsEmpty::is_empty(&[1, 2, 3]));
        assert!(IsEmpty::is_empty(&VecDeque::<u8>::new()));
        assert!(IsEmpty::is_empty(&BTreeSet::<u8>::new()));

        let mut map = BTreeMap::new();
        assert!(IsEmpty::is_empty(&map));
        map.insert("k", 1);
        assert!(!IsEmpty::is_empty(&map));
    }

    #[test]
    fn references_forward() {
        let v = vec![1, 2];
        let r: &Vec<i32> = &v;
        assert!(!IsEmpty::is_empty(&r));
        let b: Box<str> = "".into();
        assert!(IsEmpty::is_empty(&b));
    }
}
