/// Declares an enum whose variants each carry a fixed raw value.
///
/// The generated type implements [`HasRawValue`] and [`FromRawValue`],
/// `TryFrom` its raw type, serde (as the raw value) and `PartialEq` in
/// both directions against the raw type and `Option` of it. An `ALL`
/// constant lists the variants in declaration order.
///
/// Enums with `&'static str` raw values additionally get `as_str`,
/// `Display` and `FromStr`, and compare against `&str` and `String`.
///
/// ```
/// use optional_helpers::raw_enum;
///
/// raw_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Season: &'static str {
///         Spring = "spring",
///         Summer = "summer",
///         Autumn = "autumn",
///         Winter = "winter",
///     }
/// }
///
/// assert!(Season::Summer == "summer");
/// assert!("summer" == Season::Summer);
/// assert_eq!("winter", Season::Winter.to_string());
/// assert_eq!(Ok(Season::Autumn), "autumn".parse::<Season>());
/// ```
///
/// [`HasRawValue`]: crate::HasRawValue
/// [`FromRawValue`]: crate::FromRawValue
#[macro_export]
macro_rules! raw_enum {
    (@impls $name:ident: $raw_ty:ty { $($variant:ident = $raw:literal),+ }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::HasRawValue for $name {
            type Raw = $raw_ty;

            fn raw_value(&self) -> $raw_ty {
                match self {
                    $($name::$variant => $raw),+
                }
            }
        }

        impl $crate::FromRawValue for $name {
            fn from_raw_value<Q: ?Sized>(raw: &Q) -> ::core::option::Option<Self>
            where
                Self::Raw: ::core::cmp::PartialEq<Q>,
            {
                $(
                    let value: <Self as $crate::HasRawValue>::Raw = $raw;
                    if value == *raw {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }
    };

    (@eq $name:ident: $($cmp:ty),+) => {
        $(
            impl ::core::cmp::PartialEq<$cmp> for $name {
                fn eq(&self, other: &$cmp) -> bool {
                    $crate::HasRawValue::raw_value(self) == *other
                }
            }

            impl ::core::cmp::PartialEq<$name> for $cmp {
                fn eq(&self, other: &$name) -> bool {
                    other == self
                }
            }

            impl ::core::cmp::PartialEq<::core::option::Option<$cmp>> for $name {
                fn eq(&self, other: &::core::option::Option<$cmp>) -> bool {
                    match other {
                        ::core::option::Option::Some(raw) => self == raw,
                        ::core::option::Option::None => false,
                    }
                }
            }

            impl ::core::cmp::PartialEq<$name> for ::core::option::Option<$cmp> {
                fn eq(&self, other: &$name) -> bool {
                    other == self
                }
            }
        )+
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: &'static str {
            $($(#[$vmeta:meta])* $variant:ident = $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        $crate::raw_enum!(@impls $name: &'static str { $($variant = $raw),+ });
        $crate::raw_enum!(@eq $name: &str, ::std::string::String);

        impl $name {
            pub fn as_str(&self) -> &'static str {
                $crate::HasRawValue::raw_value(self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'a> ::core::convert::TryFrom<&'a str> for $name {
            type Error = $crate::RawValueError;

            fn try_from(raw: &'a str) -> ::core::result::Result<Self, Self::Error> {
                <$name as $crate::FromRawValue>::from_raw_value(&raw)
                    .ok_or_else(|| $crate::RawValueError::unknown(stringify!($name), raw))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::RawValueError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <$name as ::core::convert::TryFrom<&str>>::try_from(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                raw.parse()
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $raw_ty:ty {
            $($(#[$vmeta:meta])* $variant:ident = $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        $crate::raw_enum!(@impls $name: $raw_ty { $($variant = $raw),+ });
        $crate::raw_enum!(@eq $name: $raw_ty);

        impl ::core::convert::TryFrom<$raw_ty> for $name {
            type Error = $crate::RawValueError;

            fn try_from(raw: $raw_ty) -> ::core::result::Result<Self, Self::Error> {
                <$name as $crate::FromRawValue>::from_raw_value(&raw)
                    .ok_or_else(|| $crate::RawValueError::unknown(stringify!($name), &raw))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    &$crate::HasRawValue::raw_value(self),
                    serializer,
                )
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw: $raw_ty = $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                <$name as ::core::convert::TryFrom<$raw_ty>>::try_from(raw)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
