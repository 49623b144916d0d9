//! Convenience extensions for [`Option`].
//!
//! - [`OptionExt`]: default and failing unwraps, run-if-present,
//!   conditional assignment, emptiness checks and raw value equality.
//! - [`MapExt`]: coalescing assignment into map slots.
//! - [`raw_enum!`]: enums whose variants carry raw values, comparable
//!   with those raw values.
//!
//! ```
//! use optional_helpers::OptionExt;
//!
//! let name: Option<String> = None;
//! assert_eq!("anonymous", name.clone().unwrapped_or("anonymous".into()));
//! assert!(name.is_none_or_empty());
//! ```

#[macro_use]
mod macros;
mod empty;
mod error;
mod into_optional;
mod map_ext;
mod option_ext;
mod raw;

pub use crate::empty::IsEmpty;
pub use crate::error::{RawResult, RawValueError};
pub use crate::into_optional::IntoOptional;
pub use crate::map_ext::MapExt;
pub use crate::option_ext::OptionExt;
pub use crate::raw::{
    raw_eq_value, raw_ne_value, value_eq_raw, value_ne_raw, FromRawValue, HasRawValue,
};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn helpers_compose() -> Result<(), &'static str> {
        let mut headers: HashMap<&str, String> = HashMap::new();
        let mut fallback: Option<String> = None;

        fallback.conditional_assign(Some("text/plain".to_string()));
        headers.coalesce_assign("content-type", fallback.clone().non_empty());
        headers.coalesce_assign("content-type", "application/json".to_string());

        let content_type = headers
            .get("content-type")
            .cloned()
            .unwrapped_or_fail("missing content type")?;
        assert_eq!("text/plain", content_type);

        let mut seen = Vec::new();
        headers.get("accept").run_if_some(|v| seen.push(v.clone()));
        assert!(seen.is_empty());
        Ok(())
    }
}
