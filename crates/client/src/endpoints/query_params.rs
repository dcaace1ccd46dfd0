//! Query parameter building for endpoint modules.
//!
//! ```ignore
//! let mut params: QueryParams = vec![];
//! query_params! { params =>
//!     "entitySelector" => required_clone options.entity_selector,
//!     "from" => ref options.from,
//!     "pageSize" => options.page_size,
//!     "fields" => join options.fields,
//!     "schemaIds" => join_opt options.schema_ids,
//! }
//! ```

/// Push `(String, String)` pairs onto a vector, skipping absent values.
///
/// # Patterns
///
/// - `key => expr`: `Option<T: Display>`, included if `Some`
/// - `key => ref expr`: `Option<String>`, included if `Some`
/// - `key => join expr`: `Vec<String>`, comma-joined if not empty
/// - `key => join_opt expr`: `Option<Vec<String>>`, comma-joined if `Some` and not empty
/// - `key => required expr`: always included via `Display`
/// - `key => required_clone expr`: always included, `String` cloned
#[macro_export]
macro_rules! query_params {
    ($vec:ident =>) => {};

    ($vec:ident => $key:literal => required_clone $val:expr, $($rest:tt)*) => {
        $vec.push(($key.to_string(), $val.clone()));
        $crate::query_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        $vec.push(($key.to_string(), $val.to_string()));
        $crate::query_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => join $val:expr, $($rest:tt)*) => {
        if !$val.is_empty() {
            $vec.push(($key.to_string(), $val.join(",")));
        }
        $crate::query_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => join_opt $val:expr, $($rest:tt)*) => {
        if let Some(ref v) = $val {
            if !v.is_empty() {
                $vec.push(($key.to_string(), v.join(",")));
            }
        }
        $crate::query_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => ref $val:expr, $($rest:tt)*) => {
        if let Some(ref v) = $val {
            $vec.push(($key.to_string(), v.clone()));
        }
        $crate::query_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => $val:expr, $($rest:tt)*) => {
        if let Some(v) = $val {
            $vec.push(($key.to_string(), v.to_string()));
        }
        $crate::query_params!($vec => $($rest)*);
    };
}
