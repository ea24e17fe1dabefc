//! Heap-backed types resolved from `std` or `alloc` depending on the `std` feature.

#[cfg(feature = "std")]
pub type Cow<'a, B> = std::borrow::Cow<'a, B>;
#[cfg(not(feature = "std"))]
pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

/// Ordered map used for error metadata.
#[cfg(feature = "std")]
pub type BTreeMap<K, V> = std::collections::BTreeMap<K, V>;
#[cfg(not(feature = "std"))]
pub type BTreeMap<K, V> = alloc::collections::BTreeMap<K, V>;

#[cfg(feature = "std")]
pub use std::string::ToString;
#[cfg(not(feature = "std"))]
pub use alloc::string::ToString;
