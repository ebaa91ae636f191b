use std::fmt::Debug;

/// Trait for rendering a lookup key into the string key space of a cache
/// region.
///
/// Every resolver path (single, batch, bulk-all) addresses the shared region
/// through the same rendering, so a value cached by one path is a hit for the
/// others. Implementations must be pure and stable: the same key must always
/// render to the same string.
///
/// Ready implementations exist for `String`, `&str`, the integer primitives,
/// `bool`, and `char`. For custom key types, either implement this trait
/// directly or opt into the `Debug`-based default via [`DefaultCacheKey`].
///
/// # Examples
///
/// ```
/// use cachalote_core::CacheKey;
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// struct ProductId {
///     warehouse: u16,
///     sku: u32,
/// }
///
/// impl CacheKey for ProductId {
///     fn cache_key(&self) -> String {
///         format!("{}:{}", self.warehouse, self.sku)
///     }
/// }
///
/// let id = ProductId { warehouse: 3, sku: 1024 };
/// assert_eq!(id.cache_key(), "3:1024");
/// ```
pub trait CacheKey {
    /// Renders this key as the region-scoped string key.
    fn cache_key(&self) -> String;
}

/// Opt-in marker that derives [`CacheKey`] from the type's `Debug`
/// representation.
///
/// Convenient for quick prototyping, but note that the rendering is only as
/// stable as the `Debug` output. Implement [`CacheKey`] directly when the key
/// format matters (it becomes the persistent region key).
///
/// Do not implement both traits for the same type - the blanket impl below
/// would conflict with a direct one.
///
/// # Examples
///
/// ```
/// use cachalote_core::{CacheKey, DefaultCacheKey};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct OrderId(u64);
///
/// impl DefaultCacheKey for OrderId {}
///
/// assert_eq!(OrderId(7).cache_key(), "OrderId(7)");
/// ```
pub trait DefaultCacheKey: Debug {}

impl<T: DefaultCacheKey> CacheKey for T {
    fn cache_key(&self) -> String {
        format!("{:?}", self)
    }
}

impl CacheKey for String {
    fn cache_key(&self) -> String {
        self.clone()
    }
}

impl CacheKey for str {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl CacheKey for &str {
    fn cache_key(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_cache_key_via_to_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CacheKey for $ty {
                fn cache_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_cache_key_via_to_string!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);
