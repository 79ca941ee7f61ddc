//! Process-wide, strongly typed keyed stores.
//!
//! A [`KeyValueStore`] maps every key of a closed key set ([`StoreKey`]) to a
//! sequence of items of one type. [`declare_storage!`] wraps a store in a
//! lazily created [`Singleton`], one per declared storage type, with
//! [`DataStorage`] giving typed `get` / `set` / `remove_element` access.
//!
//! Two storages ship with the crate: [`GroceriesListStorage`] and
//! [`WinningLotteryNumbersStorage`].
//!
//! Code that only needs the container should take a `&KeyValueStore` (or a
//! `&impl DataStorage`) instead of reaching for `shared()` itself, so tests
//! can hand it a fresh instance.

pub mod error;
pub mod grocery;
pub mod lottery;
pub mod singleton;
pub mod store;


pub use error::{StoreError, StoreResult};
pub use grocery::{Fruit, GroceriesListStorage, Grocery, GroceryItem, GroceryKey, Vegetable};
pub use lottery::{Draw, LotteryKey, WinningLotteryNumbersStorage};
pub use singleton::{DataStorage, Singleton};
pub use store::{KeyValueStore, StoreKey};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;
    pub use tracing;
}
