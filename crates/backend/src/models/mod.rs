//! Wire types for the mocked storefront contract.
//!
//! These are the JSON shapes the front-end under test sends and receives.
//! Field names follow the original contract (camelCase where it uses it).

pub mod franchise;
pub mod menu;
pub mod order;
pub mod user;

pub use franchise::{AdminRef, CreateFranchise, CreateStore, Franchise, FranchiseAdmin, Store};
pub use menu::MenuItem;
pub use order::{Order, OrderDraft, OrderItem, Receipt};
pub use user::{User, UserUpdate};
