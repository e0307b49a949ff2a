//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod menu;
pub mod profile;
pub mod user;

pub use menu::{DiningHallRecord, MenuItemFilter, MenuItemRecord, MenuRepository};
pub use profile::{NewProfile, ProfileRecord, ProfileRepository, UpdateProfile};
pub use user::{UserRecord, UserRepository};
