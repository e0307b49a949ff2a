//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories, the macro engine, and the menu provider.

pub mod menu;
pub mod profile;
pub mod user;

pub use menu::MenuService;
pub use profile::ProfileService;
pub use user::UserService;
