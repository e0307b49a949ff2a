//! Menu data sourcing
//!
//! Menu data flows through the [`MenuProvider`] strategy trait so the
//! catalog source can be swapped (seeded data today, live scrapers or
//! third-party APIs later) without touching the seeding or query layers.
//! The active provider is injected through `AppState`, never accessed as a
//! process-wide singleton.

mod provider;
mod seeded;

pub use provider::{DiningHallData, MealPeriod, MenuItemData, MenuProvider};
pub use seeded::SeededMenuProvider;
