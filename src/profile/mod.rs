//! User profile data model and session storage.

pub mod store;
pub mod types;

pub use store::ProfileStore;
pub use types::{
    ActivityLevel, DietPreference, FitnessGoal, Gender, Profile, ProfileError,
};
