//! Navigation handlers - read models for the sidebar and module landing pages.

mod build_navigation;
mod module_experience;

pub use build_navigation::{
    BuildNavigationHandler, NavigationBucketView, NavigationItemView, NavigationView,
};
pub use module_experience::{ModuleExperience, ModuleExperienceHandler};
