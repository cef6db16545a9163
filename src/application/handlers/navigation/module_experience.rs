//! ModuleExperience - Query handler for a module's personalized landing content.

use serde::Serialize;

use crate::domain::catalog::{module_features, FeatureId, QuickAction};
use crate::domain::personalization::{
    personalized_welcome, priority_features, quick_actions, ranked_priority_features,
    should_show_feature,
};
use crate::domain::profile::AttributeProfile;

/// Landing content of one module for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleExperience {
    pub module: String,
    pub welcome: String,
    pub quick_actions: Vec<QuickAction>,
    /// Priority features as an unordered set, listed alphabetically.
    pub priority_features: Vec<FeatureId>,
    /// The same features, task first, then job, then role.
    pub ranked_features: Vec<FeatureId>,
    /// Catalogued features of the module that are shown.
    pub visible_features: Vec<FeatureId>,
}

/// Handler for building a module's landing content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleExperienceHandler;

impl ModuleExperienceHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, module: &str, profile: Option<&AttributeProfile>) -> ModuleExperience {
        let mut priority: Vec<FeatureId> = priority_features(module, profile).into_iter().collect();
        priority.sort_unstable();

        let visible_features = module_features(module)
            .map(|map| map.all_features())
            .unwrap_or_default()
            .into_iter()
            .filter(|feature| should_show_feature(module, feature, profile))
            .collect();

        ModuleExperience {
            module: module.to_string(),
            welcome: personalized_welcome(profile),
            quick_actions: quick_actions(profile),
            priority_features: priority,
            ranked_features: ranked_priority_features(module, profile),
            visible_features,
        }
    }
}
