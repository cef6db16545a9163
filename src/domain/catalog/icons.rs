//! Icon references used by navigation items, buckets, and quick actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of icons the console knows how to render.
///
/// Names coming from outside the catalog resolve through [`IconRef::from_name`],
/// which maps anything unrecognised to [`IconRef::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Home,
    Database,
    Queue,
    Pipeline,
    Table,
    Server,
    Rocket,
    Activity,
    Chart,
    FileText,
    Shield,
    Lock,
    Key,
    Hospital,
    Brain,
    Settings,
    Upload,
    Plug,
    Unknown,
}

impl IconRef {
    /// Returns all icons with a concrete rendering.
    pub fn known() -> &'static [IconRef] {
        &[
            IconRef::Home,
            IconRef::Database,
            IconRef::Queue,
            IconRef::Pipeline,
            IconRef::Table,
            IconRef::Server,
            IconRef::Rocket,
            IconRef::Activity,
            IconRef::Chart,
            IconRef::FileText,
            IconRef::Shield,
            IconRef::Lock,
            IconRef::Key,
            IconRef::Hospital,
            IconRef::Brain,
            IconRef::Settings,
            IconRef::Upload,
            IconRef::Plug,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconRef::Home => "home",
            IconRef::Database => "database",
            IconRef::Queue => "queue",
            IconRef::Pipeline => "pipeline",
            IconRef::Table => "table",
            IconRef::Server => "server",
            IconRef::Rocket => "rocket",
            IconRef::Activity => "activity",
            IconRef::Chart => "chart",
            IconRef::FileText => "file-text",
            IconRef::Shield => "shield",
            IconRef::Lock => "lock",
            IconRef::Key => "key",
            IconRef::Hospital => "hospital",
            IconRef::Brain => "brain",
            IconRef::Settings => "settings",
            IconRef::Upload => "upload",
            IconRef::Plug => "plug",
            IconRef::Unknown => "unknown",
        }
    }

    /// Resolves an icon name, falling back to `Unknown`.
    pub fn from_name(name: &str) -> IconRef {
        IconRef::known()
            .iter()
            .copied()
            .find(|icon| icon.name() == name)
            .unwrap_or(IconRef::Unknown)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
