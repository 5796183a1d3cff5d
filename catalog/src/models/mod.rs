use serde::{Deserialize, Serialize};

/// Stable key of a findable item.
pub type ItemId = String;

/// One findable object as configured for a level.
///
/// Identity is `id`; two items with the same id are the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub display_name: String,

    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Item {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
