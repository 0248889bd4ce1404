use serde::{Deserialize, Serialize};

/// Featured community author shown in the Community sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub name: String,
    /// Initials rendered in place of an avatar image
    pub avatar: String,
    pub snippets: u32,
    pub followers: u32,
    pub total_likes: u32,
    pub specialties: Vec<String>,
}

impl Developer {
    pub fn specialties_label(&self) -> String {
        self.specialties.join(" · ")
    }
}
