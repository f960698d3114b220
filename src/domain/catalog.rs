use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CityOption {
    pub city: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AmenityOption {
    pub amenities: String,
}

/// Static `/project_author/{type}` payload.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorInfo {
    pub data: &'static str,
}

pub const PROJECT_GROUP: &str = "Group 7";
pub const PROJECT_NAMES: &str = "Ting Zhu, Yanghe Huo, Yitian Hou, Ziye Liu";

pub fn project_author(kind: &str) -> Option<AuthorInfo> {
    match kind {
        "group" => Some(AuthorInfo {
            data: PROJECT_GROUP,
        }),
        "names" => Some(AuthorInfo {
            data: PROJECT_NAMES,
        }),
        _ => None,
    }
}

/// Cities shown as cards on the home page.
pub const FEATURED_CITIES: &[&str] = &[
    "New York City",
    "Seattle",
    "Los Angeles",
    "San Diego",
    "Las Vegas",
    "Chicago",
    "Hawaii",
    "Austin",
    "Denver",
    "San Francisco",
    "Portland",
    "Nashville",
];
