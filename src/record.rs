use serde::Serialize;

/// One normalized restaurant listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub restaurant_name: String,
    pub rating: Option<f64>,
    pub num_reviews: Option<u64>,
    pub establishment_type: Option<String>,
    pub status: Option<Status>,
    pub is_partner: bool,
    pub cuisines_features: Vec<String>,
    pub description: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub reviews: Vec<Review>,
}

impl Restaurant {
    pub fn named(name: impl Into<String>) -> Self {
        Restaurant {
            restaurant_name: name.into(),
            rating: None,
            num_reviews: None,
            establishment_type: None,
            status: None,
            is_partner: false,
            cuisines_features: Vec::new(),
            description: None,
            phone_number: None,
            address: None,
            reviews: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "Open Now")]
    OpenNow,
    #[serde(rename = "Closed")]
    Closed,
}

impl Status {
    /// Exact-line match; "open now" or "Closed today" are not statuses.
    pub fn from_line(line: &str) -> Option<Self> {
        match line {
            "Open Now" => Some(Status::OpenNow),
            "Closed" => Some(Status::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Review {
    pub fn text_only(text: impl Into<String>) -> Self {
        Review {
            text: text.into(),
            rating: None,
            date: None,
        }
    }
}
