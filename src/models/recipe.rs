use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn serializes_with_api_field_names() {
        let recipe = Recipe {
            id: "1".to_string(),
            user_id: "u1".to_string(),
            title: "Soup".to_string(),
            description: "Warm".to_string(),
            image_url: "https://img.example.com/soup.png".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "user_id": "u1",
                "title": "Soup",
                "description": "Warm",
                "image_url": "https://img.example.com/soup.png",
                "created_at": "2024-01-01T00:00:00Z",
            })
        );
    }
}
