use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// `{id: type}` map used by both the categories endpoint and the paginated
/// questions listing. Integer keys serialize as JSON object keys in id order.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.category_type.clone()))
        .collect()
}

/// Response for `GET /categories`
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponseDto {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub total_categories: usize,
}

impl CategoryListResponseDto {
    pub fn new(categories: &[Category]) -> Self {
        let map = category_map(categories);
        Self {
            success: true,
            total_categories: map.len(),
            categories: map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Category> {
        vec![
            Category {
                id: 2,
                category_type: "Art".to_string(),
            },
            Category {
                id: 1,
                category_type: "Science".to_string(),
            },
        ]
    }

    #[test]
    fn map_keys_serialize_as_strings_in_id_order() {
        let json = serde_json::to_value(category_map(&sample())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"1": "Science", "2": "Art"})
        );
    }

    #[test]
    fn list_response_shape() {
        let json = serde_json::to_value(CategoryListResponseDto::new(&sample())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total_categories"], 2);
        assert_eq!(json["categories"]["1"], "Science");
    }
}
