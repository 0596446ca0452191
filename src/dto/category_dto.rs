use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::category::Category;

/// Category id to display type. Serialized as a JSON object, so the ids
/// become string keys (`{"1": "Science"}`).
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = BTreeMap<String, String>)]
    pub categories: CategoryMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_ids_serialize_as_object_keys() {
        let map = category_map(vec![
            Category {
                id: 2,
                category_type: "Art".into(),
            },
            Category {
                id: 1,
                category_type: "Science".into(),
            },
        ]);
        let body = CategoriesResponse {
            success: true,
            categories: map,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"success": true, "categories": {"1": "Science", "2": "Art"}})
        );
    }
}
