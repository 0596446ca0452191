use crate::database::DynStore;
use crate::dto::category_dto::{category_map, CategoryMap};
use crate::error::{Error, Result};
use crate::models::category::Category;

#[derive(Clone)]
pub struct CategoryService {
    store: DynStore,
}

impl CategoryService {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Every category keyed by id. Unlike [`CategoryService::list`] an empty
    /// store is not an error here.
    pub async fn map(&self) -> Result<CategoryMap> {
        Ok(category_map(self.store.all_categories().await?))
    }

    pub async fn list(&self) -> Result<CategoryMap> {
        let categories = self.map().await?;
        if categories.is_empty() {
            return Err(Error::NotFound("no categories".to_string()));
        }
        Ok(categories)
    }

    /// Looks up a category for the per-category question listing. A missing
    /// category is reported as a bad request, which is what the front end
    /// expects.
    pub async fn require(&self, id: i32) -> Result<Category> {
        self.store
            .category_by_id(id)
            .await?
            .ok_or_else(|| Error::BadRequest(format!("category {} does not exist", id)))
    }
}
