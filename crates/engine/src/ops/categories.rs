use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::{
    Category, CategoryPurpose, Page, ResultEngine, categories::DESCRIPTION_MAX_LEN, store::Store,
    util::normalize_text,
};

use super::{Engine, with_tx};

#[derive(Clone, Debug)]
pub struct CategoryInput {
    pub description: String,
    pub purpose: CategoryPurpose,
}

impl Engine {
    pub async fn create_category(&self, input: CategoryInput) -> ResultEngine<Category> {
        let description =
            normalize_text(&input.description, "description", 1, DESCRIPTION_MAX_LEN)?;
        with_tx!(self, |db_tx| {
            let category = Category::new(description, input.purpose);
            Store::new(&db_tx).insert_category(&category).await?;
            tracing::debug!(
                category_id = %category.id,
                purpose = category.purpose.as_str(),
                "category created"
            );
            Ok(category)
        })
    }

    pub async fn category(&self, category_id: Uuid) -> ResultEngine<Category> {
        Store::new(&self.database)
            .require_category(category_id)
            .await
    }

    /// Categories ordered by description.
    pub async fn categories(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> ResultEngine<Page<Category>> {
        let request = self.paging.request(page, page_size)?;
        Store::new(&self.database).categories_page(request).await
    }

    /// Change the description and purpose of a category.
    ///
    /// Transactions already tagged with the category are not re-validated
    /// against the new purpose.
    pub async fn update_category(
        &self,
        category_id: Uuid,
        input: CategoryInput,
    ) -> ResultEngine<Category> {
        let description =
            normalize_text(&input.description, "description", 1, DESCRIPTION_MAX_LEN)?;
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            let mut category = store.require_category(category_id).await?;
            category.description = description;
            category.purpose = input.purpose;
            store.update_category(&category).await?;
            tracing::debug!(%category_id, "category updated");
            Ok(category)
        })
    }
}
