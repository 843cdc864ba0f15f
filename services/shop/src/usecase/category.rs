use crate::domain::repository::CategoryRepository;
use crate::domain::types::Category;
use crate::error::ShopServiceError;

pub struct ListCategoriesUseCase<R: CategoryRepository> {
    pub repo: R,
}

impl<R: CategoryRepository> ListCategoriesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Category>, ShopServiceError> {
        self.repo.list().await
    }
}
