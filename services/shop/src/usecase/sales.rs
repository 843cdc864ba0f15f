use crate::domain::repository::SalesRepository;
use crate::error::ShopServiceError;

/// Total units sold: sum of line-item quantities across finished orders.
pub struct TotalSoldUseCase<R: SalesRepository> {
    pub repo: R,
}

impl<R: SalesRepository> TotalSoldUseCase<R> {
    pub async fn execute(&self) -> Result<i64, ShopServiceError> {
        self.repo.total_finished_quantity().await
    }
}
