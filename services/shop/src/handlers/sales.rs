use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ShopServiceError;
use crate::state::AppState;
use crate::usecase::sales::TotalSoldUseCase;

#[derive(Serialize)]
pub struct SalesTotal {
    pub total: i64,
}

#[derive(Serialize)]
pub struct SalesResponse {
    pub data: SalesTotal,
}

// ── GET /sales ───────────────────────────────────────────────────────────────

pub async fn get_sales(
    State(state): State<AppState>,
) -> Result<Json<SalesResponse>, ShopServiceError> {
    let usecase = TotalSoldUseCase {
        repo: state.sales_repo(),
    };
    let total = usecase.execute().await?;
    Ok(Json(SalesResponse {
        data: SalesTotal { total },
    }))
}
