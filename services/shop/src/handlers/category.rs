use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ShopServiceError;
use crate::state::AppState;
use crate::usecase::category::ListCategoriesUseCase;

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub title: String,
}

// ── GET /categories ──────────────────────────────────────────────────────────

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ShopServiceError> {
    let usecase = ListCategoriesUseCase {
        repo: state.category_repo(),
    };
    let categories = usecase.execute().await?;
    Ok(Json(
        categories
            .into_iter()
            .map(|category| CategoryResponse {
                id: category.id.to_string(),
                title: category.title,
            })
            .collect(),
    ))
}
