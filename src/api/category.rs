//! Category Handlers
//!
//! CRUD for `/api/v1/category`. Reads are served through the response
//! cache; writes invalidate every key containing `"category"`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::handlers::{parse_id, AppState};
use crate::catalog::Category;
use crate::error::Result;
use crate::models::{CategoryRequest, CategoryResponse, MessageResponse};

/// Handler for POST /create-category
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse<Category>>)> {
    let category = state.catalog.write().await.create_category(&req.name)?;
    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse::new("New category created", category)),
    ))
}

/// Handler for PUT /update-category/:id
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse<Category>>> {
    let id = parse_id(&id)?;
    let category = state.catalog.write().await.update_category(id, &req.name)?;
    Ok(Json(CategoryResponse::new(
        "Category updated successfully",
        category,
    )))
}

/// Handler for GET /get-category
pub async fn list_categories(
    State(state): State<AppState>,
) -> Json<CategoryResponse<Vec<Category>>> {
    let categories = state.catalog.read().await.categories().to_vec();
    Json(CategoryResponse::new("All categories list", categories))
}

/// Handler for GET /single-category/:slug
pub async fn single_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryResponse<Category>>> {
    let category = state.catalog.read().await.category_by_slug(&slug)?.clone();
    Ok(Json(CategoryResponse::new(
        "Get single category successfully",
        category,
    )))
}

/// Handler for DELETE /delete-category/:id
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.catalog.write().await.delete_category(id)?;
    Ok(Json(MessageResponse::ok("Category deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use crate::catalog::CatalogStore;
    use crate::error::AppError;

    fn state() -> AppState {
        AppState::new(TtlCache::default(), CatalogStore::new())
    }

    fn named(name: &str) -> Json<CategoryRequest> {
        Json(CategoryRequest { name: name.into() })
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let state = state();

        let (status, created) = create_category(State(state.clone()), named("Shoes"))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.category.slug, "shoes");

        let listed = list_categories(State(state)).await;
        assert_eq!(listed.category.len(), 1);
    }

    #[tokio::test]
    async fn test_update_with_bad_id() {
        let result = update_category(State(state()), Path("123".into()), named("X")).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_single_and_delete() {
        let state = state();
        let (_, created) = create_category(State(state.clone()), named("Bags"))
            .await
            .unwrap();

        let single = single_category(State(state.clone()), Path("bags".into()))
            .await
            .unwrap();
        assert_eq!(single.category.id, created.category.id);

        delete_category(State(state.clone()), Path(created.category.id.to_string()))
            .await
            .unwrap();
        assert!(single_category(State(state), Path("bags".into())).await.is_err());
    }
}
