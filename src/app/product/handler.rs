//! 产品资源处理器
//!
//! 将 HTTP 请求翻译成对 [`ProductStore`] 的调用，并把结果或缺失映射为
//! 状态码。控制流单向：Handler → Store → PostgreSQL。

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};

use super::{
    model::{
        CreateProductRequest, MaxPriceQuery, NameMinPriceQuery, NameQuery, NewNameQuery, Product,
        UpdateProductRequest,
    },
    store::ProductStore,
};
use crate::core::error::CoreError;

/// 应用状态，启动时注入唯一的存储实现
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

/// 组装产品资源的全部路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/products", get(list_products).post(create_product))
        .route("/products/search/name", get(search_products_by_name))
        .route("/products/search/jpql", get(search_products_by_jpql))
        .route("/products/search/native", get(search_products_by_native))
        .route("/products/update-name/:id", put(update_product_name))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// POST /products
async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state
        .store
        .save(Product {
            id: None,
            name: payload.name,
            price: payload.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.store.find_all().await?;
    Ok(Json(products))
}

/// GET /products/:id
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, CoreError> {
    let product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound)?;

    Ok(Json(product))
}

/// PUT /products/:id
///
/// 只覆盖 name 和 price 两个字段，id 保持不变。
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<Product>, CoreError> {
    let mut existing = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound)?;

    existing.name = payload.name;
    existing.price = payload.price;

    let updated = state.store.save(existing).await?;
    Ok(Json(updated))
}

/// DELETE /products/:id
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, CoreError> {
    if !state.store.exists_by_id(id).await? {
        return Err(CoreError::NotFound);
    }

    state.store.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /products/search/name?name=laptop
async fn search_products_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state
        .store
        .find_by_name_containing_ignore_case(&query.name)
        .await?;

    Ok(Json(products))
}

/// GET /products/search/jpql?name=smart&minPrice=500
async fn search_products_by_jpql(
    State(state): State<AppState>,
    Query(query): Query<NameMinPriceQuery>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state
        .store
        .find_by_name_and_min_price(&query.name, query.min_price)
        .await?;

    Ok(Json(products))
}

/// GET /products/search/native?maxPrice=400
async fn search_products_by_native(
    State(state): State<AppState>,
    Query(query): Query<MaxPriceQuery>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.store.find_by_price_below(query.max_price).await?;
    Ok(Json(products))
}

/// PUT /products/update-name/:id?newName=NewNameValue
///
/// 单字段改名，不先加载整条记录，按受影响行数区分 200/404。
async fn update_product_name(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NewNameQuery>,
) -> Result<(StatusCode, String), CoreError> {
    let updated_rows = state.store.update_name(id, &query.new_name).await?;

    if updated_rows > 0 {
        Ok((
            StatusCode::OK,
            format!("Product name updated successfully for ID: {}", id),
        ))
    } else {
        Ok((
            StatusCode::NOT_FOUND,
            format!("Product not found for ID: {}", id),
        ))
    }
}

/// GET /
async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Product Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /products": "创建产品",
            "GET /products": "获取所有产品",
            "GET /products/:id": "按 id 获取产品",
            "PUT /products/:id": "更新产品的 name 和 price",
            "DELETE /products/:id": "删除产品",
            "GET /products/search/name": "按名称子串搜索（忽略大小写），参数: name",
            "GET /products/search/jpql": "按名称子串和最低价搜索，参数: name, minPrice",
            "GET /products/search/native": "按最高价搜索，参数: maxPrice",
            "PUT /products/update-name/:id": "单字段改名，参数: newName",
            "GET /health": "健康检查"
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET /health
async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    state.store.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
