//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 产品实体，对应 products 表的一行
///
/// `id` 由数据库在首次插入时分配，插入前为 `None`，持久化后恒为 `Some`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
}

/// 创建产品请求，客户端多传的 id 字段会被忽略
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

/// 更新产品请求，整体覆盖 name 和 price 两个字段
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
}

/// GET /products/search/name 查询参数
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// GET /products/search/jpql 查询参数
#[derive(Debug, Deserialize)]
pub struct NameMinPriceQuery {
    pub name: String,
    #[serde(rename = "minPrice")]
    pub min_price: f64,
}

/// GET /products/search/native 查询参数
#[derive(Debug, Deserialize)]
pub struct MaxPriceQuery {
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
}

/// PUT /products/update-name/:id 查询参数
#[derive(Debug, Deserialize)]
pub struct NewNameQuery {
    #[serde(rename = "newName")]
    pub new_name: String,
}
