//! 产品存储层
//!
//! 以 trait 形式暴露 products 集合的持久化能力，唯一的具体实现基于
//! PostgreSQL 连接池。事务语义完全委托给数据库，只有 update_name
//! 使用显式事务边界。

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::model::Product;

/// 产品存储接口
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 保存产品：无 id 时插入并分配主键，有 id 时整行替换。
    /// 对同一条完整记录重复调用是幂等的。
    async fn save(&self, product: Product) -> Result<Product, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// 删除指定 id 的行，id 不存在时静默返回
    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error>;

    /// name 包含子串，忽略大小写
    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, sqlx::Error>;

    /// name 包含子串（区分大小写）且 price 严格大于 min_price
    async fn find_by_name_and_min_price(
        &self,
        name: &str,
        min_price: f64,
    ) -> Result<Vec<Product>, sqlx::Error>;

    /// price 严格小于 max_price
    async fn find_by_price_below(&self, max_price: f64) -> Result<Vec<Product>, sqlx::Error>;

    /// 只更新指定 id 行的 name 字段，返回受影响行数，id 不存在时为 0
    async fn update_name(&self, id: i64, new_name: &str) -> Result<u64, sqlx::Error>;

    /// 健康检查探活
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// 基于 PostgreSQL 的产品存储
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn save(&self, product: Product) -> Result<Product, sqlx::Error> {
        match product.id {
            Some(id) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    INSERT INTO products (id, name, price)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, price = EXCLUDED.price
                    RETURNING id, name, price
                    "#,
                )
                .bind(id)
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
                )
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await
            }
        }
    }

    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE name ILIKE $1")
            .bind(format!("%{}%", fragment))
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_name_and_min_price(
        &self,
        name: &str,
        min_price: f64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        // LIKE 区分大小写，与忽略大小写的 name 搜索是两条不同的查询路径
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price FROM products WHERE name LIKE $1 AND price > $2",
        )
        .bind(format!("%{}%", name))
        .bind(min_price)
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_price_below(&self, max_price: f64) -> Result<Vec<Product>, sqlx::Error> {
        // 原始行提取路径，列值手工取出，不走 query_as 映射
        let rows = sqlx::query("SELECT id, name, price FROM products WHERE price < $1")
            .bind(max_price)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Product {
                id: row.get("id"),
                name: row.get("name"),
                price: row.get("price"),
            })
            .collect())
    }

    async fn update_name(&self, id: i64, new_name: &str) -> Result<u64, sqlx::Error> {
        // 显式事务边界：提交成功才算改名完成，出错时未提交的事务随句柄回滚
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE products SET name = $1 WHERE id = $2")
            .bind(new_name)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
