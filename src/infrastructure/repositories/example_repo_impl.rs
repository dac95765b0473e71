// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::example::Example;
use crate::domain::repositories::example_repository::{ExampleRepository, RepositoryError};
use crate::infrastructure::database::entities::example as example_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 示例仓库实现（关系型数据库）
pub struct ExampleRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ExampleRepositoryImpl {
    /// 创建新的示例仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的示例仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert(&self, example: &Example) -> Result<Example, RepositoryError> {
        let model = example_entity::ActiveModel {
            id: NotSet,
            name: Set(example.name().to_string()),
            description: Set(example.description().map(str::to_string)),
            created_at: Set(example.created_at()),
            updated_at: Set(example.updated_at()),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        to_domain(inserted)
    }

    async fn update(&self, example: &Example) -> Result<Example, RepositoryError> {
        let mut model: example_entity::ActiveModel =
            example_entity::Entity::find_by_id(example.id())
                .one(self.db.as_ref())
                .await?
                .ok_or(RepositoryError::NotFound)?
                .into();

        model.name = Set(example.name().to_string());
        model.description = Set(example.description().map(str::to_string));
        model.updated_at = Set(example.updated_at());

        let updated = model.update(self.db.as_ref()).await?;
        to_domain(updated)
    }
}

fn to_domain(m: example_entity::Model) -> Result<Example, RepositoryError> {
    let id = m.id;
    Example::restore(m.id, m.name, m.description, m.created_at, m.updated_at)
        .map_err(|source| RepositoryError::Corrupted { id, source })
}

#[async_trait]
impl ExampleRepository for ExampleRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Example>, RepositoryError> {
        let model = example_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        model.map(to_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Example>, RepositoryError> {
        let models = example_entity::Entity::find()
            .order_by_asc(example_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(to_domain).collect()
    }

    async fn save(&self, example: &Example) -> Result<Example, RepositoryError> {
        if example.is_new() {
            self.insert(example).await
        } else {
            self.update(example).await
        }
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = example_entity::Entity::find()
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
