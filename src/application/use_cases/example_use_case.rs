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

use crate::{
    application::dto::example_request::{CreateExampleDto, RenameExampleDto},
    domain::{
        models::example::{Example, ValidationError},
        repositories::example_repository::{ExampleRepository, RepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

#[derive(Error, Debug)]
pub enum ExampleUseCaseError {
    #[error("Validation failed: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Example not found")]
    NotFound,
}

pub struct ExampleUseCase<R> {
    repository: Arc<R>,
}

impl<R> ExampleUseCase<R>
where
    R: ExampleRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 创建示例
    ///
    /// 以 `id = 0` 和当前时间构造实体，交给仓库分配ID并持久化
    pub async fn create_example(
        &self,
        dto: CreateExampleDto,
    ) -> Result<Example, ExampleUseCaseError> {
        dto.validate()
            .map_err(|e| ExampleUseCaseError::InvalidRequest(e.to_string()))?;

        let example = Example::new(dto.name, dto.description)?;
        let saved = self.repository.save(&example).await?;

        debug!(id = saved.id(), "Example created");
        Ok(saved)
    }

    /// 获取示例，不存在时返回 `None`
    pub async fn get_example(&self, id: i32) -> Result<Option<Example>, ExampleUseCaseError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// 示例列表
    pub async fn list_examples(&self) -> Result<Vec<Example>, ExampleUseCaseError> {
        Ok(self.repository.find_all().await?)
    }

    /// 修改示例名称并保存
    pub async fn rename_example(
        &self,
        id: i32,
        dto: RenameExampleDto,
    ) -> Result<Example, ExampleUseCaseError> {
        dto.validate()
            .map_err(|e| ExampleUseCaseError::InvalidRequest(e.to_string()))?;

        let mut example = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ExampleUseCaseError::NotFound)?;

        example.rename(dto.name)?;

        match self.repository.save(&example).await {
            Ok(saved) => Ok(saved),
            Err(RepositoryError::NotFound) => Err(ExampleUseCaseError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
