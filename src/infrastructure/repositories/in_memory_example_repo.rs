// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::example::Example;
use crate::domain::repositories::example_repository::{ExampleRepository, RepositoryError};
use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Debug)]
struct State {
    /// 按插入顺序保存
    examples: Vec<Example>,
    next_id: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            examples: Vec::new(),
            next_id: 1,
        }
    }
}

/// 内存示例仓库（用于测试）
///
/// 列表保持插入顺序，ID 从 1 开始递增
#[derive(Debug, Default)]
pub struct InMemoryExampleRepository {
    state: RwLock<State>,
}

impl InMemoryExampleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空数据并重置ID计数器
    pub fn clear(&self) {
        *self.state.write() = State::default();
    }
}

#[async_trait]
impl ExampleRepository for InMemoryExampleRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Example>, RepositoryError> {
        let state = self.state.read();
        Ok(state.examples.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Example>, RepositoryError> {
        Ok(self.state.read().examples.clone())
    }

    async fn save(&self, example: &Example) -> Result<Example, RepositoryError> {
        let mut state = self.state.write();

        if example.is_new() {
            let saved = example.clone().with_id(state.next_id);
            state.next_id += 1;
            state.examples.push(saved.clone());
            return Ok(saved);
        }

        let slot = state
            .examples
            .iter_mut()
            .find(|e| e.id() == example.id())
            .ok_or(RepositoryError::NotFound)?;
        *slot = example.clone();
        Ok(example.clone())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.state.read().examples.len() as u64)
    }
}
