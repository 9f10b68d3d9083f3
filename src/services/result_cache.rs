//! 结果缓存
//!
//! 以 (概念, 模式) 为键缓存完整的可视化结果包。
//! 单飞（single-flight）：同键并发请求共享一次计算，后到者在
//! 每键锁上等待；计算失败不写入缓存，等待者各自重新计算。

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::models::{ResolutionMode, VisualizationBundle};

/// 缓存键：同一概念在不同模式下是不同的条目
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub concept: String,
    pub mode: ResolutionMode,
}

impl CacheKey {
    pub fn new(concept: &str, mode: ResolutionMode) -> Self {
        Self {
            concept: concept.to_string(),
            mode,
        }
    }
}

type Slot = Arc<Mutex<Option<Arc<VisualizationBundle>>>>;

pub struct ResultCache {
    enabled: bool,
    max_entries: usize,
    slots: DashMap<CacheKey, Slot>,
}

impl ResultCache {
    pub fn new(enabled: bool, max_entries: usize) -> Self {
        Self {
            enabled,
            max_entries,
            slots: DashMap::new(),
        }
    }

    /// 取缓存值，未命中时用 `compute` 计算并写入
    ///
    /// 返回结果包和是否命中缓存。读取端校验已存条目，
    /// 校验失败返回 `CacheCorrupted` 而不是把坏数据交给调用方。
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: CacheKey,
        compute: F,
    ) -> Result<(Arc<VisualizationBundle>, bool)>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<VisualizationBundle>>,
    {
        if !self.enabled {
            let bundle = compute().await?;
            return Ok((Arc::new(bundle), false));
        }

        // 容量是软上限：检查与插入不是一个原子操作，并发首见键可能让
        // 条目数短暂越过上限。满载时新键直接计算，不再扩张缓存
        if !self.slots.contains_key(&key)
            && self.max_entries > 0
            && self.slots.len() >= self.max_entries
        {
            warn!("结果缓存已满（{} 条），本次请求不缓存", self.max_entries);
            let bundle = compute().await?;
            return Ok((Arc::new(bundle), false));
        }

        let slot: Slot = self
            .slots
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone();

        // 槽位一旦建立就不再从映射中移除：等待者持有的 Arc 与映射中的
        // 必须始终是同一个槽位，否则等待者写入的结果会丢失，且恢复期间
        // 会出现并行计算。失败与损坏都只清值，不摘槽。
        let mut guard = slot.lock().await;
        if let Some(bundle) = guard.clone() {
            if let Err(reason) = bundle.validate() {
                *guard = None;
                return Err(AppError::CacheCorrupted(reason));
            }
            debug!("结果缓存命中");
            return Ok((bundle, true));
        }

        match compute().await {
            Ok(bundle) => {
                let bundle = Arc::new(bundle);
                *guard = Some(Arc::clone(&bundle));
                Ok((bundle, false))
            }
            // 失败不写入值，下一个拿到锁的调用者重新计算
            Err(e) => Err(e),
        }
    }

    /// 当前缓存条目数（含正在计算的槽位）
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 清空缓存
    pub fn clear(&self) {
        self.slots.clear();
    }
}
