//! 结构历史（线性 Undo/Redo）
//!
//! 每次结构修改保存一份完整快照：
//! - 快照不包含 `expanded`（展开状态不进历史）
//! - cursor 指向当前状态；Undo 后再提交会丢弃 redo 分支
//! - 条目数有上限，超出时丢弃最旧的条目

use super::tree_node::{expansion_map, restore_expansion, strip_expansion, Forest, TreeNode};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// 默认最多保留的历史条目数
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

pub const GENESIS_LABEL: &str = "Initial state";

#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub snapshot: Forest,
    pub timestamp: DateTime<Utc>,
    pub label: String,
}

impl HistoryEntry {
    fn capture(forest: &[TreeNode], label: String) -> Self {
        Self {
            snapshot: strip_expansion(forest),
            timestamp: Utc::now(),
            label,
        }
    }
}

pub struct TreeHistory {
    entries: VecDeque<HistoryEntry>,
    /// Index of the entry matching the live tree. Always `< entries.len()`.
    cursor: usize,
    limit: usize,
}

impl TreeHistory {
    pub fn new(genesis: &[TreeNode]) -> Self {
        Self::with_limit(genesis, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(genesis: &[TreeNode], limit: usize) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(HistoryEntry::capture(genesis, GENESIS_LABEL.to_string()));
        Self {
            entries,
            cursor: 0,
            limit: limit.max(1),
        }
    }

    // ==================== 基础 API ====================

    /// Records `forest` as the newest state, discarding any redo branch.
    pub fn commit(&mut self, forest: &[TreeNode], label: impl Into<String>) {
        let entry = HistoryEntry::capture(forest, label.into());
        tracing::debug!(label = %entry.label, cursor = self.cursor, "history commit");

        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(entry);

        if self.entries.len() > self.limit {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(label = %evicted.label, "history entry evicted");
            }
        } else {
            self.cursor += 1;
        }
    }

    /// Steps back one entry. `live` supplies the expansion state to carry over.
    pub fn undo(&mut self, live: &[TreeNode]) -> Option<Forest> {
        if !self.can_undo() {
            return None;
        }
        let expanded = expansion_map(live);
        self.cursor -= 1;
        Some(restore_expansion(&self.entries[self.cursor].snapshot, &expanded))
    }

    pub fn redo(&mut self, live: &[TreeNode]) -> Option<Forest> {
        if !self.can_redo() {
            return None;
        }
        let expanded = expansion_map(live);
        self.cursor += 1;
        Some(restore_expansion(&self.entries[self.cursor].snapshot, &expanded))
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    // ==================== 查询 ====================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/tree_history.rs"]
mod tests;
