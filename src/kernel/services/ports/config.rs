use crate::kernel::naming::SuffixStyle;
use crate::models::{DEFAULT_HISTORY_LIMIT, DEFAULT_ROOT_NAME};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub history_limit: usize,
    pub suffix_style: SuffixStyle,
    pub double_click_ms: u64,
    pub root_name: String,
    /// Treat every top-level entry as a peer root instead of keeping the
    /// single protected `root` folder.
    pub multi_root: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            suffix_style: SuffixStyle::Underscore,
            double_click_ms: 300,
            root_name: DEFAULT_ROOT_NAME.to_string(),
            multi_root: false,
        }
    }
}
