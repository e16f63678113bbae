use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 记事アイデア：生成一篇草稿所需的全部素材
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Idea {
    /// URL安全的唯一标识，同时作为草稿文件名
    pub slug: String,

    /// 文章标题
    pub title: String,

    /// 生成本文时交给模型的お题
    pub prompt: String,
}

impl Idea {
    /// slug是否可以安全用作文件名
    pub fn has_safe_slug(&self) -> bool {
        !self.slug.is_empty()
            && self
                .slug
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

/// 从JSON文件加载アイデア清单（只读输入）
pub fn load_ideas(path: &Path) -> Result<Vec<Idea>> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read idea file: {:?}", path))?;
    let ideas: Vec<Idea> =
        serde_json::from_str(&content).context("Failed to parse idea file")?;
    Ok(ideas)
}

// Include tests
#[cfg(test)]
mod tests;
