use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::i18n::PostLanguage;

/// 草稿front-matter。发布过的草稿会原地写回`submitted: true`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct FrontMatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub lang: PostLanguage,

    /// 投稿済みマーカー。缺省视为未投稿
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<bool>,
}

/// 本地Markdown草稿：front-matter + 本文
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub path: PathBuf,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Draft {
    /// 从Markdown文件加载草稿
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read draft: {:?}", path))?;
        let (front_matter, body) = parse_front_matter(&content)
            .context(format!("Malformed front-matter in {:?}", path))?;
        Ok(Self {
            path: path.to_path_buf(),
            front_matter,
            body,
        })
    }

    /// slug缺省时退回文件名
    pub fn slug(&self) -> String {
        match &self.front_matter.slug {
            Some(slug) if !slug.is_empty() => slug.clone(),
            _ => self
                .path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        }
    }

    /// title缺省时退回slug
    pub fn title(&self) -> String {
        match &self.front_matter.title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => self.slug(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.front_matter.submitted.unwrap_or(false)
    }

    /// 渲染为Markdown文件内容
    pub fn render(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.front_matter)
            .context("Failed to serialize front-matter")?;
        Ok(format!("---\n{}---\n\n{}\n", yaml, self.body.trim_end()))
    }

    /// 写回磁盘（原地覆盖）
    pub fn save(&self) -> Result<()> {
        let content = self.render()?;
        std::fs::write(&self.path, content)
            .context(format!("Failed to write draft: {:?}", self.path))?;
        Ok(())
    }
}

/// 拆出front-matter块与本文。
/// 改行コードはLFに正規化してから処理する（Windowsで手編集された草稿対策）
pub fn parse_front_matter(content: &str) -> Result<(FrontMatter, String)> {
    let content = content.replace("\r\n", "\n");
    let rest = content
        .strip_prefix("---\n")
        .ok_or_else(|| anyhow!("missing front-matter opening fence"))?;

    let (yaml, body) = if let Some(end) = rest.find("\n---\n") {
        (&rest[..end], &rest[end + 5..])
    } else if let Some(stripped) = rest.strip_suffix("\n---") {
        (stripped, "")
    } else {
        return Err(anyhow!("missing front-matter closing fence"));
    };

    let front_matter: FrontMatter =
        serde_yaml::from_str(yaml).context("Failed to parse front-matter")?;
    Ok((front_matter, body.trim_start_matches('\n').to_string()))
}

/// 按修改时间倒序扫描目录，返回第一篇没有submitted标记的草稿。
/// 最新优先——新生成的草稿先于历史积压被发布
pub fn find_unsubmitted(dir: &Path) -> Result<Option<Draft>> {
    let mut candidates: Vec<(PathBuf, SystemTime)> = Vec::new();

    for entry in
        std::fs::read_dir(dir).context(format!("Failed to read posts dir: {:?}", dir))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        candidates.push((path, modified));
    }

    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    for (path, _) in candidates {
        let draft = Draft::load(&path)?;
        if !draft.is_submitted() {
            return Ok(Some(draft));
        }
    }
    Ok(None)
}

/// 投稿状态存取的抽象。把“哪里存草稿”与“什么已经发布过”解耦，
/// 也让发布流程可以在测试里换成内存实现
pub trait StatusStore {
    fn is_submitted(&self, slug: &str) -> Result<bool>;
    fn mark_submitted(&mut self, slug: &str) -> Result<()>;
}

/// 默认实现：状态就存在草稿文件的front-matter里
pub struct FrontMatterStatusStore {
    posts_dir: PathBuf,
}

impl FrontMatterStatusStore {
    pub fn new(posts_dir: PathBuf) -> Self {
        Self { posts_dir }
    }

    /// slugから草稿ファイルを解決する。`<slug>.md`が無い場合は
    /// front-matterのslugがファイル名と食い違う草稿をディレクトリ走査で探す
    fn draft_path(&self, slug: &str) -> Result<PathBuf> {
        let direct = self.posts_dir.join(format!("{}.md", slug));
        if direct.exists() {
            return Ok(direct);
        }

        for entry in std::fs::read_dir(&self.posts_dir)
            .context(format!("Failed to read posts dir: {:?}", self.posts_dir))?
        {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            if Draft::load(&path)?.slug() == slug {
                return Ok(path);
            }
        }
        Err(anyhow!("no draft found for slug: {}", slug))
    }
}

impl StatusStore for FrontMatterStatusStore {
    fn is_submitted(&self, slug: &str) -> Result<bool> {
        let draft = Draft::load(&self.draft_path(slug)?)?;
        Ok(draft.is_submitted())
    }

    fn mark_submitted(&mut self, slug: &str) -> Result<()> {
        let mut draft = Draft::load(&self.draft_path(slug)?)?;
        draft.front_matter.submitted = Some(true);
        draft.save()
    }
}
