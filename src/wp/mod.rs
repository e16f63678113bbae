//! WordPress REST API客户端。只建模三种调用：
//! slug存在性检查、新规投稿、アイキャッチ（特色图片）绑定

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::WpCredentials;

#[derive(Debug, Error)]
pub enum WpError {
    #[error("WordPress request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("WordPress returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// 新规投稿payload
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    /// 渲染好的HTML本文
    pub content: String,
    pub status: String,
    pub categories: Vec<u64>,
    pub tags: Vec<u64>,
    pub lang: String,
    /// UTC时间戳（ISO-8601）
    pub date: String,
}

/// 创建成功后WordPress返回的投稿信息
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CreatedPost {
    pub id: u64,
    pub link: String,
}

/// 远端站点的抽象，发布流程依赖该trait以便测试时替换为mock
#[async_trait]
pub trait RemoteSite: Send + Sync {
    /// 同slug的投稿是否已存在（任意status）
    async fn post_exists(&self, slug: &str) -> Result<bool, WpError>;

    /// 创建投稿，返回新投稿的id与permalink。非2xx视为失败
    async fn create_post(&self, post: &NewPost) -> Result<CreatedPost, WpError>;

    /// 给投稿绑定featured media。调用方决定失败是否致命
    async fn attach_media(&self, post_id: u64, media_id: u64) -> Result<(), WpError>;
}

/// 基于reqwest的WordPress客户端，Basic认证（application password）
pub struct WordPressClient {
    http: reqwest::Client,
    credentials: WpCredentials,
}

impl WordPressClient {
    pub fn new(credentials: WpCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/wp-json/wp/v2/posts", self.credentials.base_url)
    }
}

#[async_trait]
impl RemoteSite for WordPressClient {
    async fn post_exists(&self, slug: &str) -> Result<bool, WpError> {
        let resp = self
            .http
            .get(self.posts_url())
            .basic_auth(&self.credentials.user, Some(&self.credentials.app_password))
            .query(&[("slug", slug), ("status", "any")])
            .send()
            .await?;

        // 查询失败时视为「不存在」，与既存运用保持一致
        if !resp.status().is_success() {
            return Ok(false);
        }
        let posts: Vec<serde_json::Value> = resp.json().await?;
        Ok(!posts.is_empty())
    }

    async fn create_post(&self, post: &NewPost) -> Result<CreatedPost, WpError> {
        let resp = self
            .http
            .post(self.posts_url())
            .basic_auth(&self.credentials.user, Some(&self.credentials.app_password))
            .json(post)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WpError::Status { status, body });
        }
        Ok(resp.json().await?)
    }

    async fn attach_media(&self, post_id: u64, media_id: u64) -> Result<(), WpError> {
        let resp = self
            .http
            .post(format!("{}/{}", self.posts_url(), post_id))
            .basic_auth(&self.credentials.user, Some(&self.credentials.app_password))
            .json(&serde_json::json!({ "featured_media": media_id }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WpError::Status { status, body });
        }
        Ok(())
    }
}
