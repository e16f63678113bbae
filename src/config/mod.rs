use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::i18n::PostLanguage;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// 草稿目录
    pub posts_dir: PathBuf,

    /// 记事アイデア一覧（JSON）
    pub idea_file: PathBuf,

    /// 内部工作目录路径 (.autopress)
    pub internal_path: PathBuf,

    /// 生成文章的语言
    pub lang: PostLanguage,

    /// 生成草稿front-matter中携带的tags
    pub default_tags: Vec<String>,

    /// 是否启用详细日志
    pub verbose: bool,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// WordPress投稿配置
    pub wordpress: WordPressConfig,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 用于文章生成的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,
}

/// WordPress投稿配置（站点地址与凭证走环境变量，见[`WpCredentials`]）
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WordPressConfig {
    /// 投稿时附带的tag id列表
    pub tag_ids: Vec<u64>,

    /// 关键词未命中时的兜底分类id
    pub default_category_id: u64,

    /// アイキャッチ画像（特色图片）候选media id
    pub media_ids: Vec<u64>,

    /// slug首个关键词 → 分类id
    pub category_map: HashMap<String, u64>,
}

/// WordPress站点连接凭证，仅从环境变量读取
#[derive(Debug, Clone)]
pub struct WpCredentials {
    pub base_url: String,
    pub user: String,
    pub app_password: String,
}

impl WpCredentials {
    /// 从环境变量加载，缺一不可
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("WP_URL").ok(),
            std::env::var("WP_USER").ok(),
            std::env::var("WP_APP_PASS").ok(),
        )
    }

    fn from_vars(
        url: Option<String>,
        user: Option<String>,
        app_password: Option<String>,
    ) -> Result<Self> {
        match (url, user, app_password) {
            (Some(base_url), Some(user), Some(app_password))
                if !base_url.is_empty() && !user.is_empty() && !app_password.is_empty() =>
            {
                Ok(Self {
                    // 末尾のスラッシュはREST路径拼接时多余，去掉
                    base_url: base_url.trim_end_matches('/').to_string(),
                    user,
                    app_password,
                })
            }
            _ => bail!("WP_URL / WP_USER / WP_APP_PASS 未设置"),
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// media pool持久化文件路径
    pub fn media_pool_path(&self) -> PathBuf {
        self.internal_path.join("media_pool.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("posts"),
            idea_file: PathBuf::from("data/ideas.json"),
            internal_path: PathBuf::from(".autopress"),
            lang: PostLanguage::default(),
            default_tags: vec![],
            llm: LLMConfig::default(),
            wordpress: WordPressConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("AUTOPRESS_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gpt-4o-mini"),
            max_tokens: 4096,
            temperature: 0.8,
        }
    }
}

impl Default for WordPressConfig {
    fn default() -> Self {
        Self {
            tag_ids: vec![],
            category_map: HashMap::from([
                ("communication".to_string(), 88),
                ("momentum".to_string(), 89),
                ("ritual".to_string(), 87),
                ("vision".to_string(), 86),
            ]),
            default_category_id: 86,
            media_ids: vec![1942, 1943, 1944, 1945],
        }
    }
}
