//! LLM客户端 - 提供统一的文章生成服务接口

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;

mod providers;

use providers::ProviderClient;

/// 文本生成服务的抽象。生成流程依赖该trait而非具体客户端，
/// 便于在测试中替换为离线实现
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl TextGenerator for LLMClient {
    /// 调用模型生成文章本文。失败直接上抛，不做重试
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent =
            self.client
                .create_agent(&self.config.llm.model, system_prompt, &self.config.llm);
        let body = agent.prompt(user_prompt).await?;
        Ok(body.trim().to_string())
    }
}
