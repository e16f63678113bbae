#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::draft::Draft;
    use crate::generator::run;
    use crate::llm::TextGenerator;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// 记录调用过的slug的离线生成器
    struct StubGenerator {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl StubGenerator {
        fn new() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String> {
            self.calls.lock().unwrap().push(user_prompt.to_string());
            if self.fail {
                return Err(anyhow!("generation service unavailable"));
            }
            Ok("## 見出し\n\n生成された本文。".to_string())
        }
    }

    fn test_config(temp_dir: &TempDir) -> Config {
        let idea_file = temp_dir.path().join("ideas.json");
        std::fs::write(
            &idea_file,
            r#"[
                {"slug": "ritual-weekly-checkin", "title": "週次チェックイン", "prompt": "習慣"},
                {"slug": "vision-mapping", "title": "ビジョンマップ", "prompt": "可視化"}
            ]"#,
        )
        .unwrap();

        Config {
            posts_dir: temp_dir.path().join("posts"),
            idea_file,
            internal_path: temp_dir.path().join(".autopress"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_run_generates_one_draft_per_idea() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let generator = StubGenerator::new();

        let report = run(&config, &generator).await.unwrap();
        assert_eq!(report.generated, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(generator.call_count(), 2);

        let draft =
            Draft::load(&config.posts_dir.join("ritual-weekly-checkin.md")).unwrap();
        assert_eq!(draft.front_matter.title.as_deref(), Some("週次チェックイン"));
        assert_eq!(draft.front_matter.slug.as_deref(), Some("ritual-weekly-checkin"));
        assert!(draft.front_matter.date.is_some());
        assert!(!draft.is_submitted());
        assert!(draft.body.contains("生成された本文"));
    }

    #[tokio::test]
    async fn test_run_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let first = StubGenerator::new();
        run(&config, &first).await.unwrap();

        // 二回目：既存slugについてはモデルを一切呼ばない
        let second = StubGenerator::new();
        let report = run(&config, &second).await.unwrap();

        assert_eq!(report.generated, 0);
        assert_eq!(report.skipped, 2);
        assert_eq!(second.call_count(), 0);

        let entries: Vec<_> = std::fs::read_dir(&config.posts_dir)
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_run_skips_only_existing_slugs() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        std::fs::create_dir_all(&config.posts_dir).unwrap();
        std::fs::write(
            config.posts_dir.join("ritual-weekly-checkin.md"),
            "---\nslug: ritual-weekly-checkin\n---\n\n既存の本文\n",
        )
        .unwrap();

        let generator = StubGenerator::new();
        let report = run(&config, &generator).await.unwrap();

        assert_eq!(report.generated, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(generator.call_count(), 1);
        assert!(
            generator.calls.lock().unwrap()[0].contains("ビジョンマップ"),
            "only the missing slug should reach the generator"
        );

        // 既存草稿は上書きされない
        let existing =
            std::fs::read_to_string(config.posts_dir.join("ritual-weekly-checkin.md")).unwrap();
        assert!(existing.contains("既存の本文"));
    }

    #[tokio::test]
    async fn test_run_aborts_on_generation_failure() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let generator = StubGenerator::failing();

        assert!(run(&config, &generator).await.is_err());

        // 失败中止：一篇都没有写出来
        let entries: Vec<_> = std::fs::read_dir(&config.posts_dir)
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_run_rejects_unsafe_slug() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.idea_file = temp_dir.path().join("bad.json");
        std::fs::write(
            &config.idea_file,
            r#"[{"slug": "../escape", "title": "t", "prompt": "p"}]"#,
        )
        .unwrap();

        let generator = StubGenerator::new();
        assert!(run(&config, &generator).await.is_err());
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_writes_default_tags_and_lang() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.default_tags = vec!["bonfillet".to_string()];

        let generator = StubGenerator::new();
        run(&config, &generator).await.unwrap();

        let draft = Draft::load(&config.posts_dir.join("vision-mapping.md")).unwrap();
        assert_eq!(draft.front_matter.tags, vec!["bonfillet".to_string()]);
        assert_eq!(draft.front_matter.lang, crate::i18n::PostLanguage::Japanese);
    }
}
