#[cfg(test)]
mod tests {
    use crate::ideas::{Idea, load_ideas};
    use tempfile::TempDir;

    #[test]
    fn test_load_ideas() {
        let temp_dir = TempDir::new().unwrap();
        let idea_path = temp_dir.path().join("ideas.json");
        std::fs::write(
            &idea_path,
            r#"[
                {"slug": "ritual-weekly-checkin", "title": "週次チェックインのすすめ", "prompt": "チームの習慣づくり"},
                {"slug": "vision-mapping", "title": "ビジョンマップ", "prompt": "長期目標の可視化"}
            ]"#,
        )
        .unwrap();

        let ideas = load_ideas(&idea_path).unwrap();
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].slug, "ritual-weekly-checkin");
        assert_eq!(ideas[0].title, "週次チェックインのすすめ");
        assert_eq!(ideas[1].prompt, "長期目標の可視化");
    }

    #[test]
    fn test_load_ideas_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_ideas(&temp_dir.path().join("none.json")).is_err());
    }

    #[test]
    fn test_load_ideas_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let idea_path = temp_dir.path().join("ideas.json");
        std::fs::write(&idea_path, "{not json").unwrap();

        assert!(load_ideas(&idea_path).is_err());
    }

    #[test]
    fn test_has_safe_slug() {
        let mut idea = Idea {
            slug: "ritual-weekly-checkin".to_string(),
            title: "t".to_string(),
            prompt: "p".to_string(),
        };
        assert!(idea.has_safe_slug());

        idea.slug = "nested/path".to_string();
        assert!(!idea.has_safe_slug());

        idea.slug = String::new();
        assert!(!idea.has_safe_slug());
    }
}
