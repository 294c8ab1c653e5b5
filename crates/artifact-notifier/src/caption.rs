use chrono::NaiveDateTime;

use crate::config::Config;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Caption attached to the uploaded document. Sent with `parse_mode=Markdown`.
pub fn render_caption(config: &Config, timestamp: NaiveDateTime) -> String {
    format!(
        "Repository: {}\nCommit: {}\nMessage: {}\nDate: {}\nVersion: {}",
        config.repository,
        config.sha,
        config.commit_message,
        timestamp.format(DATE_FORMAT),
        config.version,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> Config {
        Config {
            token: "t".into(),
            chat_id: "c".into(),
            version: "2.0.0".into(),
            repository: "org/app".into(),
            sha: "abc123".into(),
            commit_message: "fix bug".into(),
            api_base: crate::config::DEFAULT_API_BASE.into(),
        }
    }

    #[test]
    fn caption_matches_template() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap();
        assert_eq!(
            render_caption(&config(), ts),
            "Repository: org/app\nCommit: abc123\nMessage: fix bug\nDate: 2024-03-09 07:05:01\nVersion: 2.0.0"
        );
    }

    #[test]
    fn multiline_message_is_kept_verbatim() {
        let mut cfg = config();
        cfg.commit_message = "feat: x\n\nbody".into();
        let caption = render_caption(&cfg, chrono::Local::now().naive_local());
        assert!(caption.starts_with("Repository: org/app\nCommit: abc123\nMessage: feat: x\n\nbody\nDate: "));
        assert!(caption.ends_with("\nVersion: 2.0.0"));
    }
}
