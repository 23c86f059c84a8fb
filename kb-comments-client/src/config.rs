use std::time::Duration;

/// What to do with the local state when a mutation reports a failure
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditFailurePolicy {
    /// Leave everything as-is: the submission stays in flight and the edit
    /// box stays open with its button disabled
    #[default]
    Stall,

    /// Clear the in-flight flag but keep the draft, so that the user can
    /// submit again
    Reset,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentListConfig {
    pub on_edit_failure: EditFailurePolicy,

    /// If set, mutations that take longer than this fail with a timeout
    pub submit_timeout_secs: Option<u64>,
}

impl CommentListConfig {
    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_stalling() {
        let cfg: CommentListConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CommentListConfig::default());
        assert_eq!(cfg.on_edit_failure, EditFailurePolicy::Stall);
        assert_eq!(cfg.submit_timeout(), None);
    }

    #[test]
    fn reset_with_timeout() {
        let cfg: CommentListConfig =
            serde_json::from_str(r#"{"onEditFailure": "reset", "submitTimeoutSecs": 30}"#)
                .unwrap();
        assert_eq!(cfg.on_edit_failure, EditFailurePolicy::Reset);
        assert_eq!(cfg.submit_timeout(), Some(Duration::from_secs(30)));
    }
}
