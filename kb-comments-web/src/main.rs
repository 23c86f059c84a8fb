use anyhow::Context;
use gloo_storage::{LocalStorage, Storage};
use kb_comments_client::{
    api::{MenuScope, PageId},
    CommentListConfig,
};

mod api;
mod ui;
mod util;

const KEY_SETTINGS: &str = "kb-comments-settings";

lazy_static::lazy_static! {
    static ref HTTP: reqwest::Client = reqwest::Client::new();

    // Only used for reads: mutations must not be replayed behind the user's back
    static ref CLIENT: reqwest_middleware::ClientWithMiddleware = {
        let retry_policy = reqwest_retry::policies::ExponentialBackoff::builder()
            .build_with_max_retries(3);
        reqwest_middleware::ClientBuilder::new(HTTP.clone())
            .with(reqwest_retry::RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    };
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}

/// Everything the page embedding the comment list saves for it
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub host: String,
    pub token: String,
    pub page_id: PageId,
    pub scope: MenuScope,
    #[serde(default)]
    pub config: CommentListConfig,
}

impl Settings {
    pub fn load() -> anyhow::Result<Settings> {
        let settings: Settings = LocalStorage::get(KEY_SETTINGS)
            .with_context(|| format!("reading {KEY_SETTINGS:?} from local storage"))?;
        tracing::info!(
            host = %settings.host,
            page = ?settings.page_id,
            scope = ?settings.scope,
            "loaded comment list settings"
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use kb_comments_client::{
        api::{MenuType, OrganizationId, ProjectId},
        EditFailurePolicy,
    };

    use super::*;

    #[test]
    fn settings_from_embedding_page() {
        let s: Settings = serde_json::from_str(
            r#"{
                "host": "https://kb.example.org",
                "token": "abc",
                "pageId": 42,
                "scope": {"type": "project", "projectId": 4, "organizationId": 1},
                "config": {"onEditFailure": "reset"}
            }"#,
        )
        .unwrap();
        assert_eq!(s.page_id, PageId(42));
        assert_eq!(s.scope.menu_type, MenuType::Project);
        assert_eq!(s.scope, MenuScope::project(ProjectId(4), OrganizationId(1)));
        assert_eq!(s.config.on_edit_failure, EditFailurePolicy::Reset);
    }

    #[test]
    fn config_is_optional() {
        let s: Settings = serde_json::from_str(
            r#"{
                "host": "h",
                "token": "t",
                "pageId": 1,
                "scope": {"type": "organization", "organizationId": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(s.config, CommentListConfig::default());
        assert_eq!(s.scope.project_id, None);
    }
}
