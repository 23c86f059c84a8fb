use std::{future::Future, rc::Rc, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use futures::{pin_mut, select, FutureExt};
use kb_comments_client::{
    api::{
        Comment, CommentId, CurrentUser, EditComment, Error, MenuScope, MenuType, NewComment,
        PageId, PermissionKey,
    },
    CommentStore, GrantedPermissions,
};

use crate::Settings;

/// Comment store backed by the knowledge base REST API
pub struct RestStore {
    settings: Rc<Settings>,
}

impl RestStore {
    pub fn new(settings: Rc<Settings>) -> RestStore {
        RestStore { settings }
    }

    fn comment_url(&self, path: &str) -> String {
        comment_url(&self.settings.host, &self.settings.scope, path)
    }
}

pub fn comment_url(host: &str, scope: &MenuScope, path: &str) -> String {
    match (scope.menu_type, scope.project_id) {
        (MenuType::Project, Some(project)) => format!(
            "{host}/knowledge/v1/projects/{}/page_comment{path}?organizationId={}",
            project.0, scope.organization_id.0
        ),
        _ => format!(
            "{host}/knowledge/v1/organizations/{}/page_comment{path}",
            scope.organization_id.0
        ),
    }
}

async fn into_outcome(
    resp: Result<reqwest::Response, reqwest::Error>,
) -> Result<(), Error> {
    let resp = resp.map_err(|e| Error::Unknown(format!("request failed: {e}")))?;
    if resp.status().is_success() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.bytes().await.unwrap_or_default();
    Err(Error::parse(&body).unwrap_or_else(|err| {
        tracing::debug!(?err, "unparseable error body");
        Error::Unknown(format!("server answered {status}"))
    }))
}

#[async_trait(?Send)]
impl CommentStore for RestStore {
    async fn create_comment(&self, comment: NewComment) -> Result<(), Error> {
        let resp = crate::HTTP
            .post(self.comment_url(""))
            .bearer_auth(&self.settings.token)
            .json(&comment)
            .send()
            .await;
        into_outcome(resp).await
    }

    async fn edit_comment(&self, id: CommentId, edit: EditComment) -> Result<(), Error> {
        let resp = crate::HTTP
            .put(self.comment_url(&format!("/{}", id.0)))
            .bearer_auth(&self.settings.token)
            .json(&edit)
            .send()
            .await;
        into_outcome(resp).await
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), Error> {
        let resp = crate::HTTP
            .delete(self.comment_url(&format!("/delete_my/{}", id.0)))
            .bearer_auth(&self.settings.token)
            .send()
            .await;
        into_outcome(resp).await
    }

    async fn admin_delete_comment(&self, id: CommentId) -> Result<(), Error> {
        let resp = crate::HTTP
            .delete(self.comment_url(&format!("/{}", id.0)))
            .bearer_auth(&self.settings.token)
            .send()
            .await;
        into_outcome(resp).await
    }
}

async fn fetch<R>(settings: &Settings, url: String, query: &[(&str, String)]) -> anyhow::Result<R>
where
    R: for<'de> serde::Deserialize<'de>,
{
    crate::CLIENT
        .get(&url)
        .bearer_auth(&settings.token)
        .query(query)
        .send()
        .await
        .with_context(|| format!("fetching {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?
        .json()
        .await
        .with_context(|| format!("parsing answer from {url}"))
}

pub async fn fetch_comments(settings: &Settings, page: PageId) -> anyhow::Result<Vec<Comment>> {
    let url = comment_url(&settings.host, &settings.scope, "/list");
    fetch(settings, url, &[("pageId", page.0.to_string())]).await
}

pub async fn fetch_current_user(settings: &Settings) -> anyhow::Result<CurrentUser> {
    fetch(settings, format!("{}/iam/v1/users/self", settings.host), &[]).await
}

#[derive(Debug, serde::Deserialize)]
struct PermissionCheckResult {
    code: PermissionKey,
    approve: bool,
}

pub async fn fetch_permissions(
    settings: &Settings,
    keys: Vec<PermissionKey>,
) -> anyhow::Result<GrantedPermissions> {
    let scope = &settings.scope;
    let mut query = vec![("organizationId", scope.organization_id.0.to_string())];
    if let Some(project) = scope.project_id {
        query.push(("projectId", project.0.to_string()));
    }
    let url = format!("{}/iam/v1/permissions/check", settings.host);
    let answer: Vec<PermissionCheckResult> = crate::HTTP
        .post(&url)
        .bearer_auth(&settings.token)
        .query(&query)
        .json(&keys)
        .send()
        .await
        .with_context(|| format!("checking permissions at {url}"))?
        .error_for_status()
        .with_context(|| format!("checking permissions at {url}"))?
        .json()
        .await
        .context("parsing permission check answer")?;
    Ok(GrantedPermissions::new(
        scope.clone(),
        answer.into_iter().filter(|p| p.approve).map(|p| p.code),
    ))
}

/// Fail with `Error::Timeout` if `fut` does not complete within `timeout`
pub async fn with_timeout<F>(fut: F, timeout: Option<Duration>) -> Result<(), Error>
where
    F: Future<Output = Result<(), Error>>,
{
    let timeout = match timeout {
        None => return fut.await,
        Some(t) => t,
    };
    let fut = fut.fuse();
    let delay = wasm_timer::Delay::new(timeout).fuse();
    pin_mut!(fut, delay);
    select! {
        res = fut => res,
        _ = delay => {
            tracing::warn!(?timeout, "store call timed out");
            Err(Error::Timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use kb_comments_client::api::{OrganizationId, ProjectId};

    use super::*;

    #[test]
    fn routes_follow_scope() {
        assert_eq!(
            comment_url(
                "https://kb",
                &MenuScope::project(ProjectId(4), OrganizationId(1)),
                "/delete_my/7"
            ),
            "https://kb/knowledge/v1/projects/4/page_comment/delete_my/7?organizationId=1"
        );
        assert_eq!(
            comment_url("https://kb", &MenuScope::organization(OrganizationId(1)), "/7"),
            "https://kb/knowledge/v1/organizations/1/page_comment/7"
        );
    }
}
