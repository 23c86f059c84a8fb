use std::fmt;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ProjectId(pub i64);

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct OrganizationId(pub i64);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuType {
    Project,
    Organization,
    Site,
}

impl MenuType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuType::Project => "project",
            MenuType::Organization => "organization",
            MenuType::Site => "site",
        }
    }
}

/// Organizational context the current page is viewed in
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuScope {
    #[serde(rename = "type")]
    pub menu_type: MenuType,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    pub organization_id: OrganizationId,
}

impl MenuScope {
    pub fn project(project_id: ProjectId, organization_id: OrganizationId) -> MenuScope {
        MenuScope {
            menu_type: MenuType::Project,
            project_id: Some(project_id),
            organization_id,
        }
    }

    pub fn organization(organization_id: OrganizationId) -> MenuScope {
        MenuScope {
            menu_type: MenuType::Organization,
            project_id: None,
            organization_id,
        }
    }
}

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct PermissionKey(pub String);

impl PermissionKey {
    /// Permission allowing to delete comments written by other users
    pub fn delete_comment(menu_type: MenuType) -> PermissionKey {
        PermissionKey(format!(
            "knowledgebase-service.page-comment-{}.deleteComment",
            menu_type.as_str()
        ))
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
