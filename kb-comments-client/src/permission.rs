use std::collections::HashSet;

use crate::api::{MenuScope, PermissionKey};

/// Decides whether the current actor holds a permission in a given scope
pub trait PermissionCheck {
    /// Returns true if any of `keys` is granted in `scope`
    fn is_granted(&self, scope: &MenuScope, keys: &[PermissionKey]) -> bool;
}

/// Permissions already resolved for one scope
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrantedPermissions {
    pub scope: MenuScope,
    pub keys: HashSet<PermissionKey>,
}

impl GrantedPermissions {
    /// Nothing granted, eg. while the answer is still being fetched
    pub fn none(scope: MenuScope) -> GrantedPermissions {
        GrantedPermissions {
            scope,
            keys: HashSet::new(),
        }
    }

    pub fn new(scope: MenuScope, keys: impl IntoIterator<Item = PermissionKey>) -> Self {
        GrantedPermissions {
            scope,
            keys: keys.into_iter().collect(),
        }
    }
}

impl PermissionCheck for GrantedPermissions {
    fn is_granted(&self, scope: &MenuScope, keys: &[PermissionKey]) -> bool {
        self.scope == *scope && keys.iter().any(|k| self.keys.contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MenuType, OrganizationId, ProjectId};

    #[test]
    fn granted_only_in_own_scope() {
        let scope = MenuScope::project(ProjectId(4), OrganizationId(1));
        let key = PermissionKey::delete_comment(MenuType::Project);
        let perms = GrantedPermissions::new(scope.clone(), [key.clone()]);

        assert!(perms.is_granted(&scope, &[key.clone()]));
        assert!(!perms.is_granted(&MenuScope::project(ProjectId(5), OrganizationId(1)), &[key.clone()]));
        assert!(!perms.is_granted(&scope, &[PermissionKey::delete_comment(MenuType::Organization)]));
        assert!(!GrantedPermissions::none(scope.clone()).is_granted(&scope, &[key]));
    }
}
