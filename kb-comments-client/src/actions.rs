use crate::{
    api::{Comment, MenuScope, PermissionKey, UserId},
    DeleteMode, PermissionCheck,
};

/// Controls offered to the viewer on a comment in read mode
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CommentActions {
    pub can_edit: bool,
    pub can_delete_self: bool,
    pub can_delete_as_admin: bool,
}

impl CommentActions {
    pub fn delete_mode(&self) -> Option<DeleteMode> {
        match (self.can_delete_self, self.can_delete_as_admin) {
            (true, _) => Some(DeleteMode::Own),
            (false, true) => Some(DeleteMode::Admin),
            (false, false) => None,
        }
    }
}

/// Authors may edit and delete their comments. Anyone else only gets to
/// delete, and only if they hold the delete permission in `scope`; the
/// permission check is not consulted for authors.
pub fn resolve_actions(
    comment: &Comment,
    viewer: UserId,
    scope: &MenuScope,
    perms: &dyn PermissionCheck,
) -> CommentActions {
    if comment.is_authored_by(viewer) {
        return CommentActions {
            can_edit: true,
            can_delete_self: true,
            can_delete_as_admin: false,
        };
    }
    let key = PermissionKey::delete_comment(scope.menu_type);
    CommentActions {
        can_edit: false,
        can_delete_self: false,
        can_delete_as_admin: perms.is_granted(scope, &[key]),
    }
}
