mod actions;
pub use actions::{resolve_actions, CommentActions};

mod composer;
pub use composer::ComposerState;

mod config;
pub use config::{CommentListConfig, EditFailurePolicy};

mod edit;
pub use edit::{CommentListState, EditSlot};

mod permission;
pub use permission::{GrantedPermissions, PermissionCheck};

mod store;
pub use store::{delete_comment, CommentStore, DeleteMode};

mod view;
pub use view::{render_plan, CommentMode, CommentView};

pub mod api {
    pub use kb_comments_api::*;
}
