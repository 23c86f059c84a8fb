use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{Comment, CommentId, EditComment, NewComment};

mod error;
pub use error::Error;

mod page;
pub use page::{PageId, PageInfo};

mod scope;
pub use scope::{MenuScope, MenuType, OrganizationId, PermissionKey, ProjectId};

mod user;
pub use user::{CurrentUser, UserDescriptor, UserId};

mod kb_date;
