mod app;
pub use app::{App, AppMsg};

mod comment_composer;
pub use comment_composer::CommentComposer;

mod comment_list;
pub use comment_list::{CommentList, StoreHandle};

mod popconfirm;
pub use popconfirm::Popconfirm;

mod time_ago;
pub use time_ago::TimeAgo;

mod user_head;
pub use user_head::UserHead;
