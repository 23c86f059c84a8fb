use async_trait::async_trait;
use kb_comments_client::{
    api::{
        Comment, CommentId, CurrentUser, EditComment, Error, NewComment, PageInfo, UserId,
    },
    CommentStore,
};
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Calls received by the mock store, in order
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreCall {
    Create(NewComment),
    Edit(CommentId, EditComment),
    Delete(CommentId),
    AdminDelete(CommentId),
}

/// In-memory comment store for a single page, seen from a single user
pub struct MockStore(Mutex<Inner>);

#[derive(Debug)]
struct Inner {
    page: PageInfo,
    viewer: CurrentUser,
    is_admin: bool,
    comments: Vec<Comment>,
    next_id: i64,
    calls: Vec<StoreCall>,
    feeds: Vec<mpsc::UnboundedSender<Vec<Comment>>>,
}

impl Inner {
    fn relay_list(&mut self) {
        let list = self.comments.clone();
        self.feeds.retain_mut(|f| matches!(f.send(list.clone()), Ok(())));
    }

    fn position(&self, id: CommentId) -> Result<usize, Error> {
        self.comments
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::CommentNotFound(id))
    }

    fn authored_position(&self, id: CommentId) -> Result<usize, Error> {
        let pos = self.position(id)?;
        match self.comments[pos].is_authored_by(self.viewer.id) {
            true => Ok(pos),
            false => Err(Error::PermissionDenied),
        }
    }
}

impl MockStore {
    pub fn new(page: PageInfo, viewer: CurrentUser) -> MockStore {
        MockStore(Mutex::new(Inner {
            page,
            viewer,
            is_admin: false,
            comments: Vec::new(),
            next_id: 1,
            calls: Vec::new(),
            feeds: Vec::new(),
        }))
    }

    /// Grant or revoke the right to delete other users' comments
    pub fn set_admin(&self, is_admin: bool) {
        self.0.lock().is_admin = is_admin;
    }

    /// Insert a comment as-is, bypassing all checks
    pub fn test_insert(&self, c: Comment) {
        let mut inner = self.0.lock();
        inner.next_id = inner.next_id.max(c.id.0 + 1);
        inner.comments.push(c);
        inner.relay_list();
    }

    pub fn test_calls(&self) -> Vec<StoreCall> {
        self.0.lock().calls.clone()
    }

    pub fn comment_list(&self) -> Vec<Comment> {
        self.0.lock().comments.clone()
    }

    pub fn page_info(&self) -> PageInfo {
        self.0.lock().page.clone()
    }

    /// Receive the full comment list after each change
    pub fn list_feed(&self) -> mpsc::UnboundedReceiver<Vec<Comment>> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.0.lock().feeds.push(sender);
        receiver
    }
}

#[async_trait(?Send)]
impl CommentStore for MockStore {
    async fn create_comment(&self, c: NewComment) -> Result<(), Error> {
        let mut inner = self.0.lock();
        inner.calls.push(StoreCall::Create(c.clone()));
        if c.page_id != inner.page.id {
            return Err(Error::PermissionDenied);
        }
        let id = CommentId(inner.next_id);
        inner.next_id += 1;
        let viewer = inner.viewer.clone();
        inner.comments.push(Comment {
            id,
            user_id: viewer.id,
            login_name: viewer.login_name,
            real_name: viewer.real_name,
            user_image_url: viewer.image_url,
            comment: c.comment,
            last_update_date: Some(chrono::Utc::now()),
            object_version_number: 1,
        });
        tracing::debug!(?id, "mock store created comment");
        inner.relay_list();
        Ok(())
    }

    async fn edit_comment(&self, id: CommentId, edit: EditComment) -> Result<(), Error> {
        let mut inner = self.0.lock();
        inner.calls.push(StoreCall::Edit(id, edit.clone()));
        if edit.page_id != inner.page.id {
            return Err(Error::CommentNotFound(id));
        }
        let pos = inner.authored_position(id)?;
        let c = &mut inner.comments[pos];
        if c.object_version_number != edit.object_version_number {
            return Err(Error::VersionConflict {
                comment: id,
                expected: edit.object_version_number,
                found: c.object_version_number,
            });
        }
        c.comment = edit.comment;
        c.object_version_number += 1;
        c.last_update_date = Some(chrono::Utc::now());
        inner.relay_list();
        Ok(())
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), Error> {
        let mut inner = self.0.lock();
        inner.calls.push(StoreCall::Delete(id));
        let pos = inner.authored_position(id)?;
        inner.comments.remove(pos);
        inner.relay_list();
        Ok(())
    }

    async fn admin_delete_comment(&self, id: CommentId) -> Result<(), Error> {
        let mut inner = self.0.lock();
        inner.calls.push(StoreCall::AdminDelete(id));
        if !inner.is_admin {
            return Err(Error::PermissionDenied);
        }
        let pos = inner.position(id)?;
        inner.comments.remove(pos);
        inner.relay_list();
        Ok(())
    }
}

/// Build a comment the way the knowledge base would send it
pub fn comment(id: i64, author: UserId, text: &str, version: i64) -> Comment {
    Comment {
        id: CommentId(id),
        user_id: author,
        login_name: format!("user{}", author.0),
        real_name: format!("User {}", author.0),
        user_image_url: None,
        comment: String::from(text),
        last_update_date: None,
        object_version_number: version,
    }
}

pub fn user(id: i64) -> CurrentUser {
    CurrentUser {
        id: UserId(id),
        login_name: format!("user{id}"),
        real_name: format!("User {id}"),
        image_url: None,
    }
}
