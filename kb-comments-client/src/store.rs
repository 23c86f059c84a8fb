use async_trait::async_trait;

use crate::api::{CommentId, EditComment, Error, NewComment};

/// Mutation entry points of the comment store
///
/// The store owns the comment list: after a mutation completes, the list is
/// refreshed by whoever owns the store, never by the caller.
#[async_trait(?Send)]
pub trait CommentStore {
    async fn create_comment(&self, comment: NewComment) -> Result<(), Error>;
    async fn edit_comment(&self, id: CommentId, edit: EditComment) -> Result<(), Error>;
    async fn delete_comment(&self, id: CommentId) -> Result<(), Error>;
    async fn admin_delete_comment(&self, id: CommentId) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeleteMode {
    /// The viewer deletes one of their own comments
    Own,

    /// The viewer deletes someone else's comment using their elevated rights
    Admin,
}

pub async fn delete_comment<S>(store: &S, id: CommentId, mode: DeleteMode) -> Result<(), Error>
where
    S: CommentStore + ?Sized,
{
    tracing::debug!(?id, ?mode, "deleting comment");
    match mode {
        DeleteMode::Own => store.delete_comment(id).await,
        DeleteMode::Admin => store.admin_delete_comment(id).await,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(&'static str, CommentId)>>);

    #[async_trait(?Send)]
    impl CommentStore for Recorder {
        async fn create_comment(&self, _: NewComment) -> Result<(), Error> {
            unimplemented!()
        }
        async fn edit_comment(&self, _: CommentId, _: EditComment) -> Result<(), Error> {
            unimplemented!()
        }
        async fn delete_comment(&self, id: CommentId) -> Result<(), Error> {
            self.0.borrow_mut().push(("own", id));
            Ok(())
        }
        async fn admin_delete_comment(&self, id: CommentId) -> Result<(), Error> {
            self.0.borrow_mut().push(("admin", id));
            Err(Error::PermissionDenied)
        }
    }

    #[test]
    fn dispatches_on_mode() {
        let store = Recorder::default();
        assert_eq!(block_on(delete_comment(&store, CommentId(1), DeleteMode::Own)), Ok(()));
        assert_eq!(
            block_on(delete_comment(&store, CommentId(2), DeleteMode::Admin)),
            Err(Error::PermissionDenied)
        );
        assert_eq!(
            *store.0.borrow(),
            vec![("own", CommentId(1)), ("admin", CommentId(2))]
        );
    }
}
