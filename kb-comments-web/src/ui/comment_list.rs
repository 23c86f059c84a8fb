use std::rc::Rc;

use kb_comments_client::{
    api::{Comment, CommentId, Error, MenuScope, PageInfo, UserId},
    delete_comment, render_plan, CommentActions, CommentListConfig, CommentListState,
    CommentMode, CommentStore, CommentView, DeleteMode, GrantedPermissions,
};
use yew::prelude::*;

use crate::{api, ui};

/// Shared handle on a comment store, compared by identity
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn CommentStore>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &StoreHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub store: StoreHandle,
    pub page_info: PageInfo,
    pub comments: Rc<Vec<Comment>>,
    pub viewer: UserId,
    pub scope: MenuScope,
    pub perms: Rc<GrantedPermissions>,
    pub config: CommentListConfig,

    /// Emitted once a mutation went through and the list should be refetched
    pub on_changed: Callback<()>,
}

pub enum CommentListMsg {
    EnterEdit(CommentId),
    DraftChanged(String),
    CancelEdit,
    SubmitEdit(CommentId),
    EditCompleted(Result<(), Error>),
    Delete(CommentId, DeleteMode),
    DeleteCompleted(CommentId, Result<(), Error>),
}

pub struct CommentList {
    state: CommentListState,
}

impl CommentList {
    fn find<'a>(ctx: &'a Context<Self>, id: CommentId) -> Option<&'a Comment> {
        let found = ctx.props().comments.iter().find(|c| c.id == id);
        if found.is_none() {
            tracing::warn!(?id, "got ui event for comment that is not in the list anymore");
        }
        found
    }
}

impl Component for CommentList {
    type Message = CommentListMsg;
    type Properties = CommentListProps;

    fn create(ctx: &Context<Self>) -> Self {
        CommentList {
            state: CommentListState::new(ctx.props().config.on_edit_failure),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentListMsg::EnterEdit(id) => match Self::find(ctx, id) {
                Some(c) => self.state.enter_edit(c),
                None => return false,
            },
            CommentListMsg::DraftChanged(text) => self.state.update_draft(text),
            CommentListMsg::CancelEdit => self.state.cancel_edit(),
            CommentListMsg::SubmitEdit(id) => {
                let comment = match Self::find(ctx, id) {
                    Some(c) => c,
                    None => return false,
                };
                let (id, edit) = match self.state.submit_edit(comment, &ctx.props().page_info) {
                    Some(req) => req,
                    None => return false,
                };
                tracing::debug!(?id, version = edit.object_version_number, "submitting comment edit");
                let store = ctx.props().store.clone();
                let timeout = ctx.props().config.submit_timeout();
                ctx.link().send_future(async move {
                    let res = api::with_timeout(store.0.edit_comment(id, edit), timeout).await;
                    CommentListMsg::EditCompleted(res)
                });
            }
            CommentListMsg::EditCompleted(res) => {
                let succeeded = res.is_ok();
                self.state.finish_submit(res);
                if succeeded {
                    ctx.props().on_changed.emit(());
                }
            }
            CommentListMsg::Delete(id, mode) => {
                let store = ctx.props().store.clone();
                let timeout = ctx.props().config.submit_timeout();
                ctx.link().send_future(async move {
                    let res = api::with_timeout(delete_comment(&*store.0, id, mode), timeout).await;
                    CommentListMsg::DeleteCompleted(id, res)
                });
                return false;
            }
            CommentListMsg::DeleteCompleted(id, res) => {
                match res {
                    Ok(()) => ctx.props().on_changed.emit(()),
                    Err(err) => tracing::warn!(?id, %err, "comment deletion failed"),
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let plan = render_plan(&p.comments, &self.state, p.viewer, &p.scope, &*p.perms);
        html! {
            <div class="kb-comment-list">
                { for plan.into_iter().map(|v| render_comment(ctx, v)) }
            </div>
        }
    }
}

fn render_comment(ctx: &Context<CommentList>, v: CommentView<'_>) -> Html {
    let body = match v.mode {
        CommentMode::Editing {
            draft,
            submit_enabled,
            loading,
        } => edit_box(ctx, v.comment.id, draft, submit_enabled, loading),
        CommentMode::Reading { actions } => read_view(ctx, v.comment, actions),
    };
    html! {
        <div key={ v.comment.id.0.to_string() } class="kb-comment-item py-2">
            { body }
        </div>
    }
}

fn edit_box(
    ctx: &Context<CommentList>,
    id: CommentId,
    draft: String,
    submit_enabled: bool,
    loading: bool,
) -> Html {
    let spinner = loading.then(|| {
        html! { <span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span> }
    });
    html! {
        <div class="kb-comment-edit">
            <textarea
                class="form-control"
                value={ draft }
                oninput={ ctx.link().callback(|e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    CommentListMsg::DraftChanged(input.value())
                }) }
            />
            <div class="mt-2 me-1">
                <button
                    type="button"
                    class="btn btn-primary me-2"
                    disabled={ !submit_enabled }
                    onclick={ ctx.link().callback(move |_| CommentListMsg::SubmitEdit(id)) }
                >
                    { for spinner }
                    { "Comment" }
                </button>
                <button
                    type="button"
                    class="btn btn-light"
                    onclick={ ctx.link().callback(|_| CommentListMsg::CancelEdit) }
                >
                    { "Cancel" }
                </button>
            </div>
        </div>
    }
}

fn read_view(ctx: &Context<CommentList>, comment: &Comment, actions: CommentActions) -> Html {
    let id = comment.id;
    let edit_button = actions.can_edit.then(|| {
        html! {
            <span
                role="button"
                class="bi-btn bi-pencil mx-1"
                title="Edit"
                onclick={ ctx.link().callback(move |_| CommentListMsg::EnterEdit(id)) }
            >
            </span>
        }
    });
    let delete_button = actions.delete_mode().map(|mode| {
        html! {
            <ui::Popconfirm
                title="Delete this comment?"
                ok_text="Delete"
                on_confirm={ ctx.link().callback(move |_| CommentListMsg::Delete(id, mode)) }
            >
                <span class="bi-btn bi-trash mx-1" title="Delete"></span>
            </ui::Popconfirm>
        }
    });
    html! {
        <>
            <div class="kb-comment-header d-flex justify-content-between align-items-center">
                <div class="d-flex align-items-center">
                    <ui::UserHead user={ comment.author() } size={ 30 } />
                    <div class="ms-3 text-muted">
                        <ui::TimeAgo datetime={ comment.last_update_date } />
                    </div>
                </div>
                <div class="kb-comment-actions">
                    { for edit_button }
                    { for delete_button }
                </div>
            </div>
            <div class="kb-comment-content mt-2">
                { &comment.comment }
            </div>
        </>
    }
}
