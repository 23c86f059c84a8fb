use kb_comments_client::{
    api::{Error, PageInfo, UserDescriptor},
    CommentListConfig, ComposerState,
};
use yew::prelude::*;

use crate::{
    api,
    ui::{StoreHandle, UserHead},
};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentComposerProps {
    pub store: StoreHandle,
    pub page_info: PageInfo,
    pub viewer: UserDescriptor,
    pub config: CommentListConfig,
    pub on_changed: Callback<()>,
}

pub enum ComposerMsg {
    Changed(String),
    Submit,
    Completed(Result<(), Error>),
}

pub struct CommentComposer {
    state: ComposerState,
}

impl Component for CommentComposer {
    type Message = ComposerMsg;
    type Properties = CommentComposerProps;

    fn create(ctx: &Context<Self>) -> Self {
        CommentComposer {
            state: ComposerState::new(ctx.props().config.on_edit_failure),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ComposerMsg::Changed(text) => self.state.update(text),
            ComposerMsg::Submit => {
                let comment = match self.state.submit(&ctx.props().page_info) {
                    Some(c) => c,
                    None => return false,
                };
                let store = ctx.props().store.clone();
                let timeout = ctx.props().config.submit_timeout();
                ctx.link().send_future(async move {
                    let res = api::with_timeout(store.0.create_comment(comment), timeout).await;
                    ComposerMsg::Completed(res)
                });
            }
            ComposerMsg::Completed(res) => {
                let succeeded = res.is_ok();
                self.state.finish(res);
                if succeeded {
                    ctx.props().on_changed.emit(());
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let spinner = self.state.in_flight().then(|| {
            html! { <span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span> }
        });
        html! {
            <div class="kb-comment-composer mt-3">
                <div class="mb-2">
                    <UserHead user={ ctx.props().viewer.clone() } />
                </div>
                <textarea
                    class="form-control"
                    placeholder="Write a comment"
                    value={ self.state.draft().to_string() }
                    oninput={ ctx.link().callback(|e: InputEvent| {
                        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        ComposerMsg::Changed(input.value())
                    }) }
                />
                <button
                    type="button"
                    class="btn btn-primary mt-2"
                    disabled={ !self.state.can_submit() }
                    onclick={ ctx.link().callback(|_| ComposerMsg::Submit) }
                >
                    { for spinner }
                    { "Comment" }
                </button>
            </div>
        }
    }
}
