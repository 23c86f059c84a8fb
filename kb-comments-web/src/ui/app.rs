use std::rc::Rc;

use kb_comments_client::{
    api::{Comment, CurrentUser, PageInfo, PermissionKey, UserDescriptor},
    GrantedPermissions,
};
use yew::prelude::*;

use crate::{
    api,
    ui::{self, StoreHandle},
    Settings,
};

pub enum AppMsg {
    ReceivedUser(CurrentUser),
    ReceivedPermissions(GrantedPermissions),
    ReceivedComments(Vec<Comment>),
    Refresh,
    /// Loading the page failed, nothing can be shown
    FetchFailed(String),
    /// Refetching after a change failed, the current list is still valid
    RefreshFailed(String),
}

struct Loaded {
    settings: Rc<Settings>,
    store: StoreHandle,
    viewer: Option<CurrentUser>,
    perms: Rc<GrantedPermissions>,
    comments: Option<Rc<Vec<Comment>>>,
}

pub struct App {
    loaded: Result<Loaded, String>,
}

impl App {
    fn fetch_comments(ctx: &Context<Self>, settings: Rc<Settings>, refresh: bool) {
        ctx.link().send_future(async move {
            match api::fetch_comments(&settings, settings.page_id).await {
                Ok(list) => AppMsg::ReceivedComments(list),
                Err(err) if refresh => AppMsg::RefreshFailed(format!("{err:#}")),
                Err(err) => AppMsg::FetchFailed(format!("{err:#}")),
            }
        });
    }

    /// Applies the answer of a fetch, returning whether to re-render
    fn apply(&mut self, msg: AppMsg) -> bool {
        let loaded = match &mut self.loaded {
            Ok(l) => l,
            Err(_) => return false,
        };
        match msg {
            AppMsg::ReceivedUser(u) => {
                tracing::debug!(user = ?u.id, "identified current user");
                loaded.viewer = Some(u);
            }
            AppMsg::ReceivedPermissions(p) => {
                tracing::debug!(granted = p.keys.len(), "received permissions");
                loaded.perms = Rc::new(p);
            }
            AppMsg::ReceivedComments(list) => {
                tracing::debug!(num_comments = list.len(), "received comment list");
                loaded.comments = Some(Rc::new(list));
            }
            AppMsg::Refresh => return false,
            AppMsg::RefreshFailed(err) => {
                tracing::warn!(%err, "failed refreshing comment list, keeping the current one");
                return false;
            }
            AppMsg::FetchFailed(err) => {
                tracing::error!(%err, "failed fetching data");
                self.loaded = Err(err);
            }
        }
        true
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let settings = match Settings::load() {
            Ok(s) => Rc::new(s),
            Err(err) => {
                tracing::error!(?err, "failed loading settings");
                return App {
                    loaded: Err(format!("{err:#}")),
                };
            }
        };

        {
            let settings = settings.clone();
            ctx.link().send_future(async move {
                match api::fetch_current_user(&settings).await {
                    Ok(u) => AppMsg::ReceivedUser(u),
                    Err(err) => AppMsg::FetchFailed(format!("{err:#}")),
                }
            });
        }
        {
            let settings = settings.clone();
            ctx.link().send_future(async move {
                let keys = vec![PermissionKey::delete_comment(settings.scope.menu_type)];
                match api::fetch_permissions(&settings, keys).await {
                    Ok(p) => AppMsg::ReceivedPermissions(p),
                    Err(err) => {
                        // without an answer, nothing is granted
                        tracing::warn!(?err, "failed checking permissions");
                        AppMsg::ReceivedPermissions(GrantedPermissions::none(settings.scope.clone()))
                    }
                }
            });
        }
        Self::fetch_comments(ctx, settings.clone(), false);

        App {
            loaded: Ok(Loaded {
                store: StoreHandle(Rc::new(api::RestStore::new(settings.clone()))),
                perms: Rc::new(GrantedPermissions::none(settings.scope.clone())),
                viewer: None,
                comments: None,
                settings,
            }),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let (AppMsg::Refresh, Ok(loaded)) = (&msg, &self.loaded) {
            Self::fetch_comments(ctx, loaded.settings.clone(), true);
            return false;
        }
        self.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loaded = match &self.loaded {
            Ok(l) => l,
            Err(err) => {
                return html! {
                    <div class="alert alert-warning" role="alert">
                        { "Comments are unavailable: " }{ err }
                    </div>
                }
            }
        };
        let (viewer, comments) = match (&loaded.viewer, &loaded.comments) {
            (Some(v), Some(c)) => (v, c),
            _ => {
                return html! {
                    <div class="d-flex align-items-center">
                        <div class="spinner-border spinner-border-sm m-2" role="status"></div>
                        <div>{ "Loading comments..." }</div>
                    </div>
                }
            }
        };
        let page_info = PageInfo {
            id: loaded.settings.page_id,
        };
        let on_changed = ctx.link().callback(|_| AppMsg::Refresh);
        html! {
            <div class="kb-comments">
                <ui::CommentList
                    store={ loaded.store.clone() }
                    page_info={ page_info.clone() }
                    comments={ comments.clone() }
                    viewer={ viewer.id }
                    scope={ loaded.settings.scope.clone() }
                    perms={ loaded.perms.clone() }
                    config={ loaded.settings.config.clone() }
                    on_changed={ on_changed.clone() }
                />
                <ui::CommentComposer
                    store={ loaded.store.clone() }
                    { page_info }
                    viewer={ UserDescriptor::from(viewer) }
                    config={ loaded.settings.config.clone() }
                    { on_changed }
                />
            </div>
        }
    }
}
