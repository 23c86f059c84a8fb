use kb_comments_client::api::UserDescriptor;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserHeadProps {
    pub user: UserDescriptor,
    #[prop_or(30)]
    pub size: u32,
}

#[function_component(UserHead)]
pub fn user_head(p: &UserHeadProps) -> Html {
    let style = format!("width: {0}px; height: {0}px;", p.size);
    let avatar = match &p.user.avatar {
        Some(url) => html! {
            <img class="user-head-avatar rounded-circle" src={ url.clone() } alt="" style={ style } />
        },
        None => html! {
            <span class="user-head-avatar rounded-circle d-inline-flex justify-content-center align-items-center" style={ style }>
                { p.user.initial() }
            </span>
        },
    };
    let name = match p.user.real_name.is_empty() {
        true => p.user.login_name.clone(),
        false => p.user.real_name.clone(),
    };
    html! {
        <span class="user-head d-inline-flex align-items-center" title={ p.user.login_name.clone() }>
            { avatar }
            <span class="ms-2">{ name }</span>
        </span>
    }
}
