use kb_comments_client::api::Time;
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct TimeAgoProps {
    pub datetime: Option<Time>,
}

/// Relative time, with the absolute time as tooltip
#[function_component(TimeAgo)]
pub fn time_ago(p: &TimeAgoProps) -> Html {
    let (relative, absolute) = match &p.datetime {
        None => (String::new(), String::new()),
        Some(t) => (
            util::time_ago(chrono::Utc::now(), *t),
            util::format_absolute(t),
        ),
    };
    html! {
        <span class="time-ago" data-bs-placement="top" title={ absolute }>
            { relative }
        </span>
    }
}
