use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct PopconfirmProps {
    pub title: String,
    #[prop_or_else(|| String::from("OK"))]
    pub ok_text: String,
    #[prop_or_else(|| String::from("Cancel"))]
    pub cancel_text: String,
    pub on_confirm: Callback<()>,
    pub children: Children,
}

/// Asks for confirmation before running `on_confirm` when the children are clicked
#[function_component(Popconfirm)]
pub fn popconfirm(p: &PopconfirmProps) -> Html {
    let shown = use_state(|| false);
    let toggle = {
        let shown = shown.clone();
        Callback::from(move |_| shown.set(!*shown))
    };
    let cancel = {
        let shown = shown.clone();
        Callback::from(move |_| shown.set(false))
    };
    let confirm = {
        let shown = shown.clone();
        p.on_confirm.reform(move |_: MouseEvent| shown.set(false))
    };
    let popup = shown.then(|| {
        html! {
            <div class="popconfirm-popup dropdown-menu show p-3">
                <p class="mb-2">{ &p.title }</p>
                <div class="d-flex justify-content-end">
                    <button type="button" class="btn btn-sm btn-light me-2" onclick={ cancel }>
                        { &p.cancel_text }
                    </button>
                    <button type="button" class="btn btn-sm btn-danger" onclick={ confirm }>
                        { &p.ok_text }
                    </button>
                </div>
            </div>
        }
    });
    html! {
        <span class="popconfirm position-relative">
            <span role="button" onclick={ toggle }>
                { for p.children.iter() }
            </span>
            { for popup }
        </span>
    }
}
