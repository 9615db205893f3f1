use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div style="
            position: fixed; inset: 0; background: rgba(0,0,0,0.45);
            display:flex; align-items:flex-start; justify-content:center;
            overflow:auto; padding: 40px 12px; z-index: 50;
        ">
            <div style="position:relative; background:#fff; border-radius:14px; width:100%; max-width: 640px;">
                <button
                    onclick={on_close}
                    aria-label="Close"
                    style="position:absolute; top:10px; right:10px; border:none; background:none; font-size:20px; cursor:pointer;"
                >
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
