use yew::prelude::*;

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div style="display:flex; justify-content:center; align-items:center; padding: 32px;">
            <div style="
                width: 48px; height: 48px; border-radius: 50%;
                border: 4px solid #f5a623; border-bottom-color: transparent;
                animation: ss-spin 0.8s linear infinite;
            "></div>
        </div>
    }
}
