// src/main.rs — Student Says (Rust + Yew + WASM)
// Signup with email OTP / Google, school search, review submission.

mod api;
mod browser;
mod components;
mod config;
mod error;
mod listing;
mod models;
mod review;
mod session;
mod signup;
#[cfg(test)]
mod testing;

use yew::prelude::*;

use components::{CreateAccount, Modal, SchoolPanel, SubmitReview};
use session::BrowserStore;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Closed,
    CreateAccount,
    Review,
}

#[function_component(App)]
fn app() -> Html {
    let dialog = use_state(|| Dialog::Closed);
    let user = use_state(|| session::load(&BrowserStore));

    let open = |d: Dialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(d))
    };
    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(Dialog::Closed))
    };

    let greeting = match &*user {
        Some(u) => html! {
            <div style="display:flex; align-items:center; gap: 8px;">
                if let Some(img) = u.image.clone() {
                    <img src={img} alt="" style="width: 32px; height: 32px; border-radius: 50%;" />
                }
                <span style="font-weight: 600;">{ format!("Hi, {}", u.name) }</span>
            </div>
        },
        None => html! {
            <button onclick={open(Dialog::CreateAccount)} style="padding:10px 14px; border-radius:10px; border:1px solid #1b66ff; background:#fff; color:#1b66ff; cursor:pointer;">
                {"Create Account"}
            </button>
        },
    };

    let modal = match *dialog {
        Dialog::Closed => html! {},
        Dialog::CreateAccount => html! {
            <Modal on_close={on_close.clone()}>
                <CreateAccount on_close={on_close.clone()} />
            </Modal>
        },
        Dialog::Review => html! {
            <Modal on_close={on_close.clone()}>
                <SubmitReview on_close={on_close.clone()} />
            </Modal>
        },
    };

    html! {
        <div style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; max-width: 960px; margin: 0 auto;">
            <header style="display:flex; justify-content: space-between; align-items:center; padding: 16px 24px;">
                <h1 style="margin: 0; font-size: 22px;">{"Student Says"}</h1>
                <div style="display:flex; gap: 10px; align-items:center;">
                    { greeting }
                    <button onclick={open(Dialog::Review)} style="padding:10px 14px; border-radius:10px; border:1px solid #1b66ff; background:#1b66ff; color:#fff; cursor:pointer;">
                        {"Write a Review"}
                    </button>
                </div>
            </header>
            <SchoolPanel />
            { modal }
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
