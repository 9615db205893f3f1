use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::style::{btn_google, btn_primary, btn_resend, error_text, input, label};
use super::Loader;
use crate::api::HttpApi;
use crate::browser;
use crate::config::AppConfig;
use crate::models::SignupRequest;
use crate::session::BrowserStore;
use crate::signup::{self, SignupPhase};

#[derive(Properties, PartialEq)]
pub struct CreateAccountProps {
    pub on_close: Callback<()>,
}

#[function_component(CreateAccount)]
pub fn create_account(props: &CreateAccountProps) -> Html {
    let form = use_state(SignupRequest::default);
    let phase = use_state(SignupPhase::default);
    let message = use_state(String::new);
    let loading = use_state(|| false);

    // Resend countdown, one tick per second
    {
        let phase = phase.clone();
        use_effect_with(*phase, move |current| {
            let current = *current;
            let handle = current
                .resend_in()
                .map(|_| Timeout::new(1_000, move || phase.set(current.tick())));
            move || drop(handle)
        });
    }

    let on_send_otp = {
        let form = form.clone();
        let phase = phase.clone();
        let message = message.clone();
        let loading = loading.clone();
        Callback::from(move |_: MouseEvent| {
            let email = form.email.clone();
            let current = *phase;
            let phase = phase.clone();
            let message = message.clone();
            let loading = loading.clone();

            loading.set(true);
            spawn_local(async move {
                let api = HttpApi::new(AppConfig::from_env());
                let result = if current.otp_requested() {
                    signup::resend_otp(&api, current, &email).await
                } else {
                    signup::request_otp(&api, &email).await
                };
                match result {
                    Ok((next, msg)) => {
                        phase.set(next);
                        message.set(msg);
                    }
                    Err(e) => message.set(signup::otp_error_message(&e)),
                }
                loading.set(false);
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let phase = phase.clone();
        let message = message.clone();
        let loading = loading.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let req = (*form).clone();
            let current = *phase;
            let phase = phase.clone();
            let message = message.clone();
            let loading = loading.clone();
            let on_close = on_close.clone();

            if current.otp_requested() {
                loading.set(true);
            }
            spawn_local(async move {
                let api = HttpApi::new(AppConfig::from_env());
                let result = signup::submit(&api, &BrowserStore, current, &req).await;
                loading.set(false);
                match result {
                    Ok(_) => {
                        phase.set(SignupPhase::Submitted);
                        on_close.emit(());
                        browser::reload();
                    }
                    Err(e) => message.set(signup::submit_error_message(&e)),
                }
            });
        })
    };

    let on_google = Callback::from(|_: MouseEvent| {
        let cfg = AppConfig::from_env();
        if !cfg.google_enabled() {
            log::warn!("Google sign-in is not configured (STUDENTSAYS_GOOGLE_CLIENT_ID)");
            return;
        }
        let client_id = cfg.google_client_id.clone();
        browser::request_google_code(&client_id, move |code| {
            spawn_local(async move {
                let api = HttpApi::new(cfg);
                if signup::google_login(&api, &BrowserStore, &code).await.is_some() {
                    browser::reload();
                }
            });
        });
    });

    if *loading {
        return html! {
            <div style="max-width: 560px; margin: 0 auto; padding: 32px;">
                <Loader />
            </div>
        };
    }

    let on_full_name = bind_input(form.clone(), |f, v| f.full_name = v);
    let on_email = bind_input(form.clone(), |f, v| f.email = v);
    let on_otp = bind_input(form.clone(), |f, v| f.otp = v);
    let on_city = bind_input(form.clone(), |f, v| f.city = v);
    let on_class = bind_input(form.clone(), |f, v| f.student_class = v);
    let on_password = bind_input(form.clone(), |f, v| f.password = v);

    let otp_controls = match *phase {
        SignupPhase::Idle => html! {
            <button type="button" onclick={on_send_otp} style={btn_primary()}>{"Send OTP"}</button>
        },
        p if p.can_resend() => html! {
            <button type="button" onclick={on_send_otp} style={btn_resend()}>{"Resend OTP"}</button>
        },
        p => match p.resend_in() {
            Some(secs) => html! {
                <p style="font-size: 13px; color:#e07b00; margin: 8px 0 0 0;">
                    { format!("Resend available in {secs}s") }
                </p>
            },
            None => html! {},
        },
    };

    html! {
        <div style="max-width: 560px; margin: 0 auto; padding: 32px;">
            <h2 style="text-align:center; margin: 0 0 20px 0;">{"Create Student Account"}</h2>
            <form onsubmit={on_submit}>
                <div style="display:grid; grid-template-columns: 1fr 1fr; gap: 14px;">
                    { field("Full Name", "text", &form.full_name, on_full_name, "Enter your full name") }
                    <div>
                        { field("Email", "email", &form.email, on_email, "Enter your email") }
                        { otp_controls }
                    </div>
                    {
                        if phase.otp_requested() {
                            field("OTP", "text", &form.otp, on_otp, "Enter OTP")
                        } else {
                            html! {}
                        }
                    }
                    { field("City", "text", &form.city, on_city, "Enter your city") }
                    { field("Class", "text", &form.student_class, on_class, "Enter your class") }
                    { field("Password", "password", &form.password, on_password, "Enter your password") }
                </div>

                if !message.is_empty() {
                    <p style={error_text()}>{ (*message).clone() }</p>
                }

                <div style="margin-top: 16px; text-align:center;">
                    <button type="submit" style={format!("{} width:100%;", btn_primary())}>
                        {"Create Account"}
                    </button>
                    <p style="margin: 16px 0; opacity: 0.7;">{"OR"}</p>
                    <button type="button" onclick={on_google} style={btn_google()}>
                        {"Continue with Google"}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn field(label_text: &str, kind: &str, value: &str, oninput: Callback<InputEvent>, placeholder: &str) -> Html {
    html! {
        <div>
            <label style={label()}>{ label_text }</label>
            <input
                type={kind.to_string()}
                value={value.to_string()}
                {oninput}
                placeholder={placeholder.to_string()}
                required=true
                style={input()}
            />
        </div>
    }
}

fn bind_input(form: UseStateHandle<SignupRequest>, mutator: fn(&mut SignupRequest, String)) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        if let Some(i) = e.target_dyn_into::<HtmlInputElement>() {
            let mut f = (*form).clone();
            mutator(&mut f, i.value());
            form.set(f);
        }
    })
}
