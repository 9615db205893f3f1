use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::style::{btn_primary, error_text, input, label};
use super::Loader;
use crate::api::HttpApi;
use crate::browser;
use crate::config::AppConfig;
use crate::models::{NewSchool, SchoolOption};
use crate::review::{self, CreatedSchoolMemo, RatingPicker, ReviewDraft, SchoolChoice, ADD_NEW_SCHOOL, MAX_RATING};
use crate::session::{self, BrowserStore};

#[derive(Properties, PartialEq)]
pub struct SubmitReviewProps {
    pub on_close: Callback<()>,
}

#[function_component(SubmitReview)]
pub fn submit_review(props: &SubmitReviewProps) -> Html {
    let options = use_state(Vec::<SchoolOption>::new);
    let draft = use_state(ReviewDraft::default);
    let memo = use_state(|| None::<CreatedSchoolMemo>);
    let message = use_state(String::new);
    let loading = use_state(|| false);

    {
        let options = options.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = HttpApi::new(AppConfig::from_env());
                options.set(review::load_school_options(&api).await);
            });
            || ()
        });
    }

    let on_school_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            let mut d = (*draft).clone();
            d.choice = SchoolChoice::from_select_value(&sel.value());
            draft.set(d);
        })
    };

    let on_new_name = bind_new_school(draft.clone(), |s, v| s.name = v);
    let on_new_city = bind_new_school(draft.clone(), |s, v| s.city = v);

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(i) = e.target_dyn_into::<HtmlInputElement>() {
                let mut d = (*draft).clone();
                d.title = i.value();
                draft.set(d);
            }
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(t) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut d = (*draft).clone();
                d.description = t.value();
                draft.set(d);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let memo = memo.clone();
        let message = message.clone();
        let loading = loading.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let d = (*draft).clone();
            let mut pending = (*memo).clone();
            let memo = memo.clone();
            let message = message.clone();
            let loading = loading.clone();
            let on_close = on_close.clone();

            loading.set(true);
            message.set(String::new());
            spawn_local(async move {
                let api = HttpApi::new(AppConfig::from_env());
                let token = session::token(&BrowserStore);
                let result = review::submit_review(&api, token.as_deref(), &d, &mut pending).await;
                memo.set(pending);
                loading.set(false);
                match result {
                    Ok(()) => {
                        log::info!("Review submitted successfully");
                        on_close.emit(());
                        browser::reload();
                    }
                    Err(e) => {
                        log::error!("Error submitting review: {e}");
                        message.set(review::error_message(&e));
                    }
                }
            });
        })
    };

    let stars = (1..=MAX_RATING).map(|star| {
        let lit = draft.rating.is_lit(star);
        let onclick = bind_rating(draft.clone(), move |r| r.select(star));
        let onmouseenter = bind_rating(draft.clone(), move |r| r.hover(star));
        let onmouseleave = bind_rating(draft.clone(), RatingPicker::leave);
        let color = if lit { "#f5b301" } else { "#d0d0d0" };
        html! {
            <span
                {onclick}
                {onmouseenter}
                {onmouseleave}
                style={format!("cursor:pointer; font-size: 28px; color:{color};")}
            >
                {"★"}
            </span>
        }
    });

    let new_school_fields = match &draft.choice {
        SchoolChoice::New => html! {
            <div style="display:flex; gap: 12px; margin-bottom: 14px;">
                <div style="flex:1;">
                    <label style={label()}>{"New School Name"}</label>
                    <input
                        type="text"
                        value={draft.new_school.name.clone()}
                        oninput={on_new_name}
                        placeholder="Enter the new school's name"
                        required=true
                        style={input()}
                    />
                </div>
                <div style="flex:1;">
                    <label style={label()}>{"School City"}</label>
                    <input
                        type="text"
                        value={draft.new_school.city.clone()}
                        oninput={on_new_city}
                        placeholder="Enter the city of the school"
                        required=true
                        style={input()}
                    />
                </div>
            </div>
        },
        _ => html! {},
    };

    let selected = draft.choice.select_value();

    html! {
        <div style="max-width: 560px; margin: 0 auto; padding: 32px; position: relative;">
            if *loading {
                <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background: rgba(243,243,243,0.8); border-radius: 14px; z-index: 10;">
                    <Loader />
                </div>
            }
            <h2 style="text-align:center; margin: 0 0 20px 0;">{"Submit Your Review"}</h2>
            <form onsubmit={on_submit}>
                <div style="margin-bottom: 14px;">
                    <label style={label()}>{"School Name"}</label>
                    <select onchange={on_school_change} style={input()}>
                        <option value="" selected={selected.is_empty()}>{"Select a school"}</option>
                        <option value={ADD_NEW_SCHOOL} selected={selected == ADD_NEW_SCHOOL}>{"Add New School"}</option>
                        { for options.iter().map(|o| html! {
                            <option value={o.id.clone()} selected={selected == o.id}>{ o.label() }</option>
                        }) }
                    </select>
                </div>

                { new_school_fields }

                <div style="margin-bottom: 14px;">
                    <label style={label()}>{"Review Title"}</label>
                    <input
                        type="text"
                        value={draft.title.clone()}
                        oninput={on_title}
                        placeholder="Enter a title for your review"
                        style={input()}
                    />
                </div>

                <div style="margin-bottom: 14px;">
                    <label style={label()}>{"Rating"}</label>
                    <div style="display:flex; gap: 6px;">{ for stars }</div>
                </div>

                <div style="margin-bottom: 14px;">
                    <label style={label()}>{"Review Description"}</label>
                    <textarea
                        rows="4"
                        value={draft.description.clone()}
                        oninput={on_description}
                        placeholder="Share your experience about the school"
                        style={input()}
                    />
                </div>

                if !message.is_empty() {
                    <p style={error_text()}>{ (*message).clone() }</p>
                }

                <button type="submit" disabled={*loading} style={format!("{} width:100%;", btn_primary())}>
                    {"Submit Review"}
                </button>
            </form>
        </div>
    }
}

fn bind_new_school(draft: UseStateHandle<ReviewDraft>, mutator: fn(&mut NewSchool, String)) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let Some(i) = e.target_dyn_into::<HtmlInputElement>() else { return; };
        let mut d = (*draft).clone();
        mutator(&mut d.new_school, i.value());
        draft.set(d);
    })
}

fn bind_rating(draft: UseStateHandle<ReviewDraft>, update: impl Fn(RatingPicker) -> RatingPicker + 'static) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        let mut d = (*draft).clone();
        d.rating = update(d.rating);
        draft.set(d);
    })
}
