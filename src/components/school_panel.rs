use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::style::{card, input};
use super::Loader;
use crate::api::HttpApi;
use crate::browser;
use crate::config::AppConfig;
use crate::listing::{self, count_label, filter_schools, school_route, Tab};
use crate::models::School;

#[function_component(SchoolPanel)]
pub fn school_panel() -> Html {
    let schools = use_state(Vec::<School>::new);
    let loading = use_state(|| true);
    let term = use_state(String::new);
    let tab = use_state(Tab::default);

    // Load once on mount
    {
        let schools = schools.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = HttpApi::new(AppConfig::from_env());
                schools.set(listing::load_schools(&api).await);
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Loader /> };
    }

    let on_search = {
        let term = term.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(i) = e.target_dyn_into::<HtmlInputElement>() {
                term.set(i.value());
            }
        })
    };
    let on_clear = {
        let term = term.clone();
        Callback::from(move |_: MouseEvent| term.set(String::new()))
    };
    let tab_button = |t: Tab| {
        let tab = tab.clone();
        let active = *tab == t;
        let style = if active {
            "flex:1; padding:12px; border:none; border-radius:10px; background:#1b66ff; color:#fff; font-weight:600; cursor:pointer;"
        } else {
            "flex:1; padding:12px; border:none; border-radius:10px; background:transparent; color:#444; font-weight:600; cursor:pointer;"
        };
        html! {
            <button style={style} onclick={Callback::from(move |_: MouseEvent| tab.set(t))}>
                { t.label() }
            </button>
        }
    };

    let body = match *tab {
        Tab::Schools => {
            let visible = filter_schools(&schools, &term);
            html! {
                <div>
                    <input
                        type="text"
                        placeholder="Search schools..."
                        value={(*term).clone()}
                        oninput={on_search}
                        style={format!("{} margin-bottom: 16px;", input())}
                    />
                    <h3 style="margin: 0 0 12px 0;">{ count_label(visible.len()) }</h3>
                    if visible.is_empty() {
                        <div style={format!("{} text-align:center;", card())}>
                            <p style="opacity: 0.7;">{"No schools found matching your search."}</p>
                            <button onclick={on_clear} style="border:none; background:none; color:#1b66ff; cursor:pointer;">
                                {"Clear search"}
                            </button>
                        </div>
                    } else {
                        <div style="display:flex; flex-direction:column; gap: 10px; padding-bottom: 60px;">
                            { for visible.into_iter().map(school_row) }
                        </div>
                    }
                </div>
            }
        }
        Tab::ComingSoon => {
            let back = {
                let tab = tab.clone();
                Callback::from(move |_: MouseEvent| tab.set(Tab::Schools))
            };
            html! {
                <div style={format!("{} text-align:center;", card())}>
                    <h1 style="margin: 0 0 8px 0;">{"Coming Soon"}</h1>
                    <p style="opacity: 0.75;">{"We're working on something amazing for this section."}</p>
                    <button onclick={back} style="margin-top: 16px; padding:10px 20px; border:none; border-radius:10px; background:#1b66ff; color:#fff; cursor:pointer;">
                        {"Back to Schools"}
                    </button>
                </div>
            }
        }
    };

    html! {
        <section style="padding: 24px;">
            <h2 style="margin: 0 0 4px 0;">{"Explore"}</h2>
            <p style="margin: 0 0 20px 0; opacity: 0.7;">{"Find the best schools based on student reviews"}</p>
            <div style="display:flex; gap: 4px; background:#fff; border-radius:12px; padding: 4px; margin-bottom: 20px;">
                { tab_button(Tab::Schools) }
                { tab_button(Tab::ComingSoon) }
            </div>
            { body }
        </section>
    }
}

fn school_row(school: &School) -> Html {
    let onclick = {
        let route = school_route(&school.id);
        Callback::from(move |_: MouseEvent| browser::navigate(&route))
    };
    let place = if school.state.is_empty() {
        school.city.clone()
    } else {
        format!("{}, {}", school.city, school.state)
    };
    html! {
        <div {onclick} style={format!("{} display:flex; align-items:center; gap: 12px; cursor:pointer;", card())}>
            <div style="flex:1;">
                <div style="font-weight: 700; font-size: 16px;">{ school.name.clone() }</div>
                <div style="font-size: 13px; opacity: 0.7; margin-top: 4px;">{ place }</div>
            </div>
            <div style="text-align:right;">
                <span style="font-size: 13px; font-weight:700; padding: 4px 12px; border-radius: 999px; background:#f07a1a; color:#fff;">
                    { format!("{} Reviews", school.review_count) }
                </span>
                <div style="font-size: 12px; color:#1b66ff; margin-top: 4px;">{"View details"}</div>
            </div>
        </div>
    }
}
