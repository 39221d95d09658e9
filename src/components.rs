//! Pure Yew view components for the prediction page.
//!
//! Everything here renders from props or a `PageModel` snapshot; state
//! changes go back through callbacks.

use student_status::config::*;
use student_status::page::{NavState, PageModel};
use student_status::schema::ExampleRecord;
use student_status::view::SUBMIT_BUTTON;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

/// Header with the collapsible navigation menu.
///
/// Clicking any link inside the open menu closes it.
pub fn render_header(nav: NavState, on_toggle: Callback<()>, on_link: Callback<()>) -> Html {
    let onclick_toggle = on_toggle.reform(|_: MouseEvent| ());
    let onclick_menu = Callback::from(move |e: MouseEvent| {
        let is_link = e
            .target_dyn_into::<Element>()
            .map(|el| el.tag_name().eq_ignore_ascii_case("a"))
            .unwrap_or(false);
        if is_link {
            on_link.emit(());
        }
    });

    html! {
        <header class={nav.header_class()}>
            <div class="brand">{ "Student Status Predictor" }</div>
            <button id={NAV_TOGGLE_ID} class="nav-toggle" aria-label="Toggle navigation"
                onclick={onclick_toggle}>
                <span class="nav-toggle-bar"></span>
                <span class="nav-toggle-bar"></span>
                <span class="nav-toggle-bar"></span>
            </button>
            <nav id={NAV_MENU_ID} class={nav.menu_class()} onclick={onclick_menu}>
                <a href={format!("#{}", INPUT_SECTION_ID)}>{ "Predict" }</a>
                <a href={format!("#{}", RESULT_SECTION_ID)}>{ "Results" }</a>
            </nav>
        </header>
    }
}

/// A single labelled numeric input.
#[derive(Properties, PartialEq)]
pub struct FeatureFieldProps {
    pub name: &'static str,
    pub value: AttrValue,
    pub on_input: Callback<(&'static str, String)>,
}

#[function_component(FeatureField)]
pub fn feature_field(props: &FeatureFieldProps) -> Html {
    let oninput = {
        let name = props.name;
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((name, input.value()));
        })
    };

    html! {
        <div class="form-group">
            <label for={props.name}>{ props.name }</label>
            <input type="text"
                inputmode="decimal"
                id={props.name}
                name={props.name}
                value={props.value.clone()}
                oninput={oninput}
            />
        </div>
    }
}

/// Callbacks wired into the input section.
#[derive(Clone)]
pub struct FormActions {
    pub on_field_input: Callback<(&'static str, String)>,
    pub on_submit: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_example: Callback<ExampleRecord>,
}

/// Input section: example buttons, one input per feature, submit and reset.
///
/// Enter anywhere inside the form submits through the controller instead of
/// the browser.
pub fn render_form(page: &PageModel, actions: &FormActions) -> Html {
    let onkeypress = {
        let on_submit = actions.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());
    let submit = page.control(SUBMIT_BUTTON);
    let submit_label = submit.map(|s| s.label.clone()).unwrap_or_default();
    let submit_disabled = submit.map(|s| s.disabled).unwrap_or(false);

    html! {
        <section id={INPUT_SECTION_ID} class="section-input">
            <div class="example-buttons">
                { [ExampleRecord::Dropout, ExampleRecord::Graduate].into_iter().map(|example| {
                    let on_example = actions.on_example.clone();
                    html! {
                        <button type="button" class="btn-secondary"
                            onclick={Callback::from(move |_: MouseEvent| on_example.emit(example))}>
                            { example.caption() }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
            <form id={FORM_ID} {onkeypress} {onsubmit}>
                <div class="form-grid">
                    { page.fields().map(|(name, value)| html! {
                        <FeatureField
                            key={name}
                            name={name}
                            value={AttrValue::from(value.to_string())}
                            on_input={actions.on_field_input.clone()}
                        />
                    }).collect::<Html>() }
                </div>
                <div class="form-actions">
                    <button type="button"
                        id={SUBMIT_BUTTON.0}
                        class="btn-primary"
                        disabled={submit_disabled}
                        onclick={actions.on_submit.reform(|_: MouseEvent| ())}>
                        if submit_disabled {
                            <><span class="loading"></span>{ " " }</>
                        }
                        { submit_label }
                    </button>
                    <button type="button" class="btn-secondary"
                        onclick={actions.on_reset.reform(|_: MouseEvent| ())}>
                        { "Reset" }
                    </button>
                </div>
            </form>
        </section>
    }
}

/// Result section: alert, badge, probability list and the chart canvas.
///
/// The canvas is always mounted so the chart can be drawn before the section
/// becomes visible.
pub fn render_results(page: &PageModel) -> Html {
    let style = if page.result_visible {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        <section id={RESULT_SECTION_ID} class="section-result" {style}>
            <div id={ALERT_CONTAINER_ID}>
                if let Some(message) = &page.alert {
                    <div class="alert alert-error">
                        <strong>{ "Error:" }</strong>{ " " }{ message.clone() }
                    </div>
                }
            </div>
            <div class="prediction">
                if let Some(badge) = &page.badge {
                    <span id={PREDICTION_BADGE_ID} class={badge.class.clone()}>
                        { badge.text.clone() }
                    </span>
                } else {
                    <span id={PREDICTION_BADGE_ID} class="prediction-badge"></span>
                }
            </div>
            <div id={PROBABILITY_LIST_ID} class="prob-list">
                { page.rows.iter().map(|row| html! {
                    <div class="prob-item">
                        <span class="prob-item-label">{ row.label.clone() }</span>
                        <span class="prob-item-value">{ row.value.clone() }</span>
                    </div>
                }).collect::<Html>() }
            </div>
            <div class="chart-container">
                <canvas id={CHART_CANVAS_ID}></canvas>
            </div>
        </section>
    }
}
