//! Main module for the Student Status Predictor using Yew.
//! Wires the page model, the controller and the view components.

use gloo_timers::callback::Timeout;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use student_status::{
    chart::ChartJs,
    config::*,
    page::PageModel,
    schema::ExampleRecord,
    transport::FetchTransport,
    view::{Badge, ControlId, ProbabilityRow, Region, SUBMIT_BUTTON},
    FormView, PredictionController,
};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

mod components;

use components::{render_form, render_header, render_results, FormActions};

type PageController = PredictionController<YewView, FetchTransport, ChartJs>;

// ──────────────────────────────────────────────────────────────────────────────
// FormView over the shared page model

/// Mutates the shared `PageModel` and asks Yew to re-render afterwards.
#[derive(Clone)]
struct YewView {
    page: Rc<RefCell<PageModel>>,
    rerender: Callback<()>,
}

impl YewView {
    fn changed(&self) {
        self.rerender.emit(());
    }
}

impl FormView for YewView {
    fn field_value(&self, name: &str) -> Option<String> {
        self.page.field_value(name)
    }

    fn set_field_value(&self, name: &str, value: &str) -> bool {
        let written = self.page.set_field_value(name, value);
        self.changed();
        written
    }

    fn clear_fields(&self) {
        self.page.clear_fields();
        self.changed();
    }

    fn control_label(&self, control: ControlId) -> String {
        self.page.control_label(control)
    }

    fn set_control_state(&self, control: ControlId, disabled: bool, label: &str) {
        self.page.set_control_state(control, disabled, label);
        self.changed();
    }

    fn clear_alert(&self) {
        self.page.clear_alert();
        self.changed();
    }

    fn show_alert(&self, message: &str) {
        self.page.show_alert(message);
        self.changed();
    }

    fn show_prediction(&self, badge: Badge, rows: Vec<ProbabilityRow>) {
        self.page.show_prediction(badge, rows);
        self.changed();
    }

    fn set_result_visible(&self, visible: bool) {
        self.page.set_result_visible(visible);
        self.changed();
    }

    fn scroll_to(&self, region: Region) {
        self.page.scroll_to(region);
        self.changed();

        // Wait one tick so a section that was just shown has been laid out.
        let id = match region {
            Region::Form => INPUT_SECTION_ID,
            Region::Results => RESULT_SECTION_ID,
        };
        Timeout::new(0, move || scroll_into_view(id)).forget();
    }
}

fn scroll_into_view(id: &str) {
    match gloo_utils::document().get_element_by_id(id) {
        Some(el) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => debug!("No element #{} to scroll to", id),
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Page component: owns the page model and the controller.
#[function_component(App)]
fn app() -> Html {
    let force_update = use_force_update();
    let page = use_mut_ref(PageModel::new);

    let controller: Rc<PageController> = {
        let page = page.clone();
        let force_update = force_update.clone();
        use_memo((), move |_| {
            let view = YewView {
                page,
                rerender: Callback::from(move |_| force_update.force_update()),
            };
            PredictionController::new(
                view,
                FetchTransport,
                ChartJs::new(CHART_CANVAS_ID),
                ControllerConfig::default(),
            )
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = controller.submit(SUBMIT_BUTTON).await;
                debug!("Submission finished: {:?}", outcome);
            });
        })
    };

    let on_example = {
        let controller = controller.clone();
        Callback::from(move |example: ExampleRecord| controller.fill_example(example))
    };

    let on_reset = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.reset())
    };

    let on_field_input = {
        let page = page.clone();
        let force_update = force_update.clone();
        Callback::from(move |(name, value): (&'static str, String)| {
            page.borrow_mut().set_field(name, &value);
            force_update.force_update();
        })
    };

    let on_nav_toggle = {
        let page = page.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: ()| {
            page.borrow_mut().nav.toggle();
            force_update.force_update();
        })
    };

    let on_nav_link = {
        let page = page.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: ()| {
            page.borrow_mut().nav.close();
            force_update.force_update();
        })
    };

    let actions = FormActions {
        on_field_input,
        on_submit,
        on_reset,
        on_example,
    };

    // Render from a snapshot so no borrow outlives this function.
    let snapshot = page.borrow().clone();

    html! {
        <>
            { render_header(snapshot.nav, on_nav_toggle, on_nav_link) }
            <main class="container">
                { render_form(&snapshot, &actions) }
                { render_results(&snapshot) }
            </main>
        </>
    }
}

/// Entry point: installs logging and the panic hook, then mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    yew::Renderer::<App>::new().render();
}
