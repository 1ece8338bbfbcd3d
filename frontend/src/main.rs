mod api;
mod components;

use components::form::render_form;
use components::header::render_header;
use components::results::render_results;
use components::theme_toggle::render_theme_toggle;
use components::utils::render_error_message;
use gloo_storage::{LocalStorage, Storage};
use shared::{FieldBounds, Gender, PredictionRequest, PredictionResponse, bounds};
use yew::prelude::*;

/// Identifies which numeric input changed, so one message covers all six.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NumericField {
    Age,
    Height,
    Weight,
    Duration,
    HeartRate,
    BodyTemp,
}

impl NumericField {
    pub fn bounds(self) -> FieldBounds {
        match self {
            NumericField::Age => bounds::AGE,
            NumericField::Height => bounds::HEIGHT_CM,
            NumericField::Weight => bounds::WEIGHT_KG,
            NumericField::Duration => bounds::DURATION_MIN,
            NumericField::HeartRate => bounds::HEART_RATE_BPM,
            NumericField::BodyTemp => bounds::BODY_TEMP_C,
        }
    }
}

// Yew msg components
pub enum Msg {
    // Form edits
    SetGender(Gender),
    SetField(NumericField, f64),

    // Prediction lifecycle
    Predict,
    PredictionResult(PredictionResponse),

    // UI states
    SetError(Option<String>),
    Reset,
    ToggleTheme,
}

// Main component
pub struct Model {
    pub form: PredictionRequest,
    pub result: Option<PredictionResponse>,
    pub loading: bool,
    pub error: Option<String>,
    pub theme: String,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme: String = LocalStorage::get("theme").unwrap_or_else(|_| "light".to_string());
        if theme == "dark" {
            let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
            body.class_list().add_1("dark-mode").unwrap();
        }

        Self {
            form: PredictionRequest::default(),
            result: None,
            loading: false,
            error: None,
            theme,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Form edits
            Msg::SetGender(gender) => {
                self.form.gender = gender;
                true
            }
            Msg::SetField(field, value) => self.handle_set_field(field, value),

            // Prediction lifecycle
            Msg::Predict => self.handle_predict(ctx),
            Msg::PredictionResult(response) => {
                self.result = Some(response);
                self.loading = false;
                true
            }

            // UI states
            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
            Msg::Reset => self.handle_reset(),
            Msg::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                { render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { render_form(self, ctx) }
                    { render_error_message(self) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Calories Burnt Prediction | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_set_field(&mut self, field: NumericField, value: f64) -> bool {
        // The input element already carries min/max/step, but typed entry
        // can still land outside them; clamp instead of erroring.
        let value = field.bounds().clamp(value);
        match field {
            NumericField::Age => self.form.age = value as i32,
            NumericField::Height => self.form.height_cm = value as i32,
            NumericField::Weight => self.form.weight_kg = value as i32,
            NumericField::Duration => self.form.duration_min = value as i32,
            NumericField::HeartRate => self.form.heart_rate_bpm = value as i32,
            NumericField::BodyTemp => self.form.body_temp_c = value,
        }
        true
    }

    fn handle_predict(&mut self, ctx: &Context<Self>) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        api::send_prediction_request(ctx.link().clone(), self.form);
        true
    }

    fn handle_reset(&mut self) -> bool {
        self.form = PredictionRequest::default();
        self.result = None;
        self.error = None;
        self.loading = false;
        true
    }

    fn handle_toggle_theme(&mut self) -> bool {
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

        if self.theme == "light" {
            self.theme = "dark".to_string();
            body.class_list().add_1("dark-mode").unwrap();
        } else {
            self.theme = "light".to_string();
            body.class_list().remove_1("dark-mode").unwrap();
        }
        LocalStorage::set("theme", self.theme.clone()).ok();

        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
