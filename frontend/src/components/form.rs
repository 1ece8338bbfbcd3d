use super::utils::debounce;
use crate::{Model, Msg, NumericField};
use shared::Gender;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

/// The seven bounded inputs plus the Predict/Reset buttons.
pub fn render_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="form-section">
            <div class="form-grid">
                { render_gender_select(model, link) }
                { render_number_input(link, "Age", "years", NumericField::Age, f64::from(model.form.age)) }
                { render_number_input(link, "Height", "cm", NumericField::Height, f64::from(model.form.height_cm)) }
                { render_number_input(link, "Weight", "kg", NumericField::Weight, f64::from(model.form.weight_kg)) }
                { render_number_input(link, "Duration", "min", NumericField::Duration, f64::from(model.form.duration_min)) }
                { render_number_input(link, "Heart rate", "bpm", NumericField::HeartRate, f64::from(model.form.heart_rate_bpm)) }
                { render_number_input(link, "Body temperature", "\u{b0}C", NumericField::BodyTemp, model.form.body_temp_c) }
            </div>

            <div class="button-container">
                <button
                    class="analyze-btn"
                    style="background-color: var(--danger-color);"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::Reset).emit(())
                    })}
                >
                    <i class="fa-solid fa-rotate-left"></i>{" Reset"}
                </button>
                <button
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::Predict).emit(())
                    })}
                    disabled={model.loading}
                >
                    { render_predict_button_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_gender_select(model: &Model, link: &Scope<Model>) -> Html {
    let handle_change = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match select.value().as_str() {
            "Female" => Msg::SetGender(Gender::Female),
            _ => Msg::SetGender(Gender::Male),
        }
    });

    html! {
        <div class="form-field">
            <label for="gender-select">{"Gender"}</label>
            <select id="gender-select" onchange={handle_change}>
                { for Gender::iter().map(|gender| html! {
                    <option
                        value={gender.to_string()}
                        selected={model.form.gender == gender}
                    >
                        { gender.to_string() }
                    </option>
                })}
            </select>
        </div>
    }
}

fn render_number_input(
    link: &Scope<Model>,
    label: &str,
    unit: &str,
    field: NumericField,
    value: f64,
) -> Html {
    let bounds = field.bounds();
    let current = value;
    let handle_change = link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match input.value().parse::<f64>() {
            Ok(parsed) => Msg::SetField(field, parsed),
            // Cleared or garbled entry snaps back to the previous value.
            Err(_) => Msg::SetField(field, current),
        }
    });

    let display = if bounds.step < 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value as i64)
    };

    html! {
        <div class="form-field">
            <label>{ format!("{} ({})", label, unit) }</label>
            <input
                type="number"
                min={bounds.min.to_string()}
                max={bounds.max.to_string()}
                step={bounds.step.to_string()}
                value={display}
                onchange={handle_change}
            />
        </div>
    }
}

fn render_predict_button_content(model: &Model) -> Html {
    if model.loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
    } else {
        html! { <><i class="fa-solid fa-calculator"></i>{" Predict Calories"}</> }
    }
}
