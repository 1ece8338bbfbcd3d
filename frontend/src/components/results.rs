use crate::Model;
use shared::{BmiCategory, IntensityLevel};
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(results) = &model.result else {
        return html! {};
    };

    let intensity_percent = match results.intensity {
        IntensityLevel::Low => 33.0,
        IntensityLevel::Moderate => 66.0,
        IntensityLevel::High => 100.0,
    };
    let intensity_class = match results.intensity {
        IntensityLevel::Low => "intensity-low",
        IntensityLevel::Moderate => "intensity-moderate",
        IntensityLevel::High => "intensity-high",
    };

    html! {
        <div class={classes!("results-container", intensity_class)}>
            <div class="result-header">
                <h2>
                    <i class="fa-solid fa-fire-flame-curved"></i>
                    { format!(" {:.1} kcal burnt", results.calories_kcal) }
                </h2>
                <div class="intensity-meter">
                    <div class="meter-label">{"Intensity:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", intensity_percent)}></div>
                    </div>
                    <div class="meter-value">{ results.intensity.to_string() }</div>
                </div>
            </div>

            <div class="detailed-results">
                <h3>{"Detailed Metrics"}</h3>
                <div class="result-bars">
                    <div class="result-item">
                        <div class="result-label">{"Calories per minute"}</div>
                        <div class="result-value">{ format!("{:.2} kcal/min", results.calories_per_minute) }</div>
                    </div>
                    <div class="result-item">
                        <div class="result-label">{"BMI"}</div>
                        <div class="result-value">{ format!("{:.2}", results.bmi) }</div>
                    </div>
                    <div class="result-item">
                        <div class="result-label">{"BMI category"}</div>
                        <div class="result-value">{ results.bmi_category.to_string() }</div>
                    </div>
                </div>

                <div class="category-scale">
                    { for BmiCategory::iter().map(|category| html! {
                        <span
                            class={classes!(
                                "category-chip",
                                (results.bmi_category == category).then_some("active")
                            )}
                        >
                            { category.to_string() }
                        </span>
                    })}
                </div>
            </div>
        </div>
    }
}
