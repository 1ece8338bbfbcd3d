use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-fire"></i> {" Calories Burnt Prediction"}</h1>
            <p class="subtitle">{"Predicts the calories burnt based on your input parameters"}</p>
        </header>
    }
}
