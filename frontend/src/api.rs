use crate::{Model, Msg};
use gloo_net::http::Request;
use shared::{PredictionRequest, PredictionResponse};
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;

pub fn send_prediction_request(link: Scope<Model>, request: PredictionRequest) {
    spawn_local(async move {
        let request = match Request::post("/api/predict").json(&request) {
            Ok(builder) => builder,
            Err(e) => {
                link.send_message(Msg::SetError(Some(format!("Failed to build request: {}", e))));
                return;
            }
        };

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<PredictionResponse>().await {
                        Ok(result) => link.send_message(Msg::PredictionResult(result)),
                        Err(e) => link.send_message(Msg::SetError(Some(format!(
                            "Failed to parse response: {}",
                            e
                        )))),
                    }
                } else {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    link.send_message(Msg::SetError(Some(format!(
                        "Server error: {} - {}",
                        status, body
                    ))));
                }
            }
            Err(e) => link.send_message(Msg::SetError(Some(format!("Network error: {}", e)))),
        }
    });
}
