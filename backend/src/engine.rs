use crate::model::Predictor;
use shared::{BmiCategory, FEATURE_COUNT, IntensityLevel, PredictionRequest, PredictionResponse};

/// Model input row, in the order the regressor was trained on:
/// [gender, age, height, weight, duration, heart_rate, body_temp].
pub fn feature_vector(request: &PredictionRequest) -> [f64; FEATURE_COUNT] {
    [
        request.gender.encoded(),
        f64::from(request.age),
        f64::from(request.height_cm),
        f64::from(request.weight_kg),
        f64::from(request.duration_min),
        f64::from(request.heart_rate_bpm),
        request.body_temp_c,
    ]
}

/// Per-minute burn rate. The duration domain starts at 1, but a zero
/// duration must yield 0 rather than a NaN/inf leaking into the response.
pub fn calories_per_minute(calories_kcal: f64, duration_min: i32) -> f64 {
    if duration_min > 0 {
        calories_kcal / f64::from(duration_min)
    } else {
        0.0
    }
}

pub fn bmi(weight_kg: i32, height_cm: i32) -> f64 {
    let height_m = f64::from(height_cm) / 100.0;
    f64::from(weight_kg) / (height_m * height_m)
}

/// Runs the full prediction pipeline: clamp, encode, infer, derive.
/// Synchronous and deterministic; the model call cannot fail once the
/// artifact is loaded.
pub fn predict(model: &dyn Predictor, request: &PredictionRequest) -> PredictionResponse {
    let request = request.clamped();
    let calories_kcal = model.predict(&feature_vector(&request));
    let bmi = bmi(request.weight_kg, request.height_cm);

    PredictionResponse {
        calories_kcal,
        calories_per_minute: calories_per_minute(calories_kcal, request.duration_min),
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        intensity: IntensityLevel::from_heart_rate(request.heart_rate_bpm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Gender;

    /// Stand-in regressor returning a fixed burn, plus a copy of the row
    /// it was handed so tests can assert on the exact feature order.
    struct FixedPredictor {
        calories: f64,
        seen: std::sync::Mutex<Option<[f64; FEATURE_COUNT]>>,
    }

    impl FixedPredictor {
        fn new(calories: f64) -> Self {
            Self {
                calories,
                seen: std::sync::Mutex::new(None),
            }
        }
    }

    impl Predictor for FixedPredictor {
        fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
            *self.seen.lock().unwrap() = Some(*features);
            self.calories
        }
    }

    fn example_request() -> PredictionRequest {
        PredictionRequest {
            gender: Gender::Male,
            age: 25,
            height_cm: 170,
            weight_kg: 70,
            duration_min: 30,
            heart_rate_bpm: 100,
            body_temp_c: 37.0,
        }
    }

    #[test]
    fn feature_vector_order_is_fixed() {
        let vector = feature_vector(&example_request());
        assert_eq!(vector, [1.0, 25.0, 170.0, 70.0, 30.0, 100.0, 37.0]);

        let mut female = example_request();
        female.gender = Gender::Female;
        assert_eq!(feature_vector(&female)[0], 0.0);
    }

    #[test]
    fn end_to_end_example() {
        let model = FixedPredictor::new(240.0);
        let response = predict(&model, &example_request());

        assert_eq!(
            model.seen.lock().unwrap().unwrap(),
            [1.0, 25.0, 170.0, 70.0, 30.0, 100.0, 37.0]
        );
        assert_eq!(response.calories_kcal, 240.0);
        assert!((response.calories_per_minute - 8.0).abs() < 1e-9);
        let expected_bmi = 70.0 / (1.7_f64 * 1.7_f64);
        assert!((response.bmi - expected_bmi).abs() < 1e-12);
        assert_eq!((response.bmi * 100.0).round() / 100.0, 24.22);
        assert_eq!(response.bmi_category, BmiCategory::NormalWeight);
        assert_eq!(response.intensity, IntensityLevel::Moderate);
    }

    #[test]
    fn bmi_in_threshold_gap_reports_obesity() {
        // 90 kg at 190 cm is a BMI of 24.93, inside [24.9, 25).
        let model = FixedPredictor::new(100.0);
        let mut request = example_request();
        request.weight_kg = 90;
        request.height_cm = 190;

        let response = predict(&model, &request);
        assert!(response.bmi >= 24.9 && response.bmi < 25.0);
        assert_eq!(response.bmi_category, BmiCategory::Obesity);
    }

    #[test]
    fn per_minute_rate_guards_zero_duration() {
        assert_eq!(calories_per_minute(240.0, 0), 0.0);
        assert!((calories_per_minute(240.0, 60) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_domain_request_is_clamped_before_inference() {
        let model = FixedPredictor::new(50.0);
        let mut request = example_request();
        request.heart_rate_bpm = 999;
        request.age = -3;

        let response = predict(&model, &request);
        let seen = model.seen.lock().unwrap().unwrap();
        assert_eq!(seen[1], 1.0);
        assert_eq!(seen[5], 200.0);
        assert_eq!(response.intensity, IntensityLevel::High);
    }

    #[test]
    fn high_and_low_intensity_edges() {
        let model = FixedPredictor::new(50.0);

        let mut request = example_request();
        request.heart_rate_bpm = 99;
        assert_eq!(predict(&model, &request).intensity, IntensityLevel::Low);

        request.heart_rate_bpm = 150;
        assert_eq!(predict(&model, &request).intensity, IntensityLevel::High);
    }
}
