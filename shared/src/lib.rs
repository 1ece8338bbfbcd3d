use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Number of features the regression model consumes.
pub const FEATURE_COUNT: usize = 7;

/// Feature order the model was trained on. Position 0 is the encoded
/// gender; reordering corrupts predictions without any runtime error,
/// so both the engine and the artifact loader check against this list.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "gender",
    "age",
    "height",
    "weight",
    "duration",
    "heart_rate",
    "body_temp",
];

/// Inclusive range plus input step for one numeric form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn clamp_int(&self, value: i32) -> i32 {
        (value as f64).clamp(self.min, self.max) as i32
    }
}

/// Bounds for every numeric field, shared by the form inputs and the
/// backend's defensive clamp before inference.
pub mod bounds {
    use super::FieldBounds;

    pub const AGE: FieldBounds = FieldBounds { min: 1.0, max: 120.0, step: 1.0 };
    pub const HEIGHT_CM: FieldBounds = FieldBounds { min: 50.0, max: 250.0, step: 1.0 };
    pub const WEIGHT_KG: FieldBounds = FieldBounds { min: 20.0, max: 200.0, step: 1.0 };
    pub const DURATION_MIN: FieldBounds = FieldBounds { min: 1.0, max: 300.0, step: 1.0 };
    pub const HEART_RATE_BPM: FieldBounds = FieldBounds { min: 40.0, max: 200.0, step: 1.0 };
    pub const BODY_TEMP_C: FieldBounds = FieldBounds { min: 30.0, max: 45.0, step: 0.1 };
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Encoding the model was trained with: Male 1, Female 0.
    pub fn encoded(self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum BmiCategory {
    Underweight,
    #[strum(serialize = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Ordered threshold table, first match wins. The table deliberately
    /// leaves [24.9, 25) unmatched by the first three arms, so a BMI in
    /// that window resolves to Obesity. Downstream consumers rely on the
    /// table as-is; do not close the gap here.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            BmiCategory::NormalWeight
        } else if (25.0..29.9).contains(&bmi) {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum IntensityLevel {
    Low,
    Moderate,
    High,
}

impl IntensityLevel {
    /// Coarse bucket from raw heart rate alone, no age adjustment.
    pub fn from_heart_rate(bpm: i32) -> Self {
        if bpm < 100 {
            IntensityLevel::Low
        } else if bpm < 150 {
            IntensityLevel::Moderate
        } else {
            IntensityLevel::High
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct PredictionRequest {
    pub gender: Gender,
    pub age: i32,
    pub height_cm: i32,
    pub weight_kg: i32,
    pub duration_min: i32,
    pub heart_rate_bpm: i32,
    pub body_temp_c: f64,
}

impl PredictionRequest {
    /// Pull every field back into its domain. The form already prevents
    /// out-of-range entry, so this is a no-op for anything a browser
    /// sends, but raw API clients get the same silent-clamp semantics.
    pub fn clamped(&self) -> Self {
        Self {
            gender: self.gender,
            age: bounds::AGE.clamp_int(self.age),
            height_cm: bounds::HEIGHT_CM.clamp_int(self.height_cm),
            weight_kg: bounds::WEIGHT_KG.clamp_int(self.weight_kg),
            duration_min: bounds::DURATION_MIN.clamp_int(self.duration_min),
            heart_rate_bpm: bounds::HEART_RATE_BPM.clamp_int(self.heart_rate_bpm),
            body_temp_c: bounds::BODY_TEMP_C.clamp(self.body_temp_c),
        }
    }
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 20,
            height_cm: 165,
            weight_kg: 70,
            duration_min: 30,
            heart_rate_bpm: 80,
            body_temp_c: 37.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PredictionResponse {
    pub calories_kcal: f64,
    pub calories_per_minute: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub intensity: IntensityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_encoding() {
        assert_eq!(Gender::Male.encoded(), 1.0);
        assert_eq!(Gender::Female.encoded(), 0.0);
    }

    #[test]
    fn bmi_categories_match_threshold_table() {
        assert_eq!(BmiCategory::from_bmi(15.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(24.2), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Obesity);
        assert_eq!(BmiCategory::from_bmi(35.0), BmiCategory::Obesity);
    }

    #[test]
    fn bmi_gap_between_normal_and_overweight_resolves_to_obesity() {
        // 24.9 <= bmi < 25 is matched by neither NormalWeight nor
        // Overweight; the fallthrough arm wins.
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Obesity);
        assert_eq!(BmiCategory::from_bmi(24.95), BmiCategory::Obesity);
        assert_eq!(BmiCategory::from_bmi(24.999), BmiCategory::Obesity);
    }

    #[test]
    fn intensity_buckets_cover_heart_rate_domain() {
        for bpm in 40..100 {
            assert_eq!(IntensityLevel::from_heart_rate(bpm), IntensityLevel::Low);
        }
        for bpm in 100..150 {
            assert_eq!(IntensityLevel::from_heart_rate(bpm), IntensityLevel::Moderate);
        }
        for bpm in 150..=200 {
            assert_eq!(IntensityLevel::from_heart_rate(bpm), IntensityLevel::High);
        }
    }

    #[test]
    fn clamping_pulls_fields_to_nearest_bound() {
        let request = PredictionRequest {
            gender: Gender::Female,
            age: 0,
            height_cm: 400,
            weight_kg: 10,
            duration_min: 500,
            heart_rate_bpm: 39,
            body_temp_c: 50.0,
        };
        let clamped = request.clamped();
        assert_eq!(clamped.age, 1);
        assert_eq!(clamped.height_cm, 250);
        assert_eq!(clamped.weight_kg, 20);
        assert_eq!(clamped.duration_min, 300);
        assert_eq!(clamped.heart_rate_bpm, 40);
        assert_eq!(clamped.body_temp_c, 45.0);
    }

    #[test]
    fn in_domain_request_is_unchanged_by_clamping() {
        let request = PredictionRequest::default();
        assert_eq!(request.clamped(), request);
    }

    #[test]
    fn category_labels_render_for_display() {
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
        assert_eq!(BmiCategory::Obesity.to_string(), "Obesity");
        assert_eq!(IntensityLevel::Moderate.to_string(), "Moderate");
    }
}
