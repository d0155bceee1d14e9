//! The fixed-shape record sent to the prediction API.

use serde::{Serialize, Serializer};

/// Identifier used when the caller does not send `uid`.
pub const DEFAULT_UID: &str = "web-client";

/// Largest magnitude where every whole `f64` is an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Demographics plus blood panel for one forwarded request.
///
/// Field names double as the query keys and the JSON keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRecord {
    pub uid: String,
    pub age: i64,
    pub gender: i64,
    /// Red cell distribution width.
    #[serde(serialize_with = "compact_number")]
    pub rdw: f64,
    /// White blood cell count.
    #[serde(serialize_with = "compact_number")]
    pub wbc: f64,
    /// Red blood cell count.
    #[serde(serialize_with = "compact_number")]
    pub rbc: f64,
    /// Hemoglobin.
    #[serde(serialize_with = "compact_number")]
    pub hgb: f64,
    /// Hematocrit.
    #[serde(serialize_with = "compact_number")]
    pub hct: f64,
    /// Mean corpuscular volume.
    #[serde(serialize_with = "compact_number")]
    pub mcv: f64,
    /// Mean corpuscular hemoglobin.
    #[serde(serialize_with = "compact_number")]
    pub mch: f64,
    /// Mean corpuscular hemoglobin concentration.
    #[serde(serialize_with = "compact_number")]
    pub mchc: f64,
    /// Platelet count.
    #[serde(serialize_with = "compact_number")]
    pub plt: f64,
    /// Neutrophils, percent.
    #[serde(serialize_with = "compact_number")]
    pub neu: f64,
    /// Eosinophils, percent.
    #[serde(serialize_with = "compact_number")]
    pub eos: f64,
    /// Basophils, percent.
    #[serde(serialize_with = "compact_number")]
    pub bas: f64,
    /// Lymphocytes, percent.
    #[serde(serialize_with = "compact_number")]
    pub lym: f64,
    /// Monocytes, percent.
    #[serde(serialize_with = "compact_number")]
    pub mon: f64,
    /// Erythrocyte sedimentation rate.
    #[serde(serialize_with = "compact_number")]
    pub soe: f64,
    /// Total cholesterol.
    #[serde(serialize_with = "compact_number")]
    pub chol: f64,
    /// Glucose.
    #[serde(serialize_with = "compact_number")]
    pub glu: f64,
}

impl Default for HealthRecord {
    fn default() -> Self {
        Self {
            uid: DEFAULT_UID.to_string(),
            age: 0,
            gender: 0,
            rdw: 0.0,
            wbc: 0.0,
            rbc: 0.0,
            hgb: 0.0,
            hct: 0.0,
            mcv: 0.0,
            mch: 0.0,
            mchc: 0.0,
            plt: 0.0,
            neu: 0.0,
            eos: 0.0,
            bas: 0.0,
            lym: 0.0,
            mon: 0.0,
            soe: 0.0,
            chol: 0.0,
            glu: 0.0,
        }
    }
}

/// Write whole numbers as JSON integers (`0`, `250`) and everything else as floats.
fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
