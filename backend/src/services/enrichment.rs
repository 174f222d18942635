//! Nutrition enrichment pipeline
//!
//! Drives the classify → prompt → parse → fallback flow: build a prompt for
//! the food, ask Gemini for portion and calorie estimates, parse the
//! comma-separated reply, and substitute static fallback values whenever
//! anything along the way fails. The caller always gets a complete record.

use serde::Serialize;
use thiserror::Error;

use shared::{CalorieMode, Classification, NutritionRecord};

use crate::external::GeminiClient;

/// Classification result enriched with a nutrition estimate
#[derive(Debug, Serialize)]
pub struct EnrichedClassification {
    pub food: String,
    pub confidence: f32,
    pub is_piecewise: bool,
    #[serde(flatten)]
    pub nutrition: NutritionRecord,
}

/// Failure to parse a Gemini reply into a nutrition record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least {expected} comma-separated fields, got {got}")]
    TooFewFields { expected: usize, got: usize },

    #[error("field {index} is not a valid number: {value:?}")]
    InvalidNumber { index: usize, value: String },
}

/// Build the instruction prompt for a food and its calorie mode.
///
/// The requested field order here defines the positional order the reply
/// parser expects; the two must be kept in sync.
pub fn build_prompt(label: &str, mode: CalorieMode) -> String {
    let food_name = label.replace('_', " ");
    match mode {
        CalorieMode::Piece => format!(
            "For {}, provide the following values, separated by commas: \
             Weight per piece (g), Calories per piece (kcal), \
             Total weight of one serving (g), Total calories of one serving (kcal). \
             No extra text.",
            food_name
        ),
        CalorieMode::Serving => format!(
            "For {}, provide the following values, separated by commas: \
             Total weight (g), Total calories (kcal), Calories per 100 grams (kcal). \
             No extra text.",
            food_name
        ),
    }
}

fn parse_f64(fields: &[&str], index: usize) -> Result<f64, ParseError> {
    fields[index].parse().map_err(|_| ParseError::InvalidNumber {
        index,
        value: fields[index].to_string(),
    })
}

fn parse_u32(fields: &[&str], index: usize) -> Result<u32, ParseError> {
    fields[index].parse().map_err(|_| ParseError::InvalidNumber {
        index,
        value: fields[index].to_string(),
    })
}

/// Parse a Gemini reply into a nutrition record.
///
/// Strict positional parsing: split on commas, trim each segment, coerce in
/// the order requested by [`build_prompt`]. Extra trailing segments are
/// ignored; missing segments or non-numeric values are parse failures.
pub fn parse_reply(text: &str, mode: CalorieMode) -> Result<NutritionRecord, ParseError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    match mode {
        CalorieMode::Piece => {
            if fields.len() < 4 {
                return Err(ParseError::TooFewFields {
                    expected: 4,
                    got: fields.len(),
                });
            }
            Ok(NutritionRecord::Piece {
                weight_per_piece: parse_f64(&fields, 0)?,
                calories_per_piece: parse_u32(&fields, 1)?,
                total_weight: parse_f64(&fields, 2)?,
                total_calories: parse_u32(&fields, 3)?,
            })
        }
        CalorieMode::Serving => {
            if fields.len() < 3 {
                return Err(ParseError::TooFewFields {
                    expected: 3,
                    got: fields.len(),
                });
            }
            Ok(NutritionRecord::Serving {
                total_weight: parse_f64(&fields, 0)?,
                total_calories: parse_u32(&fields, 1)?,
                calories_per_100g: parse_u32(&fields, 2)?,
            })
        }
    }
}

/// Static nutrition fallback for a food and mode. Total function: a per-food
/// table entry wins when its mode matches, otherwise mode defaults apply.
pub fn fallback_record(label: &str, mode: CalorieMode) -> NutritionRecord {
    match (label, mode) {
        ("fried_rice", CalorieMode::Serving) => NutritionRecord::Serving {
            total_weight: 300.0,
            total_calories: 420,
            calories_per_100g: 140,
        },
        (_, CalorieMode::Serving) => NutritionRecord::Serving {
            total_weight: 200.0,
            total_calories: 300,
            calories_per_100g: 150,
        },
        (_, CalorieMode::Piece) => NutritionRecord::Piece {
            calories_per_piece: 250,
            weight_per_piece: 100.0,
            total_weight: 300.0,
            total_calories: 750,
        },
    }
}

/// Enrich a classification with nutrition estimates.
///
/// Invariant: the returned record is always valid for the label's mode, no
/// matter how the external call or parsing fails.
pub async fn enrich(
    classification: Classification,
    gemini: &GeminiClient,
) -> EnrichedClassification {
    let mode = CalorieMode::for_label(&classification.label);
    let prompt = build_prompt(&classification.label, mode);
    tracing::debug!(food = %classification.label, "Requesting nutrition estimates");

    let nutrition = match gemini.generate(&prompt).await {
        Ok(reply) => match parse_reply(&reply, mode) {
            Ok(record) if record.is_valid() => record,
            Ok(_) => {
                tracing::warn!(
                    food = %classification.label,
                    "Reply contained non-positive values, using fallback"
                );
                fallback_record(&classification.label, mode)
            }
            Err(err) => {
                tracing::warn!(
                    food = %classification.label,
                    error = %err,
                    "Failed to parse reply, using fallback"
                );
                fallback_record(&classification.label, mode)
            }
        },
        Err(err) => {
            tracing::warn!(
                food = %classification.label,
                error = %err,
                "Text generation failed, using fallback"
            );
            fallback_record(&classification.label, mode)
        }
    };

    EnrichedClassification {
        food: classification.label,
        confidence: classification.confidence,
        is_piecewise: mode.is_piecewise(),
        nutrition,
    }
}
