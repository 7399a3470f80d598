// Wire types for the `images:annotate` endpoint, plus the renderer that
// turns a response into console output. Field names follow the service's
// JSON casing.

use serde::{Deserialize, Serialize};

use crate::feature::{Feature, FeatureKind};
use crate::images::ImagePayload;

const RESPONSE_HEADER: &str = "I found these things:\n\n";
const NOTHING: &str = "nothing";

#[derive(Debug, Serialize)]
pub struct BatchAnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ImageContent {
    pub content: String,
}

impl BatchAnnotateRequest {
    /// One image, one feature. The endpoint accepts several of each per
    /// batch; this tool never sends more.
    pub fn single(image: ImagePayload, feature: Feature) -> Self {
        BatchAnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: image.content,
                },
                features: vec![feature],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BatchAnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

/// Per-image result. Only the list matching the requested feature is
/// populated by the service; the rest deserialize to their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotateImageResponse {
    pub face_annotations: Vec<FaceAnnotation>,
    pub landmark_annotations: Vec<EntityAnnotation>,
    pub logo_annotations: Vec<EntityAnnotation>,
    pub label_annotations: Vec<EntityAnnotation>,
    pub text_annotations: Vec<EntityAnnotation>,
    pub safe_search_annotation: Option<SafeSearchAnnotation>,
    pub image_properties_annotation: Option<ImageProperties>,
    pub error: Option<Status>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityAnnotation {
    pub description: String,
    pub score: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaceAnnotation {
    pub detection_confidence: f32,
    pub joy_likelihood: String,
    pub sorrow_likelihood: String,
    pub anger_likelihood: String,
    pub surprise_likelihood: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SafeSearchAnnotation {
    pub adult: String,
    pub spoof: String,
    pub medical: String,
    pub violence: String,
    pub racy: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProperties {
    pub dominant_colors: DominantColors,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DominantColors {
    pub colors: Vec<ColorInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorInfo {
    pub color: Color,
    pub score: f32,
    pub pixel_fraction: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

/// Per-image error status from the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Status {
    pub code: i32,
    pub message: String,
}

/// Render the annotation list matching the requested feature. Scored
/// entries keep the `score: description` line format; an empty list
/// renders the literal `nothing`.
pub fn format_response(kind: FeatureKind, response: &AnnotateImageResponse) -> String {
    let lines = match kind {
        FeatureKind::LabelDetection | FeatureKind::TypeUnspecified => {
            entity_lines(&response.label_annotations)
        }
        FeatureKind::LandmarkDetection => entity_lines(&response.landmark_annotations),
        FeatureKind::LogoDetection => entity_lines(&response.logo_annotations),
        FeatureKind::TextDetection => text_lines(&response.text_annotations),
        FeatureKind::FaceDetection => face_lines(&response.face_annotations),
        FeatureKind::SafeSearchDetection => {
            safe_search_lines(response.safe_search_annotation.as_ref())
        }
        FeatureKind::ImageProperties => color_lines(response.image_properties_annotation.as_ref()),
    };

    let mut message = String::from(RESPONSE_HEADER);
    if lines.is_empty() {
        message.push_str(NOTHING);
    } else {
        for line in &lines {
            message.push_str(line);
            message.push('\n');
        }
    }
    message
}

fn entity_lines(entities: &[EntityAnnotation]) -> Vec<String> {
    entities
        .iter()
        .map(|e| format!("{:.3}: {}", e.score, e.description))
        .collect()
}

// The first text annotation carries the full extracted text; the rest
// repeat it word by word.
fn text_lines(texts: &[EntityAnnotation]) -> Vec<String> {
    texts
        .first()
        .map(|t| t.description.lines().map(str::to_owned).collect())
        .unwrap_or_default()
}

fn face_lines(faces: &[FaceAnnotation]) -> Vec<String> {
    faces
        .iter()
        .map(|f| {
            format!(
                "{:.3}: joy {}, sorrow {}, anger {}, surprise {}",
                f.detection_confidence,
                f.joy_likelihood,
                f.sorrow_likelihood,
                f.anger_likelihood,
                f.surprise_likelihood
            )
        })
        .collect()
}

fn safe_search_lines(annotation: Option<&SafeSearchAnnotation>) -> Vec<String> {
    match annotation {
        Some(s) => vec![
            format!("adult: {}", s.adult),
            format!("spoof: {}", s.spoof),
            format!("medical: {}", s.medical),
            format!("violence: {}", s.violence),
            format!("racy: {}", s.racy),
        ],
        None => Vec::new(),
    }
}

fn color_lines(properties: Option<&ImageProperties>) -> Vec<String> {
    properties
        .map(|p| {
            p.dominant_colors
                .colors
                .iter()
                .map(|c| {
                    format!(
                        "{:.3}: rgb({}, {}, {})",
                        c.score,
                        c.color.red.round() as u32,
                        c.color.green.round() as u32,
                        c.color.blue.round() as u32
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(f32, &str)]) -> Vec<EntityAnnotation> {
        pairs
            .iter()
            .map(|(score, description)| EntityAnnotation {
                description: description.to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn labels_render_score_and_description_lines() {
        let response = AnnotateImageResponse {
            label_annotations: labels(&[(0.987, "Cat"), (0.5, "Animal")]),
            ..Default::default()
        };
        assert_eq!(
            format_response(FeatureKind::LabelDetection, &response),
            "I found these things:\n\n0.987: Cat\n0.500: Animal\n"
        );
    }

    #[test]
    fn empty_response_renders_nothing() {
        let response = AnnotateImageResponse::default();
        assert_eq!(
            format_response(FeatureKind::LabelDetection, &response),
            "I found these things:\n\nnothing"
        );
    }

    // The renderer must follow the requested feature, not default to the
    // label list.
    #[test]
    fn text_detection_renders_text_not_labels() {
        let response = AnnotateImageResponse {
            label_annotations: labels(&[(0.9, "Paper")]),
            text_annotations: labels(&[(0.0, "STOP\nAHEAD"), (0.0, "STOP")]),
            ..Default::default()
        };
        assert_eq!(
            format_response(FeatureKind::TextDetection, &response),
            "I found these things:\n\nSTOP\nAHEAD\n"
        );
    }

    #[test]
    fn logos_and_landmarks_use_their_own_lists() {
        let response = AnnotateImageResponse {
            logo_annotations: labels(&[(0.75, "Ferris")]),
            landmark_annotations: labels(&[(0.6, "Eiffel Tower")]),
            ..Default::default()
        };
        assert_eq!(
            format_response(FeatureKind::LogoDetection, &response),
            "I found these things:\n\n0.750: Ferris\n"
        );
        assert_eq!(
            format_response(FeatureKind::LandmarkDetection, &response),
            "I found these things:\n\n0.600: Eiffel Tower\n"
        );
    }

    #[test]
    fn faces_render_confidence_and_likelihoods() {
        let response = AnnotateImageResponse {
            face_annotations: vec![FaceAnnotation {
                detection_confidence: 0.966,
                joy_likelihood: "VERY_LIKELY".into(),
                sorrow_likelihood: "VERY_UNLIKELY".into(),
                anger_likelihood: "VERY_UNLIKELY".into(),
                surprise_likelihood: "UNLIKELY".into(),
            }],
            ..Default::default()
        };
        assert_eq!(
            format_response(FeatureKind::FaceDetection, &response),
            "I found these things:\n\n0.966: joy VERY_LIKELY, sorrow VERY_UNLIKELY, \
             anger VERY_UNLIKELY, surprise UNLIKELY\n"
        );
    }

    #[test]
    fn safe_search_renders_category_likelihoods() {
        let response = AnnotateImageResponse {
            safe_search_annotation: Some(SafeSearchAnnotation {
                adult: "VERY_UNLIKELY".into(),
                spoof: "UNLIKELY".into(),
                medical: "VERY_UNLIKELY".into(),
                violence: "POSSIBLE".into(),
                racy: "UNLIKELY".into(),
            }),
            ..Default::default()
        };
        let rendered = format_response(FeatureKind::SafeSearchDetection, &response);
        assert!(rendered.starts_with("I found these things:\n\nadult: VERY_UNLIKELY\n"));
        assert!(rendered.contains("violence: POSSIBLE\n"));
    }

    #[test]
    fn image_properties_render_dominant_colors() {
        let response = AnnotateImageResponse {
            image_properties_annotation: Some(ImageProperties {
                dominant_colors: DominantColors {
                    colors: vec![ColorInfo {
                        color: Color {
                            red: 213.0,
                            green: 117.4,
                            blue: 44.8,
                        },
                        score: 0.42,
                        pixel_fraction: 0.11,
                    }],
                },
            }),
            ..Default::default()
        };
        assert_eq!(
            format_response(FeatureKind::ImageProperties, &response),
            "I found these things:\n\n0.420: rgb(213, 117, 45)\n"
        );
    }

    #[test]
    fn response_json_deserializes_with_camel_case_names() {
        let raw = serde_json::json!({
            "responses": [{
                "labelAnnotations": [
                    {"description": "Cat", "score": 0.987, "mid": "/m/01yrx"}
                ],
                "safeSearchAnnotation": {"adult": "VERY_UNLIKELY"}
            }]
        });
        let batch: BatchAnnotateResponse = serde_json::from_value(raw).unwrap();
        let first = &batch.responses[0];
        assert_eq!(first.label_annotations[0].description, "Cat");
        assert!(first.face_annotations.is_empty());
        assert_eq!(
            first.safe_search_annotation.as_ref().unwrap().adult,
            "VERY_UNLIKELY"
        );
        assert!(first.error.is_none());
    }

    #[test]
    fn request_json_matches_the_wire_shape() {
        let request = BatchAnnotateRequest::single(
            ImagePayload {
                content: "aGVsbG8=".into(),
            },
            Feature::from_code(4).unwrap(),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "requests": [{
                    "image": {"content": "aGVsbG8="},
                    "features": [{"type": "LABEL_DETECTION", "maxResults": 10}]
                }]
            })
        );
    }
}
