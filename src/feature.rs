// Feature selection: the analysis kinds the annotate endpoint supports
// and the numbered-menu mapping onto them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of annotations requested per feature. The original tool always
/// sent 10 and so does this one.
pub const MAX_RESULTS: u32 = 10;

/// Menu entries in code order. `TYPE_UNSPECIFIED` (code 8) exists on the
/// wire but is not offered interactively.
pub const MENU: [(u32, &str); 7] = [
    (1, "Face detection"),
    (2, "Landmark detection"),
    (3, "Logo detection"),
    (4, "Label detection"),
    (5, "Text detection"),
    (6, "Safe search detection"),
    (7, "Image properties"),
];

/// Analysis kinds understood by the annotate endpoint. Serialized names
/// match the wire enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureKind {
    TypeUnspecified,
    FaceDetection,
    LandmarkDetection,
    LogoDetection,
    LabelDetection,
    TextDetection,
    SafeSearchDetection,
    ImageProperties,
}

/// One requested analysis: the kind to run and the result cap. Serializes
/// straight into the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub max_results: u32,
}

impl Feature {
    /// Map a menu code to its feature. Any code outside the table is an
    /// input error rather than an undefined feature.
    pub fn from_code(code: u32) -> Result<Self> {
        let kind = match code {
            1 => FeatureKind::FaceDetection,
            2 => FeatureKind::LandmarkDetection,
            3 => FeatureKind::LogoDetection,
            4 => FeatureKind::LabelDetection,
            5 => FeatureKind::TextDetection,
            6 => FeatureKind::SafeSearchDetection,
            7 => FeatureKind::ImageProperties,
            8 => FeatureKind::TypeUnspecified,
            other => {
                return Err(Error::Input {
                    message: format!("feature {} is not in the menu", other),
                })
            }
        };
        Ok(Feature {
            kind,
            max_results: MAX_RESULTS,
        })
    }
}
