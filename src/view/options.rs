use crate::foundation::{
    core::{Axis, TransformStyle},
    error::{CubeError, CubeResult},
};

/// Serializable presentation options of a cube page view.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CubeViewOptions {
    pub scroll_direction: Axis,
    pub start_page: usize,
    pub transform_style: TransformStyle,
}

impl CubeViewOptions {
    pub fn from_json_str(s: &str) -> CubeResult<Self> {
        serde_json::from_str(s).map_err(|e| CubeError::serde(format!("cube view options: {e}")))
    }

    pub fn to_json_string(&self) -> CubeResult<String> {
        serde_json::to_string(self).map_err(|e| CubeError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/options.rs"]
mod tests;
