//! Structured error types for gridborders.
//!
//! The engine itself never fails on bad geometry (off-screen regions are
//! skipped, missing overrides fall back). Errors only come from the
//! collaborators: the geometry source, the drawing surface, and config parsing.

/// All errors that can surface from a render cycle or its setup.
#[derive(Debug, thiserror::Error)]
pub enum BorderError {
    /// The geometry source could not measure an element (e.g. detached node).
    #[error("Geometry read failed: {0}")]
    Geometry(String),

    /// The drawing surface rejected a write.
    #[error("Surface write failed: {0}")]
    Surface(String),

    /// Configuration JSON could not be parsed.
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// SVG serialization error.
    #[error("SVG serialization: {0}")]
    Svg(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BorderError>;

impl From<String> for BorderError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for BorderError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<quick_xml::Error> for BorderError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Svg(e.to_string())
    }
}

impl From<std::io::Error> for BorderError {
    fn from(e: std::io::Error) -> Self {
        Self::Svg(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<BorderError> for wasm_bindgen::JsValue {
    fn from(e: BorderError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for BorderError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        Self::Surface(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
