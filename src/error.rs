use std::fmt;

use wasm_bindgen::JsValue;

/// Shader pipeline stage, used to tag compile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Everything that can go wrong before the first frame is drawn.
///
/// All failures surface synchronously during setup; the steady-state frame
/// loop never produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    MissingWindow,
    MissingDocument,
    MissingElement(&'static str),
    ContextUnavailable(&'static str),
    ResourceAllocation(&'static str),
    ShaderCompile {
        program: &'static str,
        stage: ShaderStage,
        log: String,
    },
    ProgramLink {
        program: &'static str,
        log: String,
    },
    UnknownVariant(String),
    Dom(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingWindow => f.write_str("no window"),
            SetupError::MissingDocument => f.write_str("no document"),
            SetupError::MissingElement(id) => write!(f, "element #{id} not found"),
            SetupError::ContextUnavailable(kind) => write!(f, "{kind} not supported"),
            SetupError::ResourceAllocation(what) => write!(f, "failed to create {what}"),
            SetupError::ShaderCompile { program, stage, log } => {
                write!(f, "{program}: {stage} shader compile error: {log}")
            }
            SetupError::ProgramLink { program, log } => {
                write!(f, "{program}: program link error: {log}")
            }
            SetupError::UnknownVariant(name) => write!(f, "unknown cloud variant `{name}`"),
            SetupError::Dom(msg) => write!(f, "dom error: {msg}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
