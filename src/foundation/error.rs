pub type CellviewResult<T> = Result<T, CellviewError>;

/// Error taxonomy for a render cycle and for startup.
///
/// Unknown type codes are deliberately absent: they resolve to the palette fallback.
#[derive(thiserror::Error, Debug)]
pub enum CellviewError {
    #[error("config error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("parse error (line {line}): {msg}")]
    Parse { line: u64, msg: String },

    #[error("render error: {0}")]
    Render(String),

    #[error("output error: {0}")]
    Output(String),
}

impl CellviewError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn parse(line: u64, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            msg: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
