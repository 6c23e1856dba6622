use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("field path parse error in '{0}': {1}")]
    Parse(String, String),
}
