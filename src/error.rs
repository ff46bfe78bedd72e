use thiserror::Error;

/// Precondition violations detected before an estimation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("damping={damping}")))
    }
}

pub(crate) fn check_positive(name: &str, count: usize) -> Result<()> {
    if count > 0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("{name}={count}")))
    }
}

pub(crate) fn check_vertex_size(vertex_size: usize) -> Result<()> {
    if vertex_size > 0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("vertex size={vertex_size}")))
    }
}
