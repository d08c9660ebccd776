#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("graph is out of {what} capacity (limit {limit})")]
    OutOfCapacity { what: &'static str, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
