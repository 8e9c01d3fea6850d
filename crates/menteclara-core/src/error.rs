use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("mood rating {0} is outside the range 1-10")]
    InvalidMoodRating(i64),
}
