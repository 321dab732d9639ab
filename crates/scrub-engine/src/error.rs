use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanitizeError {
    /// Cleaning a post hit an internal fault; the post is left as it was
    #[error("Sanitizing post {post_id} panicked: {message}")]
    Panicked { post_id: String, message: String },
}
