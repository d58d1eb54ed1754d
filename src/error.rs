use std::error::Error;
use std::fmt;

use iron::{status, IronError};
use iron::headers::ContentType;
use iron::modifiers::Header;

use views;

#[derive(Debug, PartialEq)]
pub enum PostError {
    /// No post in the collection carries this id, or the id could not
    /// name a post at all.
    NotFound(String),
    /// A handler panicked while holding the collection lock.
    Poisoned,
}

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PostError::NotFound(ref id) => write!(f, "no post with id {}", id),
            PostError::Poisoned => write!(f, "post collection lock poisoned"),
        }
    }
}

impl Error for PostError {}

impl From<PostError> for IronError {
    fn from(err: PostError) -> IronError {
        match err {
            PostError::NotFound(_) => {
                let page = views::not_found().into_string();
                IronError::new(err, (status::NotFound, Header(ContentType::html()), page))
            }
            PostError::Poisoned => {
                let msg = err.to_string();
                IronError::new(err, (status::InternalServerError, msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err: IronError = PostError::NotFound("nonexistent-id".to_string()).into();
        assert_eq!(err.response.status, Some(status::NotFound));
    }

    #[test]
    fn poisoned_maps_to_500() {
        let err: IronError = PostError::Poisoned.into();
        assert_eq!(err.response.status, Some(status::InternalServerError));
    }
}
