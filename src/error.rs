use std::any::Any;
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("could not start search worker: {0}")]
    Spawn(#[from] io::Error),

    /// The worker's share of the solutions is lost, so the run as a whole
    /// has no complete answer.
    #[error("search worker {worker} panicked: {message}")]
    WorkerPanicked { worker: usize, message: String },
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("out of stack");
        assert_eq!(panic_message(payload.as_ref()), "out of stack");

        let payload: Box<dyn Any + Send> = Box::new(format!("worker {}", 3));
        assert_eq!(panic_message(payload.as_ref()), "worker 3");

        let payload: Box<dyn Any + Send> = Box::new(17u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }

    #[test]
    fn test_display() {
        let err = SearchError::WorkerPanicked {
            worker: 2,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "search worker 2 panicked: boom");
    }
}
