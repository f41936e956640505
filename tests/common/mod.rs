use fngen::{error::Error, report::Reporter};
use std::cell::RefCell;

/// Reporter keeping every reported error message for later assertions.
#[derive(Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, err: &Error) {
        self.messages.borrow_mut().push(err.to_string());
    }
}
