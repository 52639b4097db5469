use std::cell::RefCell;

use super::printer::Printer;

/// A [`Printer`] that keeps everything in memory instead of writing it out.
///
/// Useful to assert on the exact status line a check would print.
pub struct Logger {
    output: RefCell<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
        }
    }

    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }
}

impl Printer for Logger {
    fn println(&self, output: &str) {
        let mut log = self.output.borrow_mut();
        log.push_str(output);
        log.push('\n');
    }

    fn eprintln(&self, output: &str) {
        let mut log = self.output.borrow_mut();
        log.push_str(output);
        log.push('\n');
    }
}
