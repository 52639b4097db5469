/// Destination of the lines a check run prints.
pub trait Printer {
    fn println(&self, output: &str);
    fn eprintln(&self, output: &str);
}
