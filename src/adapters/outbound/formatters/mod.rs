/// Formatter adapters for the different report output formats
mod dot_formatter;
mod json_formatter;
mod text_formatter;

pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
