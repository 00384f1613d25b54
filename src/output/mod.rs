mod console;
mod package;

pub use console::render_report;
pub use package::write_package;
