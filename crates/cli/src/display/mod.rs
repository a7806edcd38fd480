pub mod command_breakdown;
pub mod result;

pub use command_breakdown::print_command_breakdown;
pub use result::print_result;
