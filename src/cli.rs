//! CLI domain: parse, route, help, output, and presentation only.
//! No pipeline logic; the route table dispatches to the domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::{
    format_build_report_json, format_build_report_text, format_icons_result,
    format_index_report_json, format_index_report_text,
};
pub use route::RunContext;
