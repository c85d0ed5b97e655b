mod basic_parser;
mod state;

pub use basic_parser::{EncodingOverride, basic_parse, basic_parse_with_override};
pub use state::State;
