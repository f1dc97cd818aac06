mod error;
mod location;
mod log_event;
mod markup;
mod parser;
mod reader;

pub use error::{ParseError, ReaderError};
pub use location::update_location;
pub use log_event::*;
pub use markup::strip_html;
pub use parser::{LogParser, listener, parse, parse_line};
pub use reader::Reader;
