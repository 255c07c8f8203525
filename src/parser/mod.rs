pub mod keyword_parser;

pub use keyword_parser::parse_keyword_set;
