pub mod files_api;
pub mod fs_adapter;
pub mod oauth_wrap;
pub mod parser_adapter;
pub mod parsers;
