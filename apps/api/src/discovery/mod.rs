// Prospect discovery: search queries against a public results page, HTML
// extraction of profile links, former-employee filtering, and dedup. The
// page layout is uncontracted; a layout change degrades discovery to empty
// results, never to an error.

pub mod filter;
pub mod handlers;
pub mod parser;
pub mod search;
pub mod service;
