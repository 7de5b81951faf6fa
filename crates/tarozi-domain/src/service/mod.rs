//! Domain services

pub mod format;
pub mod price_resolver;
pub mod search;
pub mod weight_calculator;

pub use format::{format_fixed, format_number};
pub use price_resolver::{resolve_price, PriceSource};
pub use search::{filter, highlight_spans, matches, HighlightedText};
pub use weight_calculator::{net_weight, parse_number, parse_weight};
