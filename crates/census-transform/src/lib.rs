//! Value-level normalization for census submissions.
//!
//! Everything here is a pure function of its input and the choice release:
//! choice decoding ([`decode`]), GPS parsing ([`geo`]), traditional area
//! conversion ([`area`]) and date normalization ([`date`]).

pub mod area;
pub mod date;
pub mod decode;
pub mod geo;

pub use area::{TraditionalArea, area_field, convert_traditional_area};
pub use date::{normalize_date, parse_date};
pub use decode::{Decoder, decode_multiple_choices, decode_single_choice};
pub use geo::{format_point, process_location};
