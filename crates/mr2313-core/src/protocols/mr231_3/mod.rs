//! MR-231-3 radar sentence decoding.
//!
//! A sentence is `$RA<tag>,<field>,...*<checksum>`. The reader strips the
//! preamble and checksum and splits the fields, the parser maps the fixed
//! field positions of `TTM` and `RSD` onto typed reports, and `validate`
//! rejects RSD reports whose range scale is not a hardware setting.
//!
//! Field positions and the allowed range scales live in `layout`; the
//! single-character IFF and status codes live in `codes`. The checksum is
//! carried through but never verified.

pub mod codes;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod validate;

pub use error::DecodeError;
pub use parser::{Mr2313Sentence, parse_sentence};
pub use reader::{Sentence, tokenize};
pub use validate::check_rsd;
