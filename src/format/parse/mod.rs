//! Parsers for the raw file formats behind each metadata type.
//!
//! - [`ini`] - sectioned key/value files (cellfinder)
//! - [`yaml`] - nested YAML documents (BakingTray recipes)
//! - [`text`] - line-oriented text (mesoSPIM), with [`natural`] ordering

pub mod ini;
pub mod natural;
pub mod text;
pub mod yaml;

pub use ini::{IniDocument, DEFAULT_SECTION};
pub use natural::{natural_cmp, natural_sort};
pub use text::{get_text_line, get_text_line_range, get_text_lines, split_lines, TextLineOptions};
pub use yaml::YamlDocument;
