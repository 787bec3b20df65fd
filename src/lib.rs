//! Build-time generator for staged game outfit definition files.
//!
//! An outfit line is a template with `{placeholder}` stats plus a parameter
//! table whose interpolated entries are sampled across an ordered sequence of
//! upgrade stages; each stage renders to its own definition file.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod generate;
pub mod outfit;
pub mod param;
pub mod template;

pub use catalog::{builtin_outfits, generate_all};
pub use error::{OutforgeError, OutforgeResult};
pub use generate::{Generator, OUTPUT_EXTENSION, eval_stage, output_file_name};
pub use outfit::OutfitDef;
pub use param::{Param, Value, stage_position};
pub use template::Template;
