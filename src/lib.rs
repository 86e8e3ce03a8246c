pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod parser;

pub use config::Config;
pub use convert::{
    join, tokenize, transform, transform_async, transform_serializable, Style, Transformer,
};
pub use error::{Error, Result};
