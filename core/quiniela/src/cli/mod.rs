//! CLI 境界（引数解析と Command への変換）

pub mod args;

pub use args::{
    config_to_command, parse_args, print_completion, submission_from_args, Config, ParseOutcome,
};
