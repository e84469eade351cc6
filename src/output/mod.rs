pub mod formatter;

pub use formatter::{
    format_generated, format_generated_json, format_report, format_report_json, format_strength,
    should_use_colors,
};
