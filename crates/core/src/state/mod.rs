pub mod io;

pub use io::{
    read_input, render_cleaned_output, save_cleaned_output, FragmentSource, OutputFormat,
    DEFAULT_OUTPUT_FILE,
};
