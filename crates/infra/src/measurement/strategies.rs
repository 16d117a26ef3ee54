pub mod sloc_counter;

pub use sloc_counter::{
    LineProcessor, LineResult, Literal, ScanState, SourceLineScanner, classify_lines, count_code_lines,
};
