pub mod compile_regex;
pub mod coverage;
