pub mod decimal_format;
pub mod time_utils;
