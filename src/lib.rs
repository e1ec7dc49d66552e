pub mod check;
pub mod commands;
pub mod error;
pub mod fs_utils;
pub mod path_check;
pub mod paths;
pub mod switch;
pub mod ui;
pub mod versions;

#[cfg(test)]
pub mod test_utils;
