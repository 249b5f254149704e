pub mod config;
pub mod logchamp;
pub mod text_utils;

#[cfg(test)]
pub mod test_fixtures;
