pub mod bookmarked;
pub mod parse;
#[cfg(test)]
pub mod test_backend;
