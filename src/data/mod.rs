pub mod models;
pub mod repositories;
pub mod store;

#[cfg(test)]
pub mod test_support;
