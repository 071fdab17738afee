pub mod constants;
pub mod deserializers;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
