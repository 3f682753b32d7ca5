pub mod test_runtime;
pub mod test_value;
