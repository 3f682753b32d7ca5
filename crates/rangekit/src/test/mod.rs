pub mod test_replace;
