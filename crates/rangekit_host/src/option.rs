#[derive(Debug, Clone)]
pub struct RuntimeOption {
    /// Largest string a built-in may produce, in bytes. Checked by the
    /// built-ins whose output can outgrow their input: `Repeat`, `Replace`,
    /// `Upper`, `Lower` and the string form of `ReadFile`.
    pub max_string_size: usize,
    /// Most bytes any form of `ReadFile` reads in one call.
    /// Longer windows are cut short like a read that hit end of file.
    pub max_read_size: u64,
}

impl Default for RuntimeOption {
    fn default() -> Self {
        Self {
            max_string_size: i32::MAX as usize,
            max_read_size: u64::MAX,
        }
    }
}
