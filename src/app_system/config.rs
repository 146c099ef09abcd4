/// Runtime settings for the API actors and screens.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of every actor request channel.
    pub buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}
