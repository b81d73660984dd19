mod adjust;
mod channel;
mod gray;
mod noise;

pub use adjust::{brighten, contrast, saturate};
pub use channel::shift_channel;
pub use gray::{luma, luminance, mean};
pub use noise::{add_random_noise, add_random_noise_with_rng};
