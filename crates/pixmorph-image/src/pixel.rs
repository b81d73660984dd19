/// One of the four independent channels of a [`Pixel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Alpha (opacity). No premultiplication is implied.
    Alpha,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// Map a numeric selector to a channel: `0 = a`, `1 = r`, `2 = g`, `3 = b`.
    ///
    /// Any other selector yields `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of the channel inside [`Pixel::to_array`].
    pub fn index(self) -> usize {
        match self {
            Channel::Alpha => 0,
            Channel::Red => 1,
            Channel::Green => 2,
            Channel::Blue => 3,
        }
    }
}

/// A pixel with four 8-bit channels.
///
/// Channels are stored straight, alpha is never premultiplied into the colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Alpha channel.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Pixel {
    /// The all-zero pixel used for zero-fill boundaries and unwritten output.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    /// Create a pixel from its alpha, red, green and blue values.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Read one channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Alpha => self.a,
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Mutable access to one channel.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Alpha => &mut self.a,
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }

    /// The channels as `[a, r, g, b]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.a, self.r, self.g, self.b]
    }

    /// Build a pixel from `[a, r, g, b]`.
    pub fn from_array(channels: [u8; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(channels: [u8; 4]) -> Self {
        Pixel::from_array(channels)
    }
}
