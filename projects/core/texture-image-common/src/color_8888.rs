/// Represents a single RGBA8888 pixel color from a decoded block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_image_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a pixel from 4 bytes stored in BGRA order.
    #[inline]
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        Self::new(bytes[2], bytes[1], bytes[0], bytes[3])
    }

    /// Returns the pixel as `[r, g, b, a]` floats, each scaled from 0-255 into 0.0-1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use texture_image_common::color_8888::Color8888;
    ///
    /// let rgba = Color8888::new(255, 0, 51, 255).to_unorm_f32();
    /// assert_eq!(rgba, [1.0, 0.0, 0.2, 1.0]);
    /// ```
    #[inline]
    pub fn to_unorm_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}
