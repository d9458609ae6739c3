use derive_enum_all_values::AllValues;

/// How samples outside of the image bounds are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum WrapMode {
    /// Coordinates are clamped to the nearest edge pixel.
    Clamp,
    /// The image tiles infinitely.
    Repeat,
    /// The image is reflected at each edge, without repeating the edge pixel.
    #[default]
    Mirror,
}

impl WrapMode {
    /// Maps a possibly out of range coordinate onto `0..extent`.
    ///
    /// `extent` must be at least 1.
    ///
    /// ```
    /// use texture_image_float::WrapMode;
    ///
    /// assert_eq!(WrapMode::Clamp.wrap(-3, 4), 0);
    /// assert_eq!(WrapMode::Repeat.wrap(-1, 4), 3);
    /// assert_eq!(WrapMode::Mirror.wrap(4, 4), 2);
    /// ```
    #[inline]
    pub fn wrap(self, coordinate: isize, extent: usize) -> usize {
        debug_assert!(extent > 0);
        let extent = extent as isize;
        let wrapped = match self {
            WrapMode::Clamp => coordinate.clamp(0, extent - 1),
            WrapMode::Repeat => coordinate.rem_euclid(extent),
            WrapMode::Mirror => {
                if extent == 1 {
                    0
                } else {
                    let mut x = coordinate.abs();
                    while x >= extent {
                        x = (extent + extent - x - 2).abs();
                    }
                    x
                }
            }
        };
        wrapped as usize
    }
}
