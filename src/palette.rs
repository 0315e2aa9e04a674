//! Color lookup tables.

pub use crate::low_level::header::DEFAULT_PALETTE_16;

/// Mapping from color index to R, G, B.
pub trait ColorLookupTable {
    /// Color for `index` or `None` if the table has no such entry.
    fn color(&self, index: u8) -> Option<[u8; 3]>;

    /// Number of entries in the table.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ColorLookupTable for [[u8; 3]] {
    fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.get(index as usize).copied()
    }

    fn len(&self) -> usize {
        <[[u8; 3]]>::len(self)
    }
}

impl<const N: usize> ColorLookupTable for [[u8; 3]; N] {
    fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.get(index as usize).copied()
    }

    fn len(&self) -> usize {
        N
    }
}

/// Owned color lookup table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    pub fn new(colors: Vec<[u8; 3]>) -> Self {
        Palette { colors }
    }

    /// Pen colors of a plotter: white background, black, red, green, blue, cyan, magenta and yellow.
    pub fn default_pens() -> Self {
        Palette::new(vec![
            [255, 255, 255],
            [0, 0, 0],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [0, 255, 255],
            [255, 0, 255],
            [255, 255, 0],
        ])
    }

    /// Replace color at `index`, growing the table with black entries if needed.
    pub fn set(&mut self, index: u8, color: [u8; 3]) {
        let index = index as usize;
        if index >= self.colors.len() {
            self.colors.resize(index + 1, [0, 0, 0]);
        }
        self.colors[index] = color;
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }
}

impl ColorLookupTable for Palette {
    fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.color(index)
    }

    fn len(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorLookupTable, Palette};

    #[test]
    fn lookup() {
        let palette = Palette::default_pens();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.color(0), Some([255, 255, 255]));
        assert_eq!(palette.color(2), Some([255, 0, 0]));
        assert_eq!(palette.color(8), None);
    }

    #[test]
    fn set_grows_table() {
        let mut palette = Palette::default();
        assert!(palette.is_empty());
        palette.set(3, [10, 20, 30]);
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.color(0), Some([0, 0, 0]));
        assert_eq!(palette.color(3), Some([10, 20, 30]));
    }

    #[test]
    fn arrays_and_slices() {
        let table = [[1, 2, 3], [4, 5, 6]];
        assert_eq!(table.color(1), Some([4, 5, 6]));
        assert_eq!(ColorLookupTable::len(&table), 2);

        let slice: &[[u8; 3]] = &table;
        assert_eq!(slice.color(2), None);
    }
}
