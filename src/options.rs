/// Settings for writing PCX files.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncoderOptions {
    dpi: (u16, u16),
    quiet: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            dpi: (300, 300),
            quiet: true,
        }
    }
}

impl EncoderOptions {
    /// Horizontal and vertical resolution stored in the header.
    ///
    /// If you are not sure what to use just keep the default of `(300, 300)`.
    pub fn set_dpi(mut self, dpi: (u16, u16)) -> Self {
        self.dpi = dpi;
        self
    }

    /// When `false`, a dot is printed to stderr every 10 rows.
    pub fn set_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn get_dpi(&self) -> (u16, u16) {
        self.dpi
    }

    pub fn get_quiet(&self) -> bool {
        self.quiet
    }
}
