use std::path::PathBuf;

/// Icon sizes the window expects: small, medium, big.
pub const ICON_SIZES: [u32; 3] = [16, 32, 64];
pub const INPUT_DIR: &str = "assets/icon/";
pub const OUTPUT_DIR: &str = "assets/icon/";
pub const SOURCE_NAME: &str = "muse";
pub const SOURCE_EXTENSION: &str = "bmp";

/// One source bitmap and the square sizes it gets dumped at.
#[derive(Debug, Clone)]
pub struct IconJob {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Prefix of every output file, `<basename><size>.bin`.
    pub basename: String,
    pub sizes: Vec<u32>,
}

impl Default for IconJob {
    fn default() -> Self {
        Self {
            source: PathBuf::from(INPUT_DIR).join(format!("{SOURCE_NAME}.{SOURCE_EXTENSION}")),
            output_dir: PathBuf::from(OUTPUT_DIR),
            basename: SOURCE_NAME.to_string(),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}
