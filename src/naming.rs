/// The four images a run produces, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The prepared source.
    Source,
    /// Rank-matched against the continuous field, hue-keyed by default.
    RankA,
    /// Rank-matched against the banded field, luma-keyed by default.
    RankB,
    /// Seeded tile shuffle.
    Control,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Self::Source, Self::RankA, Self::RankB, Self::Control];

    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "SRC",
            Self::RankA => "RPC_A",
            Self::RankB => "RPC_B",
            Self::Control => "CTRL",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// File name without its last extension.
///
/// A leading dot is part of the name, so `".profile"` is returned as is.
pub fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    }
}

/// `{base}_{stamp}_{LABEL}.png`
pub fn output_file_name(base: &str, stamp: &str, variant: Variant) -> String {
    format!("{base}_{stamp}_{}.png", variant.label())
}

/// `{base}_{stamp}_outputs.zip`
///
/// Name of the archive bundling the four [`output_file_name`] images. The
/// crate writes no archives itself; this keeps packagers on the same naming.
pub fn archive_file_name(base: &str, stamp: &str) -> String {
    format!("{base}_{stamp}_outputs.zip")
}
