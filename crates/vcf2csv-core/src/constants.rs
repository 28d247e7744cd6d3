/// File naming constants shared across crates
pub const VCF_EXTENSION: &str = "vcf";
pub const FIXED_STEM_SUFFIX: &str = "_fixed";
pub const FIXED_FILE_SUFFIX: &str = const_str::concat!(FIXED_STEM_SUFFIX, ".", VCF_EXTENSION);

/// Encoding label used when neither config nor CLI pick one.
///
/// Resolves to windows-1254, the superset of ISO-8859-9 (Latin-5, Turkish).
pub const DEFAULT_ENCODING_LABEL: &str = "ISO-8859-9";

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ENV_PREFIX: &str = "VCF2CSV";
