//! Archive handling for package exports.
//!
//! A package export is a zip whose content holds one nested bundle per
//! integration flow. Bundles are stored either as `*.zip` files or as
//! extensionless files named with an underscore (see
//! [`discover::is_bundle_without_extension`]).

pub mod discover;
pub mod extract;
pub mod package;

pub use discover::{find_inner_zips, is_bundle_without_extension, prepare_inner_zips};
pub use extract::unzip_file;
pub use package::{parse_package_name, prefix_from_package, EXPORT_INFO_FILE};
