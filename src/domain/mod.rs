//! Domain layer - Tag rules, validation and substitution

pub mod assets;
pub mod replacer;
pub mod rule;
pub mod validation;

pub use assets::{AssetBundle, AssetPaths};
pub use replacer::{ProcessOutput, Rejection, TagReplacer};
pub use rule::{TagKind, TagMatch, TagRule};
pub use validation::{RejectReason, Validation, ValidationContext};
