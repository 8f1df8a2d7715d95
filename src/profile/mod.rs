//! The athlete profile descriptor: its typed shape, how it is read from
//! disk, and the structural checks a page build can run before using it.

pub mod checks;
pub mod fundraising;
pub mod model;
pub mod storage;

pub use checks::{check_descriptor, CheckIssue, CheckReport, IssueKind, IssueSeverity};
pub use fundraising::RoundingPolicy;
pub use model::{
    Apparatus, Bio, EventScore, Fundraising, Photo, ProfileDescriptor, QuickFact, Sponsor,
};
pub use storage::{
    compute_hash, hash_path, load_descriptor, parse_descriptor, write_descriptor,
    DescriptorError, DescriptorFormat, DescriptorWriteOutcome,
};
