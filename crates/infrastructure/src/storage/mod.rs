pub mod domain_file;
pub mod target_file;

pub use domain_file::FileDomainSink;
pub use target_file::FileTargetSource;
