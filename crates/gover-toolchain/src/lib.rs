//! Go toolchain management: mirror, snapshots, builds, and prebuilt
//! binary downloads.

pub mod build;
pub mod dlindex;
pub mod export;
pub mod install;
pub mod layout;
pub mod lock;
pub mod repo;
pub mod version;

pub use install::install;
pub use lock::InstallLock;
pub use repo::{Mirror, MirrorAction, BOOTSTRAP_REF, REMOTE};
pub use version::Reference;
