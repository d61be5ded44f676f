//! Core library for the gh-org-audit command line application.
//!
//! The library exposes the pieces that power the command-line interface as
//! well as the unit tests. The modules are structured to keep
//! responsibilities narrow and composable: the remote directory capability
//! lives in [`directory`] with its GitHub implementation in [`github`],
//! pagination in [`paginate`], the membership and team aggregations in
//! [`aggregate`], the join producing output rows in [`report`], CSV output
//! under [`io`], and the export orchestration in [`export`].

pub mod aggregate;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod github;
pub mod io;
pub mod model;
pub mod paginate;
pub mod report;

pub use error::{AuditError, Result};
