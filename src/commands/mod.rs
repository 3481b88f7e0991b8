//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Terminal-facing wrappers around the scaffolder and packager.
//! Each binary drives one command.

pub mod init;
pub mod package;

pub use init::{execute_init, InitOptions};
pub use package::{execute_package, PackageOptions};
