//! cloudinv-aws: AWS adapters for the inventory pipeline
//!
//! Implements the core listing capabilities over the AWS SDK. The EC2
//! lister is the real workhorse; the RDS lister is a declared extension
//! point with no inventory mapping yet.

pub mod ec2;
pub mod rds;
mod sdk;

pub use ec2::Ec2Lister;
pub use rds::RdsLister;
