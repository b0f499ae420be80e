//! Runtime configuration.
//!
//! `Config` is the command line of the `purchase-report` binary;
//! `ServiceConfig` is the part of it the service itself consults.

use clap::{Parser, ValueEnum};

use crate::store::IdPolicy;

pub const DEFAULT_ADDR: &str = "localhost:8080";

/// `--id-policy` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IdPolicyArg {
    /// Live entry count + 1; ids are reused after a delete.
    #[default]
    EntryCount,
    /// Increasing counter, never reused.
    Sequential,
}

impl From<IdPolicyArg> for IdPolicy {
    fn from(arg: IdPolicyArg) -> Self {
        match arg {
            IdPolicyArg::EntryCount => IdPolicy::EntryCount,
            IdPolicyArg::Sequential => IdPolicy::Sequential,
        }
    }
}

/// Behaviour switches for `PurchaseService`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Answer a successful create with 201 instead of 200.
    pub created_status: bool,
}

/// Command-line options for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "purchase-report", version, about = "In-memory purchase stock report service")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// How ids are assigned to new purchases.
    #[arg(long, value_enum, default_value_t = IdPolicyArg::EntryCount)]
    pub id_policy: IdPolicyArg,

    /// Respond 201 Created to a successful POST (legacy clients saw 200).
    #[arg(long)]
    pub created_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            id_policy: IdPolicyArg::default(),
            created_status: false,
        }
    }
}

impl Config {
    /// Id policy for the store backing the service.
    pub fn store_id_policy(&self) -> IdPolicy {
        self.id_policy.into()
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            created_status: self.created_status,
        }
    }
}
