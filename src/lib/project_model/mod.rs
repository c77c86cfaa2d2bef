//! The in-memory build model assembled out of a config file, and the only
//! backend of the queries that the generators run over a build model

pub mod scope;
pub mod sourceset;
pub mod target;

use crate::bounds::{BuildModel, DirectoryScope, Partition};
use crate::generator::workspace::BatchBuildPolicy;

use self::scope::ScopeModel;

#[derive(Debug, PartialEq, Eq, Default)]
pub struct EwgenModel {
    /// The name of the project, which names its workspace
    pub name: String,
    pub batch_policy: Option<BatchBuildPolicy>,
    /// The directories of the project. The first one is always the project root
    pub scopes: Vec<ScopeModel>,
}

impl BuildModel for EwgenModel {
    /// A config file describes a single partition, made of all its directories
    fn partitions(&self) -> Vec<Partition<'_>> {
        vec![Partition {
            name: &self.name,
            directories: self
                .scopes
                .iter()
                .map(|scope| scope as &dyn DirectoryScope)
                .collect(),
        }]
    }
}
