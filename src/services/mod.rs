//! Business logic services

pub mod catalog;
pub mod loans;
pub mod members;

use crate::{config::LibraryConfig, repository::Repository};

/// Owner of the library state; hands out short-lived service views over it
pub struct Services {
    repository: Repository,
    config: LibraryConfig,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, config: LibraryConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn catalog(&mut self) -> catalog::CatalogService<'_> {
        catalog::CatalogService::new(&mut self.repository, &self.config)
    }

    pub fn members(&mut self) -> members::MembersService<'_> {
        members::MembersService::new(&mut self.repository)
    }

    pub fn loans(&mut self) -> loans::LoansService<'_> {
        loans::LoansService::new(&mut self.repository, &self.config)
    }
}
