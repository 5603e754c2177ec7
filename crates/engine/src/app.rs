//! Application state and composition.

use std::sync::Arc;

use dexview_domain::{BranchPolicy, DomainError};

use crate::entities::Records;
use crate::infrastructure::ports::ResourcePort;
use crate::infrastructure::settings::Settings;
use crate::stores::{CatalogStore, DetailState, DetailStore, StaleResultDiscard};
use crate::use_cases::{
    self, AssembleDetail, CatalogPhase, DeriveWeaknesses, LoadCatalog, WalkEvolutionChain,
};

/// Main application state.
///
/// Holds the record fetcher, use cases and the per-screen stores.
pub struct App {
    pub records: Arc<Records>,
    pub use_cases: UseCases,
    pub detail: DetailStore,
    pub catalog: CatalogStore,
    pub settings: Settings,
}

/// Container for all use cases.
pub struct UseCases {
    pub detail: use_cases::DetailUseCases,
    pub catalog: use_cases::CatalogUseCases,
}

impl App {
    pub fn new(port: Arc<dyn ResourcePort>, settings: Settings) -> Result<Self, DomainError> {
        settings.radar.validate()?;

        let records = Arc::new(Records::new(port, settings.max_in_flight));

        let weaknesses = Arc::new(DeriveWeaknesses::new(records.clone()));
        let evolution = Arc::new(WalkEvolutionChain::new(
            records.clone(),
            BranchPolicy::default(),
        ));
        let assemble = Arc::new(AssembleDetail::new(
            records.clone(),
            weaknesses,
            evolution,
            settings.radar,
        ));
        let load = Arc::new(LoadCatalog::new(
            records.clone(),
            settings.page_size,
            settings.catalog_limit,
        ));

        let use_cases = UseCases {
            detail: use_cases::DetailUseCases::new(assemble),
            catalog: use_cases::CatalogUseCases::new(load),
        };

        Ok(Self {
            records,
            use_cases,
            detail: DetailStore::new(),
            catalog: CatalogStore::new(settings.page_size)?,
            settings,
        })
    }

    /// Assemble the detail view for `name_or_id` and publish the outcome to
    /// the detail store.
    ///
    /// Returns the resulting state, or [`StaleResultDiscard`] when another
    /// request started while this one was in flight.
    pub async fn open_detail(&self, name_or_id: &str) -> Result<DetailState, StaleResultDiscard> {
        let ticket = self.detail.begin(name_or_id).await;
        let result = self.use_cases.detail.assemble.execute(name_or_id).await;
        self.detail.complete(ticket, result).await
    }

    /// Run one catalog load phase and publish it to the catalog store.
    pub async fn load_catalog_phase(&self, phase: CatalogPhase) -> Result<(), StaleResultDiscard> {
        let ticket = self.catalog.begin_load().await;
        let result = self.use_cases.catalog.load.execute(phase).await;
        self.catalog.complete_load(ticket, result).await
    }

    /// First page, then the full catalog.
    pub async fn load_catalog(&self) -> Result<(), StaleResultDiscard> {
        self.load_catalog_phase(CatalogPhase::FirstPage).await?;
        self.load_catalog_phase(CatalogPhase::Full).await
    }
}
