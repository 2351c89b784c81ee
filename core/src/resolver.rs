//! Selection-based resolution of virtual appliances.
//!
//! Dispatches on one of three mutually exclusive selection modes: by id,
//! by name, or list (optionally scoped to one datacenter). Remote failures
//! never escape [`ApplianceResolver::resolve`]; they are converted into
//! structured diagnostics emitted alongside whatever could be resolved.

use crate::catalog::RemoteCatalog;
use crate::error::ApiError;
use crate::model::{VirtualAppliance, VirtualDataCenter};

/// Event ids identifying each diagnostic class.
pub mod event {
    /// Lookup by id produced nothing.
    pub const ID_NOT_FOUND: &str = "GetVirtualApplianceIdNotFound";

    /// Lookup by name matched no appliance.
    pub const NAME_NOT_FOUND: &str = "GetVirtualApplianceNameNotFound";

    /// A datacenter could not be listed.
    pub const DATACENTER_NOT_FOUND: &str = "GetVirtualApplianceVirtualDataCenterNotFound";

    /// Any other remote failure.
    pub const CATALOG_FAILURE: &str = "RemoteCatalogFailure";
}

/// One of the three mutually exclusive ways to select appliances.
///
/// Built and validated by the caller: ids are positive, names non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// One appliance by id within a datacenter.
    ById { vdc_id: u32, id: u32 },

    /// Every appliance in a datacenter whose name matches, case-insensitively.
    ByName { vdc_id: u32, name: String },

    /// All appliances, scoped to one datacenter when `vdc_id` is set.
    List { vdc_id: Option<u32> },
}

/// Failure class of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Transport, API or decode failure from the remote catalog.
    Generic,

    /// The requested entity does not exist.
    NotFound,
}

/// A structured, non-fatal failure record emitted alongside results.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub event_id: &'static str,
    pub message: String,
    pub vdc_id: Option<u32>,
    pub id: Option<u32>,
    pub name: Option<String>,
}

impl Diagnostic {
    fn generic(err: &ApiError) -> Self {
        Self {
            kind: DiagnosticKind::Generic,
            event_id: event::CATALOG_FAILURE,
            message: err.to_string(),
            vdc_id: None,
            id: None,
            name: None,
        }
    }

    fn id_not_found(vdc_id: u32, id: u32) -> Self {
        Self {
            kind: DiagnosticKind::NotFound,
            event_id: event::ID_NOT_FOUND,
            message: format!("virtual appliance {id} not found in datacenter {vdc_id}"),
            vdc_id: Some(vdc_id),
            id: Some(id),
            name: None,
        }
    }

    fn name_not_found(vdc_id: u32, name: &str) -> Self {
        Self {
            kind: DiagnosticKind::NotFound,
            event_id: event::NAME_NOT_FOUND,
            message: format!("no virtual appliance named \"{name}\" in datacenter {vdc_id}"),
            vdc_id: Some(vdc_id),
            id: None,
            name: Some(name.to_string()),
        }
    }

    fn datacenter_not_found(vdc_id: Option<u32>) -> Self {
        let message = match vdc_id {
            Some(id) => format!("virtual datacenter {id} could not be queried"),
            None => "virtual datacenters could not be queried".to_string(),
        };
        Self {
            kind: DiagnosticKind::NotFound,
            event_id: event::DATACENTER_NOT_FOUND,
            message,
            vdc_id,
            id: None,
            name: None,
        }
    }
}

/// Output of one resolution: the appliances that could be resolved plus
/// the diagnostics produced along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub appliances: Vec<VirtualAppliance>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// No appliances, no diagnostics. What a caller reports when it
    /// declines to run the resolver at all.
    pub fn empty() -> Self {
        Self::default()
    }

    fn resolved(appliances: Vec<VirtualAppliance>) -> Self {
        Self {
            appliances,
            diagnostics: Vec::new(),
        }
    }

    fn failed(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            appliances: Vec::new(),
            diagnostics,
        }
    }
}

/// Resolves appliances from a [`RemoteCatalog`] according to a [`Selection`].
///
/// Stateless: every call queries the catalog afresh, sequentially, with no
/// retries and no caching.
pub struct ApplianceResolver<C> {
    catalog: C,
}

impl<C: RemoteCatalog> ApplianceResolver<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Resolve `selection` into appliances and diagnostics.
    pub async fn resolve(&self, selection: &Selection) -> Resolution {
        match selection {
            Selection::ById { vdc_id, id } => self.resolve_by_id(*vdc_id, *id).await,
            Selection::ByName { vdc_id, name } => self.resolve_by_name(*vdc_id, name).await,
            Selection::List { vdc_id } => self.resolve_list(*vdc_id).await,
        }
    }

    async fn resolve_by_id(&self, vdc_id: u32, id: u32) -> Resolution {
        match self.catalog.get_appliance(vdc_id, id).await {
            Ok(appliance) => Resolution::resolved(vec![appliance]),
            // A missing appliance and a failed transport are
            // indistinguishable here; both yield the same pair.
            Err(err) => Resolution::failed(vec![
                Diagnostic::generic(&err),
                Diagnostic::id_not_found(vdc_id, id),
            ]),
        }
    }

    async fn resolve_by_name(&self, vdc_id: u32, name: &str) -> Resolution {
        let collection = match self.catalog.list_appliances(vdc_id).await {
            Ok(collection) => collection,
            // Unlike the id and list modes, a failed list here surfaces as
            // a single generic diagnostic with no not-found pairing.
            Err(err) => return Resolution::failed(vec![Diagnostic::generic(&err)]),
        };

        let needle = name.to_lowercase();
        let matches: Vec<VirtualAppliance> = collection
            .into_iter()
            .filter(|a| a.name.to_lowercase() == needle)
            .collect();

        if matches.is_empty() {
            return Resolution::failed(vec![Diagnostic::name_not_found(vdc_id, name)]);
        }

        // Names are not unique; every match is emitted.
        Resolution::resolved(matches)
    }

    async fn resolve_list(&self, vdc_id: Option<u32>) -> Resolution {
        match self.collect_appliances(vdc_id).await {
            Ok(appliances) => Resolution::resolved(appliances),
            Err(err) => Resolution::failed(vec![
                Diagnostic::generic(&err),
                Diagnostic::datacenter_not_found(vdc_id),
            ]),
        }
    }

    async fn collect_appliances(
        &self,
        vdc_id: Option<u32>,
    ) -> crate::error::Result<Vec<VirtualAppliance>> {
        // A requested datacenter is used as a bare reference, without
        // checking that it exists.
        let datacenters = match vdc_id {
            Some(id) => vec![VirtualDataCenter::reference(id)],
            None => self.catalog.list_datacenters().await?,
        };

        let mut collection = Vec::new();
        for datacenter in &datacenters {
            // Each pass replaces the collection: with more than one
            // datacenter only the last one's appliances survive.
            collection = self.catalog.list_appliances(datacenter.id).await?;
        }

        Ok(collection)
    }
}
