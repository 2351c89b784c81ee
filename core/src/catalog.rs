//! Remote catalog access for datacenters and appliances.

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::model::{Collection, VirtualAppliance, VirtualDataCenter};

/// Vendored Accept media types for the API payloads.
const ACCEPT_VDCS: &str = "application/vnd.abiquo.virtualdatacenters+json";
const ACCEPT_VAPPS: &str = "application/vnd.abiquo.virtualappliances+json";
const ACCEPT_VAPP: &str = "application/vnd.abiquo.virtualappliance+json";

/// Read access to the remote inventory.
#[async_trait]
pub trait RemoteCatalog {
    /// List all virtual datacenters visible to the session.
    async fn list_datacenters(&self) -> Result<Vec<VirtualDataCenter>>;

    /// List the virtual appliances in one datacenter. An absent collection
    /// on the wire reads as an empty list.
    async fn list_appliances(&self, vdc_id: u32) -> Result<Vec<VirtualAppliance>>;

    /// Fetch one appliance. A missing appliance and a transport problem
    /// surface the same way: as an error.
    async fn get_appliance(&self, vdc_id: u32, id: u32) -> Result<VirtualAppliance>;
}

/// reqwest-backed catalog speaking the cloud REST routes.
pub struct HttpCatalog {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// GET `url` with the session credentials and decode the body as JSON.
    async fn get_json<T>(&self, url: &str, accept: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!("HTTP GET {}", url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Accept", accept)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RemoteCatalog for HttpCatalog {
    async fn list_datacenters(&self) -> Result<Vec<VirtualDataCenter>> {
        let url = datacenters_url(self.config.base_url());
        let wrapper: Collection<VirtualDataCenter> = self.get_json(&url, ACCEPT_VDCS).await?;
        Ok(wrapper.collection)
    }

    async fn list_appliances(&self, vdc_id: u32) -> Result<Vec<VirtualAppliance>> {
        let url = appliances_url(self.config.base_url(), vdc_id);
        let wrapper: Collection<VirtualAppliance> = self.get_json(&url, ACCEPT_VAPPS).await?;
        Ok(wrapper.collection)
    }

    async fn get_appliance(&self, vdc_id: u32, id: u32) -> Result<VirtualAppliance> {
        let url = appliance_url(self.config.base_url(), vdc_id, id);
        self.get_json(&url, ACCEPT_VAPP).await
    }
}

fn datacenters_url(base: &str) -> String {
    format!("{base}/cloud/virtualdatacenters")
}

fn appliances_url(base: &str, vdc_id: u32) -> String {
    format!("{base}/cloud/virtualdatacenters/{vdc_id}/virtualappliances")
}

fn appliance_url(base: &str, vdc_id: u32, id: u32) -> String {
    format!("{base}/cloud/virtualdatacenters/{vdc_id}/virtualappliances/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cloud.example.com/api";

    #[test]
    fn test_datacenters_url() {
        assert_eq!(
            datacenters_url(BASE),
            "https://cloud.example.com/api/cloud/virtualdatacenters"
        );
    }

    #[test]
    fn test_appliances_url() {
        assert_eq!(
            appliances_url(BASE, 7),
            "https://cloud.example.com/api/cloud/virtualdatacenters/7/virtualappliances"
        );
    }

    #[test]
    fn test_appliance_url() {
        assert_eq!(
            appliance_url(BASE, 7, 42),
            "https://cloud.example.com/api/cloud/virtualdatacenters/7/virtualappliances/42"
        );
    }
}
