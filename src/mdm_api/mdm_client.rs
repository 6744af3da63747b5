use crate::config::MdmConfig;
use crate::mdm_api::models::response::computers_inventory_response::ComputersInventoryResponse;
use crate::mdm_api::models::response::mobile_devices_response::MobileDevicesResponse;
use anyhow::Context;
use reqwest::header::HeaderMap;
use std::time::Duration;

#[derive(Clone)]
pub struct MdmClient {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl MdmClient {
    pub fn new(config: &MdmConfig, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            format!("Bearer {}", config.token).parse().unwrap(),
        );
        headers.insert("Accept", "application/json".parse().unwrap());

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(timeout)
                .build()
                .unwrap(),
            base_url: config.base_url.clone(),
            page_size: config.page_size,
        }
    }
}

impl MdmApi for MdmClient {
    async fn get_computers_page(
        &self,
        section: &str,
        page: u32,
    ) -> anyhow::Result<ComputersInventoryResponse> {
        let url = format!("{}/api/v1/computers-inventory", self.base_url);
        let page = page.to_string();
        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("section", section),
                ("page", page.as_str()),
                ("page-size", page_size.as_str()),
            ])
            .send()
            .await?;

        let contents = response.text().await?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Unable to deserialize response. Body was: \"{}\"", contents))
    }

    async fn get_mobile_devices(&self) -> anyhow::Result<MobileDevicesResponse> {
        let url = format!("{}/JSSResource/mobiledevices", self.base_url);
        let response = self.client.get(url).send().await?;

        let contents = response.text().await?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Unable to deserialize response. Body was: \"{}\"", contents))
    }
}

pub trait MdmApi {
    fn get_computers_page(
        &self,
        section: &str,
        page: u32,
    ) -> impl std::future::Future<Output = anyhow::Result<ComputersInventoryResponse>> + Send;
    fn get_mobile_devices(
        &self,
    ) -> impl std::future::Future<Output = anyhow::Result<MobileDevicesResponse>> + Send;
}
