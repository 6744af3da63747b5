use crate::config::TrackerConfig;
use crate::tracker_api::AssetStatus;
use crate::tracker_api::models::response::assets_response::AssetsResponse;
use crate::tracker_api::models::response::members_response::MembersResponse;
use anyhow::Context;
use chrono::Local;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;

/// Outcome of a mutation call. The body is kept verbatim for the audit files
/// even when the call failed at the HTTP level.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub status: u16,
    pub body: Value,
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct TrackerClient {
    client: reqwest::Client,
    base_url: String,
    checkin_location_id: i64,
    checkout_comment: String,
    retire_reason_id: i64,
}

impl TrackerClient {
    pub fn new(config: &TrackerConfig, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("token", config.token.parse().unwrap());
        headers.insert(
            "Content-Type",
            "application/x-www-form-urlencoded".parse().unwrap(),
        );

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(timeout)
                .build()
                .unwrap(),
            base_url: config.base_url.clone(),
            checkin_location_id: config.checkin_location_id,
            checkout_comment: config.checkout_comment.clone(),
            retire_reason_id: config.retire_reason_id,
        }
    }

    async fn put_mutation(&self, url: &str, query: &[(&str, &str)]) -> anyhow::Result<MutationOutcome> {
        let response = self.client.put(url).query(query).send().await?;
        let status = response.status().as_u16();
        let contents = response.text().await?;
        let body = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(_) => Value::String(contents),
        };
        Ok(MutationOutcome { status, body })
    }
}

impl TrackerApi for TrackerClient {
    async fn get_assets_page(&self, status: AssetStatus, page: u32) -> anyhow::Result<AssetsResponse> {
        let url = format!("{}/assets/filter.api", self.base_url);
        let page = page.to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("status", status.as_query()),
                ("include_custom_fields", "true"),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let contents = response.text().await?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Unable to deserialize response. Body was: \"{}\"", contents))
    }

    async fn get_members_page(&self, page: u32) -> anyhow::Result<MembersResponse> {
        let url = format!("{}/members.api", self.base_url);
        let page = page.to_string();
        let response = self
            .client
            .get(url)
            .query(&[("include_custom_fields", "true"), ("page", page.as_str())])
            .send()
            .await?;

        let contents = response.text().await?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Unable to deserialize response. Body was: \"{}\"", contents))
    }

    async fn checkin_asset(&self, asset_id: i64) -> anyhow::Result<MutationOutcome> {
        let url = format!("{}/assets/{}/checkin.api", self.base_url, asset_id);
        let location_id = self.checkin_location_id.to_string();
        self.put_mutation(&url, &[("checkin_values[location_id]", location_id.as_str())])
            .await
    }

    async fn checkout_asset(&self, asset_id: i64, user_id: i64) -> anyhow::Result<MutationOutcome> {
        let url = format!("{}/assets/{}/checkout.api", self.base_url, asset_id);
        let user_id = user_id.to_string();
        self.put_mutation(
            &url,
            &[
                ("user_id", user_id.as_str()),
                ("checkout_values[comments]", self.checkout_comment.as_str()),
            ],
        )
        .await
    }

    async fn retire_asset(&self, asset_id: i64) -> anyhow::Result<MutationOutcome> {
        let url = format!("{}/assets/{}/retire.api", self.base_url, asset_id);
        let retired_on = Local::now().format("%m/%d/%Y").to_string();
        let reason_id = self.retire_reason_id.to_string();
        self.put_mutation(
            &url,
            &[
                ("fixed_asset[retired_on]", retired_on.as_str()),
                ("fixed_asset[retire_reason_id]", reason_id.as_str()),
            ],
        )
        .await
    }
}

pub trait TrackerApi {
    fn get_assets_page(
        &self,
        status: AssetStatus,
        page: u32,
    ) -> impl std::future::Future<Output = anyhow::Result<AssetsResponse>> + Send;
    fn get_members_page(
        &self,
        page: u32,
    ) -> impl std::future::Future<Output = anyhow::Result<MembersResponse>> + Send;
    fn checkin_asset(
        &self,
        asset_id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<MutationOutcome>> + Send;
    fn checkout_asset(
        &self,
        asset_id: i64,
        user_id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<MutationOutcome>> + Send;
    fn retire_asset(
        &self,
        asset_id: i64,
    ) -> impl std::future::Future<Output = anyhow::Result<MutationOutcome>> + Send;
}
