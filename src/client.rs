//! PurpleAir API client.
//!
//! Low-level HTTP plumbing plus one method per remote API operation.
//! Bodies are returned opaque; this layer never interprets them.

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::endpoints::Endpoint;
use crate::error::{PurpleAirError, Result};
use crate::params::{collect_optional_args, GroupMemberParams, Params, SensorFilters};

const DEFAULT_API_URL: &str = "https://api.purpleair.com/v1/";
const API_KEY_HEADER: &str = "X-API-Key";
const USER_AGENT: &str = concat!("purpleair/", env!("CARGO_PKG_VERSION"));

/// The outcome of one API call: the HTTP status code paired with the opaque
/// response body.
///
/// A non-2xx status is ordinary data here, not an error; the remote service
/// reports key rejections, missing sensors, and the like through `status`
/// and a descriptive `body`, and interpreting those is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<B> {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Response body: parsed JSON for most operations, raw text for deletes.
    pub body: B,
}

/// Client for the PurpleAir v1 REST API.
///
/// Holds a read key, a write key, or both; retrieval operations use the read
/// key and mutating operations (group create/delete, membership changes) use
/// the write key. Which key an operation uses is fixed, not caller-selectable.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. Every operation is one blocking round trip and the keys
/// are immutable after construction, so a shared instance is safe to use
/// from multiple threads.
///
/// # Example
///
/// ```no_run
/// use purpleair::PurpleAir;
///
/// # fn example() -> purpleair::Result<()> {
/// let client = PurpleAir::new(Some("YOUR-READ-KEY"), None)?;
/// let response = client.get_sensor_data(131075, None, Some("pm2.5,humidity"), None)?;
/// println!("{}: {}", response.status, response.body);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PurpleAir {
    http: Client,
    base_url: Arc<Url>,
    read_key: Option<String>,
    write_key: Option<String>,
}

impl std::fmt::Debug for PurpleAir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurpleAir")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PurpleAir {
    /// Create a client for the production API at `https://api.purpleair.com/v1/`.
    ///
    /// # Errors
    ///
    /// Returns [`PurpleAirError::MissingApiKey`] if both keys are `None`;
    /// every remote operation needs one or the other.
    pub fn new(read_key: Option<&str>, write_key: Option<&str>) -> Result<Self> {
        Self::with_base_url(read_key, write_key, DEFAULT_API_URL)
    }

    /// Create a client against an alternate base URL, e.g. a local test server.
    ///
    /// # Errors
    ///
    /// Returns an error if both keys are `None` or the base URL is invalid.
    pub fn with_base_url(
        read_key: Option<&str>,
        write_key: Option<&str>,
        base_url: &str,
    ) -> Result<Self> {
        if read_key.is_none() && write_key.is_none() {
            return Err(PurpleAirError::MissingApiKey);
        }

        // Ensure base URL ends with / so Url::join keeps the /v1/ segment
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(PurpleAirError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            read_key: read_key.map(str::to_string),
            write_key: write_key.map(str::to_string),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured read key, if any.
    pub fn read_key(&self) -> Option<&str> {
        self.read_key.as_deref()
    }

    /// The configured write key, if any.
    pub fn write_key(&self) -> Option<&str> {
        self.write_key.as_deref()
    }

    /// Validate an API key and report its type.
    ///
    /// The passed key itself is sent as the authorization header; the
    /// client's own keys are not used.
    #[tracing::instrument(skip(self, key))]
    pub fn check_api_key(&self, key: &str) -> Result<ApiResponse<Value>> {
        self.request_json(Method::GET, Endpoint::Keys, key, &Params::new())
    }

    /// Fetch data for the single sensor identified by `sensor_index`.
    ///
    /// * `read_key` - sensor-specific key for private devices
    /// * `fields` - comma-delimited list of fields to include in the response
    /// * `cf` - float override used with the `pm2.5_alt` field
    #[tracing::instrument(skip(self, read_key))]
    pub fn get_sensor_data(
        &self,
        sensor_index: u64,
        read_key: Option<&str>,
        fields: Option<&str>,
        cf: Option<f64>,
    ) -> Result<ApiResponse<Value>> {
        let mut params = Params::new();
        collect_optional_args(
            &mut params,
            &[
                ("read_key", read_key.map(str::to_string)),
                ("fields", fields.map(str::to_string)),
                ("cf", cf.map(|v| v.to_string())),
            ],
            &[],
        );

        self.request_json(
            Method::GET,
            Endpoint::Sensor { sensor_index },
            self.require_read_key()?,
            &params,
        )
    }

    /// Fetch data for every sensor matching `filters`.
    ///
    /// `fields` is required by the remote API and names the columns of the
    /// returned data table.
    // `filters` is skipped: `SensorFilters::read_keys` carries credentials.
    #[tracing::instrument(skip(self, filters))]
    pub fn get_sensors_data(
        &self,
        fields: &str,
        filters: &SensorFilters,
    ) -> Result<ApiResponse<Value>> {
        let mut params = Params::new();
        params.insert("fields".to_string(), fields.to_string());
        collect_optional_args(&mut params, &filters.pairs(), &[]);

        self.request_json(
            Method::GET,
            Endpoint::Sensors,
            self.require_read_key()?,
            &params,
        )
    }

    /// Create a new group, a named collection of sensor members.
    #[tracing::instrument(skip(self))]
    pub fn create_group(&self, name: &str) -> Result<ApiResponse<Value>> {
        let mut params = Params::new();
        params.insert("name".to_string(), name.to_string());

        self.request_json(
            Method::POST,
            Endpoint::Groups,
            self.require_write_key()?,
            &params,
        )
    }

    /// Delete the group identified by `group_id`.
    ///
    /// The API answers 204 with an empty body on success, so the body is
    /// returned as raw text rather than parsed JSON.
    #[tracing::instrument(skip(self))]
    pub fn delete_group(&self, group_id: u64) -> Result<ApiResponse<String>> {
        self.request_text(
            Method::DELETE,
            Endpoint::Group { group_id },
            self.require_write_key()?,
            &Params::new(),
        )
    }

    /// Add a sensor to a group by creating a new member record.
    ///
    /// See [`GroupMemberParams`] for which combinations of identification the
    /// remote API accepts for public and private sensors.
    #[tracing::instrument(skip(self))]
    pub fn add_group_member(
        &self,
        group_id: u64,
        member: &GroupMemberParams,
    ) -> Result<ApiResponse<Value>> {
        let mut params = Params::new();
        params.insert("group_id".to_string(), group_id.to_string());
        collect_optional_args(&mut params, &member.pairs(), &[]);

        self.request_json(
            Method::POST,
            Endpoint::GroupMembers { group_id },
            self.require_write_key()?,
            &params,
        )
    }

    /// Remove a member (sensor) from a group.
    ///
    /// `member_id` identifies the membership record within the group, not
    /// the sensor itself. Returns the raw text body; success is a 204 with
    /// an empty body.
    #[tracing::instrument(skip(self))]
    pub fn delete_group_member(
        &self,
        group_id: u64,
        member_id: u64,
    ) -> Result<ApiResponse<String>> {
        self.request_text(
            Method::DELETE,
            Endpoint::GroupMember {
                group_id,
                member_id,
            },
            self.require_write_key()?,
            &Params::new(),
        )
    }

    /// Fetch the group record for `group_id`, including its member list.
    #[tracing::instrument(skip(self))]
    pub fn get_group_info(&self, group_id: u64) -> Result<ApiResponse<Value>> {
        self.request_json(
            Method::GET,
            Endpoint::Group { group_id },
            self.require_read_key()?,
            &Params::new(),
        )
    }

    /// List every group owned by the configured key.
    #[tracing::instrument(skip(self))]
    pub fn get_owned_groups(&self) -> Result<ApiResponse<Value>> {
        self.request_json(
            Method::GET,
            Endpoint::Groups,
            self.require_read_key()?,
            &Params::new(),
        )
    }

    /// Fetch data for the sensors contained in `group_id`.
    ///
    /// Same shape and filters as [`get_sensors_data`](Self::get_sensors_data),
    /// restricted to the group's members.
    // `filters` is skipped: `SensorFilters::read_keys` carries credentials.
    #[tracing::instrument(skip(self, filters))]
    pub fn get_group_sensors_data(
        &self,
        group_id: u64,
        fields: &str,
        filters: &SensorFilters,
    ) -> Result<ApiResponse<Value>> {
        let mut params = Params::new();
        params.insert("fields".to_string(), fields.to_string());
        collect_optional_args(&mut params, &filters.pairs(), &[]);

        self.request_json(
            Method::GET,
            Endpoint::GroupMembers { group_id },
            self.require_read_key()?,
            &params,
        )
    }

    fn require_read_key(&self) -> Result<&str> {
        self.read_key
            .as_deref()
            .ok_or(PurpleAirError::KeyNotConfigured("read"))
    }

    fn require_write_key(&self) -> Result<&str> {
        self.write_key
            .as_deref()
            .ok_or(PurpleAirError::KeyNotConfigured("write"))
    }

    /// Issue one request and return the status with the JSON-decoded body.
    fn request_json<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint,
        key: &str,
        query: &Q,
    ) -> Result<ApiResponse<Value>> {
        let response = self.send(method, endpoint, key, query)?;
        let status = response.status().as_u16();
        let body = response.json()?;
        Ok(ApiResponse { status, body })
    }

    /// Issue one request and return the status with the body as raw text.
    fn request_text<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint,
        key: &str,
        query: &Q,
    ) -> Result<ApiResponse<String>> {
        let response = self.send(method, endpoint, key, query)?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(ApiResponse { status, body })
    }

    fn send<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: Endpoint,
        key: &str,
        query: &Q,
    ) -> Result<reqwest::blocking::Response> {
        let url = self.base_url.join(&endpoint.path())?;
        tracing::debug!(%url, "sending request");

        let response = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, key)
            .query(query)
            .send()
            .map_err(PurpleAirError::HttpError)?;

        Ok(response)
    }
}
