//! Blocking HTTP client for the Tropy project API.

use reqwest::blocking::{Client, Response};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::{Id, Tag};

/// Client for the REST API a running Tropy instance serves on localhost.
///
/// Every method performs one blocking request (tag creation and name-based
/// tagging issue an extra lookup first) and decodes the JSON body. Success
/// is strictly HTTP 200; any other status is reported as
/// [`ApiError::Status`]. There is no retry, pagination, or caching.
pub struct TropyClient {
    client: Client,
    base_url: String,
}

impl TropyClient {
    /// Create a client for the given base address, e.g.
    /// `http://localhost:2019`. No request timeout is configured.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client around a caller-built `reqwest` client, for custom
    /// timeout or proxy settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// List the ids of every item in the project, in server order.
    pub fn list_item_ids(&self) -> Result<Vec<Id>, ApiError> {
        let items: Vec<ItemEnvelope> = self.get_json("/project/items/")?;
        Ok(items.into_iter().map(|item| item.id).collect())
    }

    /// Fetch a single item as the raw JSON object the server returns.
    pub fn get_item(&self, item_id: &Id) -> Result<Map<String, Value>, ApiError> {
        self.get_json(&format!("/project/items/{}", item_id))
    }

    /// Fetch an item's metadata object.
    pub fn get_item_data(&self, item_id: &Id) -> Result<Map<String, Value>, ApiError> {
        self.get_json(&format!("/project/data/{}", item_id))
    }

    /// List an item's photo paths, in server order.
    pub fn get_item_photos(&self, item_id: &Id) -> Result<Vec<String>, ApiError> {
        let photos: Vec<PhotoEnvelope> =
            self.get_json(&format!("/project/items/{}/photos", item_id))?;
        Ok(photos.into_iter().map(|photo| photo.path).collect())
    }

    /// List an item's tag values, in server order.
    ///
    /// The tags route labels each value `path`, not `name`; the raw values
    /// are returned unchanged.
    pub fn get_item_tags(&self, item_id: &Id) -> Result<Vec<Value>, ApiError> {
        let tags: Vec<TagPathEnvelope> =
            self.get_json(&format!("/project/items/{}/tags", item_id))?;
        Ok(tags.into_iter().map(|tag| tag.path).collect())
    }

    /// List every tag in the project.
    pub fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json("/project/tags")
    }

    /// Fetch a single tag by id.
    pub fn get_tag_by_id(&self, tag_id: &Id) -> Result<Tag, ApiError> {
        self.get_json(&format!("/project/tags/{}", tag_id))
    }

    /// Look up a tag by name, case-insensitively.
    ///
    /// Only the first tag in server order is ever considered: a leading
    /// mismatch ends the scan and yields `None`, even when a later tag
    /// matches. A first-position match is re-fetched by id.
    pub fn get_tag_by_name(&self, name: &str) -> Result<Option<Tag>, ApiError> {
        let tags = self.list_tags()?;
        match tags.first() {
            Some(tag) if tag.matches_name(name) => self.get_tag_by_id(&tag.id).map(Some),
            _ => Ok(None),
        }
    }

    /// Create a tag, or reuse an existing one whose name matches
    /// case-insensitively. Returns the tag's id either way.
    ///
    /// The lookup and the creation are separate requests; two concurrent
    /// callers can race each other into duplicate tags.
    pub fn create_tag(&self, name: &str, color: &str) -> Result<Id, ApiError> {
        let tags = self.list_tags()?;
        if let Some(tag) = tags.into_iter().find(|tag| tag.matches_name(name)) {
            return Ok(tag.id);
        }

        let fields = [("name", name.to_string()), ("color", color.to_string())];
        let created: CreatedTag = self.post_form_json("/project/tags", &fields)?;
        Ok(created.id)
    }

    /// Attach tags to an item by name, creating any that do not exist yet.
    ///
    /// Tags are created (or resolved) up front, but the attach payload
    /// itself carries the original names, one `tag` field per name.
    pub fn tag_item_by_name(&self, item_id: &Id, names: &[String]) -> Result<(), ApiError> {
        for name in names {
            self.create_tag(name, "")?;
        }
        self.send_form(
            Method::POST,
            &format!("/project/items/{}/tags", item_id),
            &tag_fields(names),
        )
    }

    /// Attach tags to an item by id.
    pub fn tag_item_by_id(&self, item_id: &Id, tag_ids: &[Id]) -> Result<(), ApiError> {
        self.send_form(
            Method::POST,
            &format!("/project/items/{}/tags", item_id),
            &tag_fields(tag_ids),
        )
    }

    /// Detach tags from an item by id.
    pub fn untag_item_by_id(&self, item_id: &Id, tag_ids: &[Id]) -> Result<(), ApiError> {
        self.send_form(
            Method::DELETE,
            &format!("/project/items/{}/tags", item_id),
            &tag_fields(tag_ids),
        )
    }

    /// Detach tags from an item by name. Names are sent as-is, without
    /// resolving them to ids first.
    pub fn untag_item_by_name(&self, item_id: &Id, names: &[String]) -> Result<(), ApiError> {
        self.send_form(
            Method::DELETE,
            &format!("/project/items/{}/tags", item_id),
            &tag_fields(names),
        )
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()?;
        decode(response)
    }

    fn post_form_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .form(fields)
            .send()?;
        decode(response)
    }

    fn send_form(
        &self,
        method: Method,
        path: &str,
        fields: &[(&str, String)],
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .form(fields)
            .send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// One `tag` form field per value.
fn tag_fields<T: std::fmt::Display>(values: &[T]) -> Vec<(&'static str, String)> {
    values
        .iter()
        .map(|value| ("tag", value.to_string()))
        .collect()
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

// Wire shapes the client reads single fields out of.

#[derive(Deserialize)]
struct ItemEnvelope {
    id: Id,
}

#[derive(Deserialize)]
struct PhotoEnvelope {
    path: String,
}

// The tags route reuses `path` as the key for tag values.
#[derive(Deserialize)]
struct TagPathEnvelope {
    path: Value,
}

#[derive(Deserialize)]
struct CreatedTag {
    id: Id,
}
