//! GraphQlStatusApi - production [`StatusApi`] over the remote query
//! endpoint.
//!
//! One fixed query, POSTed as `{query, variables}` JSON. A response whose
//! `MediaList` record is absent or null means "no list entry" and is a
//! successful `Ok(None)`; only transport and shape problems are errors
//! (and the resolver swallows those too).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ApiError, ListStatus, MediaId, ViewerId};
use crate::ports::StatusApi;

/// Default endpoint of the host's query API.
pub const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co/";

const MEDIA_LIST_QUERY: &str = "\
query($mediaId: Int, $userId: Int) {
  MediaList(mediaId: $mediaId, userId: $userId) {
    status
  }
}";

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    variables: Variables,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables {
    media_id: i64,
    user_id: Option<i64>,
}

#[derive(Deserialize)]
struct QueryResponse {
    data: Option<ResponseData>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "MediaList")]
    media_list: Option<MediaListRecord>,
}

#[derive(Deserialize)]
struct MediaListRecord {
    status: ListStatus,
}

pub struct GraphQlStatusApi {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQlStatusApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for GraphQlStatusApi {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl StatusApi for GraphQlStatusApi {
    async fn media_list_status(
        &self,
        media: MediaId,
        viewer: Option<ViewerId>,
    ) -> Result<Option<ListStatus>, ApiError> {
        let body = QueryBody {
            query: MEDIA_LIST_QUERY,
            variables: Variables {
                media_id: media.as_i64(),
                user_id: viewer.map(|v| v.as_i64()),
            },
        };

        let response: QueryResponse = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        let data = response
            .data
            .ok_or_else(|| ApiError::Malformed("response carries no data record".into()))?;

        Ok(data.media_list.map(|record| record.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_camel_case_variables() {
        let body = QueryBody {
            query: MEDIA_LIST_QUERY,
            variables: Variables {
                media_id: 1535,
                user_id: Some(600),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["variables"]["mediaId"], 1535);
        assert_eq!(json["variables"]["userId"], 600);
        assert!(json["query"].as_str().unwrap().contains("MediaList"));
    }

    #[test]
    fn response_with_entry_decodes_to_status() {
        let raw = r#"{"data": {"MediaList": {"status": "COMPLETED"}}}"#;
        let response: QueryResponse = serde_json::from_str(raw).unwrap();
        let status = response
            .data
            .unwrap()
            .media_list
            .map(|record| record.status);
        assert_eq!(status, Some(ListStatus::Completed));
    }

    #[test]
    fn response_without_entry_decodes_to_none() {
        let raw = r#"{"data": {"MediaList": null}}"#;
        let response: QueryResponse = serde_json::from_str(raw).unwrap();
        assert!(response.data.unwrap().media_list.is_none());
    }
}
