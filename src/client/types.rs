//! API 响应类型定义

use serde::Deserialize;
use serde_json::Value;

/// zone 列表响应：`{managedZones: [...], nextPageToken?}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ManagedZonesListResponse {
    #[serde(default)]
    pub managed_zones: Vec<Value>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// 错误信封：`{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[allow(dead_code)]
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}
