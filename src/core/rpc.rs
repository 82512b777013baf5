//! JSON-RPC 2.0 client for the Sui fullnode.
//!
//! Thin, read-only calls over the Fetch API. All response shapes are
//! validated-with-defaults at this boundary; pagination stops at the first
//! page by design.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::config::{OWNED_OBJECTS_LIMIT, RPC_URL, TRANSACTIONS_LIMIT};
use crate::core::error::RpcError;
use crate::models::{ChainObject, ObjectEnvelope, TransactionRecord};
use crate::utils::post_json;

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// One page of a paginated result. Cursor fields are ignored: only the
/// first page is ever requested.
#[derive(Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

async fn call<T: DeserializeOwned>(method: &str, params: Value) -> Result<T, RpcError> {
    let request = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method,
        params,
    };
    let response: RpcResponse<T> = post_json(RPC_URL, &request).await?;
    if let Some(err) = response.error {
        return Err(RpcError::Node {
            code: err.code,
            message: err.message,
        });
    }
    response.result.ok_or(RpcError::MissingResult)
}

/// Enumerate the first page of objects owned by `owner`.
///
/// Entries whose envelope carries an error instead of data are skipped
/// here; everything else flows to the classifier untouched.
pub async fn get_owned_objects(owner: &str) -> Result<Vec<ChainObject>, RpcError> {
    let params = json!([
        owner,
        {
            "options": {
                "showType": true,
                "showContent": true,
                "showDisplay": true
            }
        },
        null,
        OWNED_OBJECTS_LIMIT
    ]);
    let page: Page<ObjectEnvelope> = call("suix_getOwnedObjects", params).await?;
    Ok(page.data.into_iter().filter_map(|entry| entry.data).collect())
}

/// Fetch the full detail of a single object.
pub async fn get_object(object_id: &str) -> Result<ChainObject, RpcError> {
    let params = json!([
        object_id,
        {
            "showType": true,
            "showContent": true,
            "showDisplay": true,
            "showOwner": true
        }
    ]);
    let envelope: ObjectEnvelope = call("sui_getObject", params).await?;
    envelope.data.ok_or(RpcError::MissingResult)
}

/// Query the first page of transaction blocks sent from `address`, newest
/// first.
pub async fn query_transaction_blocks(address: &str) -> Result<Vec<TransactionRecord>, RpcError> {
    let params = json!([
        {
            "filter": { "FromAddress": address },
            "options": {
                "showInput": true,
                "showEffects": true,
                "showEvents": true
            }
        },
        null,
        TRANSACTIONS_LIMIT,
        true
    ]);
    let page: Page<TransactionRecord> = call("suix_queryTransactionBlocks", params).await?;
    Ok(page.data)
}

/// Resolve the SuiNS name for an address: first name of the resolved list,
/// if any.
///
/// Failures are logged and swallowed; the caller falls back to showing the
/// raw address.
pub async fn resolve_name(address: &str) -> Option<String> {
    match call::<Page<String>>("suix_resolveNameServiceNames", json!([address])).await {
        Ok(page) => page.data.into_iter().next(),
        Err(err) => {
            web_sys::console::warn_1(&format!("SuiNS resolution failed: {err}").into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_result_page() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "data": [
                    { "data": { "objectId": "0x1", "type": "0x1::sui::SUI" } },
                    { "error": { "code": "notExists" } }
                ],
                "hasNextPage": false
            }
        }"#;
        let response: RpcResponse<Page<ObjectEnvelope>> = serde_json::from_str(raw).unwrap();
        let page = response.result.unwrap();
        assert_eq!(page.data.len(), 2);
        assert!(page.data[0].data.is_some());
        assert!(page.data[1].data.is_none());
    }

    #[test]
    fn parses_error_body() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Invalid params" }
        }"#;
        let response: RpcResponse<Page<ObjectEnvelope>> = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        let err = response.error.unwrap();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Invalid params");
    }

    #[test]
    fn parses_name_service_page() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "data": ["example.sui"], "hasNextPage": false }
        }"#;
        let response: RpcResponse<Page<String>> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.result.unwrap().data,
            vec!["example.sui".to_string()]
        );
    }

    #[test]
    fn empty_result_defaults_to_empty_page() {
        let raw = r#"{ "jsonrpc": "2.0", "id": 1, "result": {} }"#;
        let response: RpcResponse<Page<String>> = serde_json::from_str(raw).unwrap();
        assert!(response.result.unwrap().data.is_empty());
    }
}
