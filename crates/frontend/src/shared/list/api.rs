use contracts::shared::flash::FlashMessage;
use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::ListResponse;
use contracts::{CrmEntity, EntityKind};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_query};

/// Serialize the active list query into a query string.
///
/// Filter keys are emitted verbatim as top-level parameters.
pub fn encode_query(query: &ListQuery) -> Result<String, String> {
    serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))
}

/// Fetch one page of records of kind `T`
pub async fn fetch_page<T>(query: &ListQuery) -> Result<ListResponse<T>, String>
where
    T: CrmEntity + serde::de::DeserializeOwned,
{
    let url = api_url_with_query(&T::KIND.api_path(), &encode_query(query)?);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch {}: {}",
            T::KIND.resource(),
            response.status()
        ));
    }

    response
        .json::<ListResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete one record, returning the flash payload of the response
pub async fn delete_record<T: CrmEntity>(id: i64) -> Result<FlashMessage, String> {
    let url = api_url(&format!("{}/{}", T::KIND.api_path(), id));

    let response = Request::delete(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to delete {} #{}: {}",
            T::KIND.resource(),
            id,
            response.status()
        ));
    }

    if response.status() == 204 {
        return Ok(no_content_flash(T::KIND, id));
    }

    // the record is gone either way, a broken body only loses the toast
    match response.json::<FlashMessage>().await {
        Ok(flash) => Ok(flash),
        Err(e) => {
            log::warn!("Unreadable delete response for {} #{}: {}", T::KIND.resource(), id, e);
            Ok(FlashMessage::default())
        }
    }
}

/// Flash for a delete answered without a body
fn no_content_flash(kind: EntityKind, id: i64) -> FlashMessage {
    FlashMessage::success(format!("{} #{} deleted", kind.display_name(), id))
}
