use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};
use shared::models::{NewVote, VoteRecord};
use crate::config::CONFIG;

/// Thin client for the shared vote ledger: append a row, fetch all rows,
/// subscribe to insert notifications. No business logic, no retries.
pub struct LedgerClient;

impl LedgerClient {
    pub async fn insert(vote: &NewVote) -> Result<VoteRecord, String> {
        let request = Request::post(&format!("{}/votes", CONFIG.api_base_url))
            .json(vote)
            .map_err(|e| e.to_string())?;

        let response = request.send().await.map_err(|e| e.to_string())?;
        if response.status() != 200 {
            return Err(format!("Vote rejected with status {}", response.status()));
        }

        response.json::<VoteRecord>().await.map_err(|e| e.to_string())
    }

    pub async fn fetch_all() -> Result<Vec<VoteRecord>, String> {
        let response = Request::get(&format!("{}/votes", CONFIG.api_base_url))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        response.json::<Vec<VoteRecord>>().await.map_err(|e| e.to_string())
    }

    /// Listen for `vote` insert events. The events carry no payload; callers
    /// refetch and recompute. Dropping the returned handle unsubscribes.
    pub fn subscribe(on_insert: impl Fn() + 'static) -> Result<LedgerSubscription, String> {
        let source = EventSource::new(&format!("{}/votes/events", CONFIG.api_base_url))
            .map_err(|_| "Failed to open ledger event stream".to_string())?;

        let callback = Closure::<dyn FnMut(MessageEvent)>::new(move |_: MessageEvent| on_insert());
        source
            .add_event_listener_with_callback("vote", callback.as_ref().unchecked_ref())
            .map_err(|_| "Failed to attach ledger event listener".to_string())?;

        Ok(LedgerSubscription { source, _callback: callback })
    }
}

pub struct LedgerSubscription {
    source: EventSource,
    // Keeps the JS callback alive for as long as the subscription.
    _callback: Closure<dyn FnMut(MessageEvent)>,
}

impl Drop for LedgerSubscription {
    fn drop(&mut self) {
        self.source.close();
    }
}
