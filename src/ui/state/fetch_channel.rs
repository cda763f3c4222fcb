use std::future::Future;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::domain::entities::request::{RequestSequencer, RequestTicket};
use crate::usecase::ports::api::ApiError;

pub struct FetchChannel<T: 'static> {
    pub items: Signal<Vec<T>>,
    pub loading: Signal<bool>,
    sequencer: Signal<RequestSequencer>,
}

impl<T: 'static> Clone for FetchChannel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchChannel<T> {}

impl<T: 'static> PartialEq for FetchChannel<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
            && self.loading == other.loading
            && self.sequencer == other.sequencer
    }
}

pub fn use_fetch_channel<T: 'static>() -> FetchChannel<T> {
    FetchChannel {
        items: use_signal(Vec::<T>::new),
        loading: use_signal(|| false),
        sequencer: use_signal(RequestSequencer::default),
    }
}

#[derive(Debug, PartialEq)]
pub struct Settled<T> {
    pub items: Vec<T>,
    pub failure: Option<String>,
}

pub fn settle<T>(
    sequencer: &RequestSequencer,
    ticket: RequestTicket,
    failure: &str,
    result: Result<Vec<T>, ApiError>,
) -> Option<Settled<T>> {
    Some(match sequencer.accept(ticket, result)? {
        Ok(items) => Settled {
            items,
            failure: None,
        },
        Err(err) => {
            warn!(%err, "{failure}");
            Settled {
                items: Vec::new(),
                failure: Some(format!("{failure}: {err}")),
            }
        }
    })
}

impl<T: 'static> FetchChannel<T> {
    pub fn clear(mut self) {
        self.sequencer.write().issue();
        self.items.set(Vec::new());
        self.loading.set(false);
    }

    pub fn load<F>(mut self, mut status: Signal<String>, failure: &'static str, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let ticket = self.sequencer.write().issue();
        self.loading.set(true);
        spawn(async move {
            let result = fetch.await;
            let Some(settled) = settle(&self.sequencer.peek(), ticket, failure, result) else {
                debug!(?ticket, "discarding superseded response");
                return;
            };
            self.loading.set(false);
            self.items.set(settled.items);
            if let Some(message) = settled.failure {
                status.set(message);
            }
        });
    }
}
