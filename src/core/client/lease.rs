use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A client handle borrowed from a [`super::ConnectionManager`] for one call.
#[derive(Debug)]
pub struct ClientLease {
    http: Client,
    outstanding: Arc<AtomicUsize>,
}

impl ClientLease {
    pub(super) fn new(http: Client, outstanding: Arc<AtomicUsize>) -> Self {
        Self { http, outstanding }
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

impl Drop for ClientLease {
    fn drop(&mut self) {
        self.outstanding.fetch_sub(1, Ordering::AcqRel);
    }
}
