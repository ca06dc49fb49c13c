//! Pagination view-model: navigation availability and URL construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::items::{PageItem, page_items};
use crate::query::{ParamValue, encode_component};

/// Query key reserved for the page number. URL builders inject it last,
/// and constructors strip it from caller-supplied parameters.
pub const PAGE_KEY: &str = "page";

/// Navigation state for one pager widget.
///
/// Holds the page position plus everything needed to rebuild the target
/// URLs: the endpoint and the query parameters the listing was reached
/// with. The host owns the instance and replaces `current_page` when the
/// user navigates; nothing here mutates it. Parameters live in a
/// `BTreeMap` so identical input always yields the same URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub endpoint: String,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl Pagination {
    /// State for one widget render, with no extra query parameters.
    #[must_use]
    pub fn new(current_page: u32, total_pages: u32, endpoint: impl Into<String>) -> Self {
        Self {
            current_page,
            total_pages,
            endpoint: endpoint.into(),
            params: BTreeMap::new(),
        }
    }

    /// Attach one query parameter carried into every built URL.
    /// The reserved `page` key is ignored.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let key = key.into();
        if key != PAGE_KEY {
            self.params.insert(key, value.into());
        }
        self
    }

    /// Replace the carried parameters wholesale, dropping any reserved
    /// `page` entry.
    #[must_use]
    pub fn with_params(mut self, params: BTreeMap<String, ParamValue>) -> Self {
        self.params = params;
        self.params.remove(PAGE_KEY);
        self
    }

    /// Whether a page exists before the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a page exists after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// URL for `page`: the endpoint plus the carried parameters, each key
    /// and value percent-encoded, with `page=<page>` appended last so it
    /// overrides anything a caller smuggled into `params`.
    #[must_use]
    pub fn url_for_page(&self, page: u32) -> String {
        let mut query = String::new();
        for (key, value) in &self.params {
            if key == PAGE_KEY {
                continue;
            }
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&encode_component(key));
            query.push('=');
            query.push_str(&encode_component(&value.to_string()));
        }
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(PAGE_KEY);
        query.push('=');
        query.push_str(&page.to_string());
        format!("{endpoint}?{query}", endpoint = self.endpoint)
    }

    /// URL for the page before the current one. Only meaningful while
    /// `has_previous()` holds; the position saturates rather than clamps.
    #[must_use]
    pub fn previous_url(&self) -> String {
        self.url_for_page(self.current_page.saturating_sub(1))
    }

    /// URL for the page after the current one. Only meaningful while
    /// `has_next()` holds.
    #[must_use]
    pub fn next_url(&self) -> String {
        self.url_for_page(self.current_page.saturating_add(1))
    }

    /// Entries for the abbreviated pager strip.
    #[must_use]
    pub fn items(&self) -> Vec<PageItem> {
        page_items(self.current_page, self.total_pages)
    }
}
