//! HTTP handlers and the helpers they share.

use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Deserialize;
use tera::Context;

use crate::domain::filtering::{DEFAULT_PAGE_SIZE, FilteringParams, SortKey, sort_key_from_query};

pub mod main;
pub mod vehicle_make;
pub mod vehicle_model;

/// Maps a flash message level to the Bootstrap alert class used by templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: pending alerts and the active navigation tab.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

fn default_page_number() -> i32 {
    1
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

/// Query string accepted by every listing page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQueryParams {
    pub search_query: Option<String>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub descending: bool,
    #[serde(default = "default_page_number")]
    pub page_number: i32,
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

impl ListQueryParams {
    pub fn to_filtering_params(&self) -> FilteringParams {
        FilteringParams {
            search_query: self.search_query.clone(),
            sort_by: sort_key_from_query(self.sort_by.as_deref()),
            descending: self.descending,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }

    /// Exposes the current listing state so templates can build sort and page links.
    pub fn insert_into(&self, context: &mut Context) {
        let sort_by = sort_key_from_query(self.sort_by.as_deref()).map(SortKey::as_str);

        context.insert("search_query", self.search_query.as_deref().unwrap_or(""));
        context.insert("sort_by", sort_by.unwrap_or(self.sort_by.as_deref().unwrap_or("")));
        context.insert("descending", &self.descending);
        context.insert("page_size", &self.page_size);
        context.insert("sort_keys", &SortKey::ALL.map(SortKey::as_str));
    }
}
