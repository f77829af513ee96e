use axum::{extract::RawQuery, Json};
use serde::Serialize;
use url::form_urlencoded;

use crate::config::get_config;
use crate::error::AppError;
use crate::links::{page_links, PageLink};
use crate::pagination::{build, PageDescriptor};
use crate::query::PageQuery;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PaginationWindowResponse {
    pub total_items: u64,
    pub items_per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub first_item_index: u64,
    pub last_item_index: u64,
    pub items: Vec<PageDescriptor>,
    pub links: Vec<PageLink>,
}

fn split_query(raw: Option<&str>) -> (PageQuery, Option<String>, Vec<(String, String)>) {
    let pairs: Vec<(String, String)> = raw
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let mut query = PageQuery::default();
    let mut total = None;
    for (key, value) in &pairs {
        match key.as_str() {
            "page" => query.page = Some(value.clone()),
            "limit" => query.limit = Some(value.clone()),
            "skip" => query.skip = Some(value.clone()),
            "total" => total = Some(value.clone()),
            _ => {}
        }
    }
    (query, total, pairs)
}

// GET /pagination
#[utoipa::path(
    get,
    path = "/pagination",
    params(
        ("total" = u64, Query, description = "Total number of items in the result set"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Pagination window", body = PaginationWindowResponse),
        (status = 400, description = "Missing total or invalid page size")
    ),
    tag = "Pagination"
)]
pub async fn pagination_window(
    RawQuery(raw): RawQuery,
) -> Result<Json<PaginationWindowResponse>, AppError> {
    let config = get_config();
    let (query, total, existing) = split_query(raw.as_deref());

    let total_items: u64 = total
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("total is required".into()))?
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("total must be a non-negative integer".into()))?;

    let request = query.to_request(total_items, config.page_size(), config.max_items_per_page)?;
    let result = build(request)?;

    let items_per_page = request.items_per_page;
    // An empty result set shows "0 to 0" rather than "1 to 0".
    let (first_item_index, last_item_index) = if total_items == 0 {
        (0, 0)
    } else {
        let first = result.first_item_index;
        (first, first.saturating_add(items_per_page - 1).min(total_items))
    };
    let links = page_links(&result, &existing, items_per_page);

    tracing::info!(
        "Pagination | GET /pagination | total={} | limit={} | page={}/{} | res=200",
        total_items,
        items_per_page,
        result.current_page,
        result.last_page
    );

    Ok(Json(PaginationWindowResponse {
        total_items,
        items_per_page,
        current_page: result.current_page,
        last_page: result.last_page,
        first_item_index,
        last_item_index,
        items: result.items,
        links,
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("No such route".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_query_separates_paging_keys() {
        let (query, total, pairs) = split_query(Some("total=120&page=2&status=open&limit=20"));
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.limit.as_deref(), Some("20"));
        assert_eq!(query.skip, None);
        assert_eq!(total.as_deref(), Some("120"));
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn split_query_handles_missing_query() {
        let (query, total, pairs) = split_query(None);
        assert!(query.page.is_none());
        assert!(total.is_none());
        assert!(pairs.is_empty());
    }
}
