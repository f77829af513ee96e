//! Maps page descriptors onto navigable links and their accessible labels.

use serde::Serialize;
use url::form_urlencoded;
use utoipa::ToSchema;

use crate::pagination::{PageDescriptor, PaginationResult};

/// Query keys owned by the pagination strip. Existing values are replaced.
const PAGING_KEYS: [&str; 3] = ["skip", "limit", "page"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Previous,
    Numeric,
    Active,
    Ellipsis,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageLink {
    pub kind: LinkKind,
    pub page: Option<u64>,
    /// Query string (leading `?`) for the target page; `None` for gap markers.
    pub href: Option<String>,
    pub label: String,
    pub aria_label: String,
}

/// Query string pointing at `target_page`, keeping every pair of
/// `existing_query` except the paging keys.
pub fn page_href(existing_query: &[(String, String)], target_page: u64, items_per_page: u64) -> String {
    let skip = target_page.saturating_sub(1).saturating_mul(items_per_page);

    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    serializer.extend_pairs(
        existing_query
            .iter()
            .filter(|(key, _)| !PAGING_KEYS.contains(&key.as_str())),
    );
    serializer
        .append_pair("skip", &skip.to_string())
        .append_pair("limit", &items_per_page.to_string())
        .append_pair("page", &target_page.to_string());
    serializer.finish()
}

pub fn page_link(
    descriptor: &PageDescriptor,
    existing_query: &[(String, String)],
    items_per_page: u64,
) -> PageLink {
    let href = descriptor
        .target_page()
        .map(|page| page_href(existing_query, page, items_per_page));

    let (kind, page, label, aria_label) = match *descriptor {
        PageDescriptor::Previous { target_page } => (
            LinkKind::Previous,
            Some(target_page),
            "Previous".to_string(),
            "Previous set of pages".to_string(),
        ),
        PageDescriptor::Next { target_page } => (
            LinkKind::Next,
            Some(target_page),
            "Next".to_string(),
            "Next set of pages".to_string(),
        ),
        PageDescriptor::Numeric { page } => (
            LinkKind::Numeric,
            Some(page),
            page.to_string(),
            format!("Page {}", page),
        ),
        PageDescriptor::Active { page } => (
            LinkKind::Active,
            Some(page),
            page.to_string(),
            format!("Current Page, Page {}", page),
        ),
        PageDescriptor::Ellipsis {
            skipped_from,
            skipped_to,
        } => (
            LinkKind::Ellipsis,
            None,
            "…".to_string(),
            format!("Pages {} to {}", skipped_from + 1, skipped_to.saturating_sub(1)),
        ),
    };

    PageLink {
        kind,
        page,
        href,
        label,
        aria_label,
    }
}

pub fn page_links(
    result: &PaginationResult,
    existing_query: &[(String, String)],
    items_per_page: u64,
) -> Vec<PageLink> {
    result
        .items
        .iter()
        .map(|descriptor| page_link(descriptor, existing_query, items_per_page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{build, PaginationRequest};

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn href_replaces_paging_keys_and_keeps_the_rest() {
        let existing = pairs(&[("status", "open"), ("page", "9"), ("q", "grant fund"), ("skip", "80")]);
        assert_eq!(
            page_href(&existing, 3, 10),
            "?status=open&q=grant+fund&skip=20&limit=10&page=3"
        );
    }

    #[test]
    fn href_for_first_page_skips_nothing() {
        assert_eq!(page_href(&[], 1, 25), "?skip=0&limit=25&page=1");
    }

    #[test]
    fn links_follow_descriptors() {
        let result = build(PaginationRequest::new(10, 100).with_current_page(5)).unwrap();
        let links = page_links(&result, &[], 10);

        assert_eq!(links.len(), result.items.len());
        assert_eq!(links[0].kind, LinkKind::Previous);
        assert_eq!(links[0].aria_label, "Previous set of pages");
        assert_eq!(links[0].href.as_deref(), Some("?skip=30&limit=10&page=4"));

        let gap = &links[2];
        assert_eq!(gap.kind, LinkKind::Ellipsis);
        assert_eq!(gap.href, None);
        assert_eq!(gap.aria_label, "Pages 2 to 3");

        let active = links.iter().find(|l| l.kind == LinkKind::Active).unwrap();
        assert_eq!(active.page, Some(5));
        assert_eq!(active.aria_label, "Current Page, Page 5");

        let last = links.last().unwrap();
        assert_eq!(last.kind, LinkKind::Next);
        assert_eq!(last.label, "Next");
        assert_eq!(last.href.as_deref(), Some("?skip=50&limit=10&page=6"));
    }

    #[test]
    fn hidden_pagination_has_no_links() {
        let result = build(PaginationRequest::new(10, 3)).unwrap();
        assert!(page_links(&result, &[], 10).is_empty());
    }
}
