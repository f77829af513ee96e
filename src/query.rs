use utoipa::IntoParams;

use crate::pagination::{PaginationError, PaginationRequest};

/// Raw `page` / `limit` / `skip` query parameters.
///
/// Kept as strings so junk values fall back to defaults instead of being
/// rejected.
#[derive(Debug, Default, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number.
    #[param(value_type = Option<u64>, minimum = 1)]
    pub page: Option<String>,
    /// Page size.
    #[param(value_type = Option<u64>, minimum = 1)]
    pub limit: Option<String>,
    /// Offset of the first item; used when `page` is missing.
    #[param(value_type = Option<u64>, minimum = 0)]
    pub skip: Option<String>,
}

fn parse(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

impl PageQuery {
    pub fn limit(&self, default_limit: u64, max_limit: u64) -> Result<u64, PaginationError> {
        match parse(self.limit.as_deref()) {
            Some(0) => Err(PaginationError::InvalidArgument(
                "limit must be greater than zero".into(),
            )),
            Some(limit) => Ok(limit.min(max_limit.max(1))),
            None => Ok(default_limit),
        }
    }

    pub fn current_page(&self, limit: u64) -> u64 {
        match parse(self.page.as_deref()) {
            Some(page) if page > 0 => page,
            _ => match parse(self.skip.as_deref()) {
                Some(skip) if limit > 0 => (skip / limit).saturating_add(1),
                _ => 1,
            },
        }
    }

    pub fn to_request(
        &self,
        total_items: u64,
        default_limit: u64,
        max_limit: u64,
    ) -> Result<PaginationRequest, PaginationError> {
        let limit = self.limit(default_limit, max_limit)?;
        Ok(PaginationRequest::new(limit, total_items).with_current_page(self.current_page(limit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::build;

    fn query(page: Option<&str>, limit: Option<&str>, skip: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(String::from),
            limit: limit.map(String::from),
            skip: skip.map(String::from),
        }
    }

    #[test]
    fn defaults_when_empty() {
        let request = PageQuery::default().to_request(55, 10, 100).unwrap();
        assert_eq!(request, PaginationRequest::new(10, 55));
    }

    #[test]
    fn page_takes_precedence_over_skip() {
        let request = query(Some("3"), Some("20"), Some("100"))
            .to_request(500, 10, 100)
            .unwrap();
        assert_eq!(request.current_page, 3);
        assert_eq!(request.items_per_page, 20);
    }

    #[test]
    fn skip_derives_page() {
        let q = query(None, Some("10"), Some("40"));
        assert_eq!(q.current_page(10), 5);
        let q = query(Some("abc"), None, Some("45"));
        assert_eq!(q.current_page(10), 5);
    }

    #[test]
    fn invalid_page_falls_back_to_first() {
        assert_eq!(query(Some("0"), None, None).current_page(10), 1);
        assert_eq!(query(Some("-2"), None, None).current_page(10), 1);
        assert_eq!(query(Some("two"), None, Some("x")).current_page(10), 1);
    }

    #[test]
    fn huge_skip_saturates_instead_of_overflowing() {
        let q = query(None, Some("1"), Some(&u64::MAX.to_string()));
        assert_eq!(q.current_page(1), u64::MAX);

        let request = q.to_request(100, 10, 100).unwrap();
        assert_eq!(request.current_page, u64::MAX);
        assert_eq!(build(request).unwrap().current_page, 100);
    }

    #[test]
    fn limit_is_capped_and_zero_rejected() {
        assert_eq!(query(None, Some("500"), None).limit(10, 100), Ok(100));
        assert_eq!(query(None, Some("nope"), None).limit(10, 100), Ok(10));
        assert!(matches!(
            query(None, Some("0"), None).limit(10, 100),
            Err(PaginationError::InvalidArgument(_))
        ));
    }
}
