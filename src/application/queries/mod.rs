// src/application/queries/mod.rs
pub mod articles;
pub mod terms;
pub mod users;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::{DomainError, FieldErrors},
        listing::{PageRequest, Sort, SortOrder},
    },
};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use std::str::FromStr;

/// Resolve `sort_by` / `sort_order` against a whitelist enum. Unknown values
/// are reported as field errors rather than silently ignored.
pub(crate) fn parse_sort<F>(
    sort_by: Option<&str>,
    sort_order: Option<&str>,
) -> ApplicationResult<Sort<F>>
where
    F: FromStr<Err = DomainError> + Default,
{
    let mut errors = FieldErrors::new();
    let field = match sort_by.filter(|s| !s.is_empty()) {
        Some(raw) => errors.check("sort_by", raw.parse::<F>()),
        None => Some(F::default()),
    };
    let order = match sort_order.filter(|s| !s.is_empty()) {
        Some(raw) => errors.check("sort_order", raw.parse::<SortOrder>()),
        None => Some(SortOrder::Desc),
    };

    match (field, order) {
        (Some(field), Some(order)) => Ok(Sort::new(field, order)),
        _ => Err(ApplicationError::InvalidFields(errors)),
    }
}

pub(crate) fn page_request(page: Option<u32>, per_page: Option<u32>) -> PageRequest {
    PageRequest::new(page.unwrap_or(1), per_page.unwrap_or_default())
}

/// Calendar-day bounds as `[from 00:00, day after to 00:00)` in UTC.
pub(crate) fn day_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let start = from.map(|day| day.and_time(NaiveTime::MIN).and_utc());
    let end = to
        .and_then(|day| day.checked_add_days(Days::new(1)))
        .map(|day| day.and_time(NaiveTime::MIN).and_utc());
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleSortField;
    use crate::domain::listing::DEFAULT_PER_PAGE;

    #[test]
    fn sort_defaults_to_created_at_desc() {
        let sort: Sort<ArticleSortField> = parse_sort(None, None).unwrap();
        assert_eq!(sort.field, ArticleSortField::CreatedAt);
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[test]
    fn unknown_sort_column_is_a_field_error() {
        let err = parse_sort::<ArticleSortField>(Some("password"), Some("up")).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains("sort_by"));
        assert!(fields.contains("sort_order"));
    }

    #[test]
    fn per_page_defaults_when_absent() {
        assert_eq!(page_request(None, None).per_page(), DEFAULT_PER_PAGE);
        assert_eq!(page_request(Some(0), Some(5)).page(), 1);
    }

    #[test]
    fn day_range_is_half_open() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 24).unwrap();
        let (start, end) = day_range(Some(day), Some(day));
        assert_eq!(start.unwrap().to_rfc3339(), "2025-09-24T00:00:00+00:00");
        assert_eq!(end.unwrap().to_rfc3339(), "2025-09-25T00:00:00+00:00");
    }
}
