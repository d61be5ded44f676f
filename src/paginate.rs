use crate::directory::Page;
use crate::error::Result;

/// Drains a paginated listing by calling `fetch` with successive page
/// numbers, starting at 1, until the server reports no further page.
///
/// The first page-fetch error aborts the traversal; no partial result is
/// returned.
pub fn fetch_all<T, F>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Result<Page<T>>,
{
    let mut items = Vec::new();
    let mut page = 1;
    loop {
        let fetched = fetch(page)?;
        items.extend(fetched.items);
        match fetched.next {
            Some(next) => page = next,
            None => break,
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::fetch_all;
    use crate::directory::Page;
    use crate::error::AuditError;

    #[test]
    fn collects_items_across_pages() {
        let pages = vec![
            Page {
                items: vec![1, 2, 3],
                next: Some(2),
            },
            Page {
                items: vec![4, 5],
                next: None,
            },
        ];
        let items = fetch_all(|page| Ok(pages[(page - 1) as usize].clone())).expect("all pages");
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn stops_after_full_page_followed_by_empty_sentinel_page() {
        let mut requested = Vec::new();
        let items = fetch_all(|page| {
            requested.push(page);
            match page {
                1 => Ok(Page {
                    items: vec![0u64; 30],
                    next: Some(2),
                }),
                _ => Ok(Page {
                    items: Vec::new(),
                    next: None,
                }),
            }
        })
        .expect("pagination terminates");
        assert_eq!(items.len(), 30);
        assert_eq!(requested, vec![1, 2]);
    }

    #[test]
    fn propagates_the_first_page_error() {
        let result: crate::Result<Vec<u64>> = fetch_all(|page| {
            if page == 1 {
                Ok(Page {
                    items: vec![7],
                    next: Some(2),
                })
            } else {
                Err(AuditError::Api {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                    url: "https://example.invalid/listing".to_string(),
                })
            }
        });
        assert!(matches!(result, Err(AuditError::Api { .. })));
    }
}
