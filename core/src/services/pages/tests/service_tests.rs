use std::sync::Arc;

use crate::domain::entities::page::Page;
use crate::domain::value_objects::page_resolution::PageResolution;
use crate::repositories::MockPageRepository;
use crate::services::pages::PageService;

fn service(pages: Vec<Page>) -> PageService<MockPageRepository> {
    PageService::new(Arc::new(MockPageRepository::with_pages(pages)))
}

#[tokio::test]
async fn test_resolve_finds_page_by_id() {
    let page = Page::new("Performance", "KPIs");
    let id = page.id.clone();
    let service = service(vec![Page::new("Finance", "Revenue"), page.clone()]);

    let resolution = service.resolve(&id).await.unwrap();
    assert_eq!(resolution, PageResolution::Found { page });
}

#[tokio::test]
async fn test_missing_page_falls_back_to_first() {
    let first = Page::new("Finance", "Revenue");
    let first_id = first.id.clone();
    let service = service(vec![first, Page::new("Performance", "KPIs")]);

    let resolution = service.resolve("missing").await.unwrap();
    assert_eq!(
        resolution,
        PageResolution::FallbackToFirst {
            page_id: first_id.clone()
        }
    );
    assert_eq!(
        resolution.redirect_route().as_deref(),
        Some(format!("/page/{}", first_id).as_str())
    );
}

#[tokio::test]
async fn test_empty_collection_falls_back_to_default() {
    let service = service(vec![]);

    let resolution = service.resolve("anything").await.unwrap();
    assert_eq!(resolution, PageResolution::FallbackToDefault);
    assert_eq!(
        resolution.redirect_route().as_deref(),
        Some("/dashboard/performance")
    );
}
