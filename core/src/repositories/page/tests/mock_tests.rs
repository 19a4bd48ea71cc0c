//! Tests for the mock page repository implementation

use crate::domain::entities::page::{NewPage, PageDescriptor};
use crate::repositories::page::{MockPageRepository, PageRepository};

fn new_page(url: &str) -> NewPage {
    NewPage::from(&PageDescriptor::new(url, "name", "file"))
}

#[tokio::test]
async fn test_insert_generates_ids() {
    let repo = MockPageRepository::new();

    let first = repo.insert(new_page("a")).await.unwrap();
    let second = repo.insert(new_page("b")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.find_by_url("b").await.unwrap(), Some(second));
    assert_eq!(repo.find_by_url("a").await.unwrap(), Some(first));
}

#[tokio::test]
async fn test_delete_reports_presence() {
    let repo = MockPageRepository::new();
    let page = repo.insert(new_page("a")).await.unwrap();

    assert!(repo.delete(page.id).await.unwrap());
    assert!(!repo.delete(page.id).await.unwrap());
    assert!(repo.find_by_url("a").await.unwrap().is_none());
}

#[tokio::test]
async fn test_forced_failure() {
    let repo = MockPageRepository::new();
    repo.set_should_fail(true);
    assert!(repo.insert(new_page("a")).await.is_err());
    assert!(repo.find_by_url("a").await.is_err());
}
