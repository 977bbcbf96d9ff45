use uuid::Uuid;

use brewlog_catalog::error::CatalogError;
use brewlog_catalog::usecase::roaster::{
    CreateRoasterUseCase, GetRoasterUseCase, ListRoastersUseCase,
};
use brewlog_domain::pagination::PageQuery;

use crate::helpers::{ALICE, MockRoasterRepo, new_roaster};

#[tokio::test]
async fn should_stamp_creator_on_new_roaster() {
    let repo = MockRoasterRepo::empty();
    let usecase = CreateRoasterUseCase { repo: repo.clone() };

    let roaster = usecase.execute(new_roaster("Tim Wendelboe"), ALICE).await.unwrap();

    assert_eq!(roaster.created_by.as_deref(), Some(ALICE));
    assert_eq!(roaster.updated_by.as_deref(), Some(ALICE));
    assert_eq!(roaster.created_at, roaster.updated_at);
}

#[tokio::test]
async fn should_reject_second_roaster_with_same_name() {
    let repo = MockRoasterRepo::empty();
    let usecase = CreateRoasterUseCase { repo: repo.clone() };

    usecase.execute(new_roaster("Tim Wendelboe"), ALICE).await.unwrap();
    let result = usecase.execute(new_roaster("Tim Wendelboe"), ALICE).await;

    assert!(matches!(result, Err(CatalogError::RoasterAlreadyExists)));
    assert_eq!(repo.roasters.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_fetch_created_roaster_by_id() {
    let repo = MockRoasterRepo::empty();
    let created = CreateRoasterUseCase { repo: repo.clone() }
        .execute(new_roaster("La Cabra"), ALICE)
        .await
        .unwrap();

    let fetched = GetRoasterUseCase { repo }.execute(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_id() {
    let result = GetRoasterUseCase {
        repo: MockRoasterRepo::empty(),
    }
    .execute(Uuid::new_v4())
    .await;
    assert!(matches!(result, Err(CatalogError::RoasterNotFound)));
}

#[tokio::test]
async fn should_page_roasters_and_report_full_total() {
    let repo = MockRoasterRepo::empty();
    let create = CreateRoasterUseCase { repo: repo.clone() };
    for i in 0..5 {
        create.execute(new_roaster(&format!("Roaster {i}")), ALICE).await.unwrap();
    }

    let (page, total) = ListRoastersUseCase { repo }
        .execute(None, None, PageQuery { skip: 2, limit: 2 })
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Roaster 2");
    assert_eq!(total, 5);
}

#[tokio::test]
async fn should_filter_by_name_and_location_case_insensitively() {
    let repo = MockRoasterRepo::empty();
    let create = CreateRoasterUseCase { repo: repo.clone() };
    create.execute(new_roaster("Tim Wendelboe"), ALICE).await.unwrap();
    create.execute(new_roaster("La Cabra"), ALICE).await.unwrap();

    let list = ListRoastersUseCase { repo };
    let (by_name, total) = list
        .execute(Some("wendel"), None, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(total, 1);

    let (by_location, _) = list
        .execute(None, Some("oslo"), PageQuery::default())
        .await
        .unwrap();
    assert_eq!(by_location.len(), 2);
}
