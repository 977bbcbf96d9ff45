use uuid::Uuid;

use brewlog_catalog::domain::types::{NewTastingNote, NewTastingSession, TastingSessionPatch};
use brewlog_catalog::error::CatalogError;
use brewlog_catalog::usecase::coffee::CreateCoffeeUseCase;
use brewlog_catalog::usecase::roaster::CreateRoasterUseCase;
use brewlog_catalog::usecase::tasting::{
    CreateTastingUseCase, DeleteTastingUseCase, GetTastingUseCase, ListTastingsUseCase,
    UpdateTastingUseCase,
};
use brewlog_catalog_schema::enums::BrewMethod;
use brewlog_domain::pagination::PageQuery;
use brewlog_domain::patch::Patch;

use crate::helpers::{
    ALICE, BOB, MockCoffeeRepo, MockRoasterRepo, MockTastingRepo, new_coffee, new_roaster,
};

struct World {
    coffees: MockCoffeeRepo,
    tastings: MockTastingRepo,
    coffee_id: Uuid,
}

async fn world() -> World {
    let roasters = MockRoasterRepo::empty();
    let coffees = MockCoffeeRepo::empty();
    let roaster = CreateRoasterUseCase {
        repo: roasters.clone(),
    }
    .execute(new_roaster("Tim Wendelboe"), ALICE)
    .await
    .unwrap();
    let coffee = CreateCoffeeUseCase {
        coffees: coffees.clone(),
        roasters,
    }
    .execute(new_coffee("Nano Challa", roaster.id, &[]), ALICE)
    .await
    .unwrap();
    World {
        tastings: MockTastingRepo {
            tastings: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
            flavor_tags: coffees.flavor_tags.clone(),
        },
        coffees,
        coffee_id: coffee.coffee.id,
    }
}

fn new_tasting(coffee_id: Uuid, flavors: &[&str]) -> NewTastingSession {
    NewTastingSession {
        coffee_id,
        brew_method: BrewMethod::V60,
        grind_size: None,
        coffee_dose: None,
        water_amount: None,
        water_temperature: Some(94),
        brew_time: None,
        grinder: None,
        brewing_device: None,
        filter_type: None,
        session_notes: Some("long sweet finish".to_owned()),
        overall_rating: Some(8),
        would_buy_again: Some(true),
        notes: flavors
            .iter()
            .map(|f| NewTastingNote {
                flavor_tag: (*f).to_owned(),
                intensity: Some(7),
                notes: None,
                aroma: true,
                flavor: true,
                aftertaste: false,
            })
            .collect(),
    }
}

#[tokio::test]
async fn should_create_tasting_with_notes_and_tags() {
    let w = world().await;
    let created = CreateTastingUseCase {
        tastings: w.tastings.clone(),
        coffees: w.coffees.clone(),
    }
    .execute(ALICE, new_tasting(w.coffee_id, &["Jasmine", "Peach"]))
    .await
    .unwrap();

    assert_eq!(created.session.user_id, ALICE);
    assert_eq!(created.session.created_by.as_deref(), Some(ALICE));
    assert_eq!(created.notes.len(), 2);
    assert_eq!(created.notes[0].flavor_tag.name, "Jasmine");
}

#[tokio::test]
async fn should_persist_nothing_when_coffee_is_missing() {
    let w = world().await;
    let result = CreateTastingUseCase {
        tastings: w.tastings.clone(),
        coffees: w.coffees.clone(),
    }
    .execute(ALICE, new_tasting(Uuid::new_v4(), &["Jasmine"]))
    .await;

    assert!(matches!(result, Err(CatalogError::CoffeeNotFound)));
    assert!(w.tastings.tastings.lock().unwrap().is_empty());
    assert!(w.tastings.flavor_tags.tags.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_out_of_range_rating_and_intensity() {
    let w = world().await;
    let create = CreateTastingUseCase {
        tastings: w.tastings.clone(),
        coffees: w.coffees.clone(),
    };

    let mut bad_rating = new_tasting(w.coffee_id, &[]);
    bad_rating.overall_rating = Some(11);
    assert!(matches!(
        create.execute(ALICE, bad_rating).await,
        Err(CatalogError::Validation(_))
    ));

    let mut bad_intensity = new_tasting(w.coffee_id, &["Jasmine"]);
    bad_intensity.notes[0].intensity = Some(0);
    assert!(matches!(
        create.execute(ALICE, bad_intensity).await,
        Err(CatalogError::Validation(_))
    ));

    assert!(w.tastings.tastings.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_hide_other_users_sessions() {
    let w = world().await;
    let create = CreateTastingUseCase {
        tastings: w.tastings.clone(),
        coffees: w.coffees.clone(),
    };
    let alices = create.execute(ALICE, new_tasting(w.coffee_id, &[])).await.unwrap();
    create.execute(BOB, new_tasting(w.coffee_id, &[])).await.unwrap();

    let get = GetTastingUseCase {
        tastings: w.tastings.clone(),
    };
    assert!(get.execute(alices.session.id, ALICE).await.is_ok());
    assert!(matches!(
        get.execute(alices.session.id, BOB).await,
        Err(CatalogError::Forbidden)
    ));

    let (mine, total) = ListTastingsUseCase {
        tastings: w.tastings.clone(),
    }
    .execute(ALICE, PageQuery::default())
    .await
    .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(total, 1);
}

#[tokio::test]
async fn should_apply_patch_semantics_on_update() {
    let w = world().await;
    let created = CreateTastingUseCase {
        tastings: w.tastings.clone(),
        coffees: w.coffees.clone(),
    }
    .execute(ALICE, new_tasting(w.coffee_id, &[]))
    .await
    .unwrap();

    let updated = UpdateTastingUseCase {
        tastings: w.tastings.clone(),
    }
    .execute(
        created.session.id,
        ALICE,
        TastingSessionPatch {
            brew_method: Some(BrewMethod::Aeropress),
            session_notes: Patch::Clear,
            overall_rating: Patch::Set(9),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.brew_method, BrewMethod::Aeropress);
    assert_eq!(updated.session_notes, None);
    assert_eq!(updated.overall_rating, Some(9));
    // Untouched field survives.
    assert_eq!(updated.water_temperature, Some(94));
    assert_eq!(updated.updated_by.as_deref(), Some(ALICE));
}

#[tokio::test]
async fn should_forbid_update_and_delete_by_non_owner() {
    let w = world().await;
    let created = CreateTastingUseCase {
        tastings: w.tastings.clone(),
        coffees: w.coffees.clone(),
    }
    .execute(ALICE, new_tasting(w.coffee_id, &[]))
    .await
    .unwrap();

    let update = UpdateTastingUseCase {
        tastings: w.tastings.clone(),
    };
    assert!(matches!(
        update
            .execute(created.session.id, BOB, TastingSessionPatch::default())
            .await,
        Err(CatalogError::Forbidden)
    ));

    let delete = DeleteTastingUseCase {
        tastings: w.tastings.clone(),
    };
    assert!(matches!(
        delete.execute(created.session.id, BOB).await,
        Err(CatalogError::Forbidden)
    ));
    assert_eq!(w.tastings.tastings.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_own_session() {
    let w = world().await;
    let created = CreateTastingUseCase {
        tastings: w.tastings.clone(),
        coffees: w.coffees.clone(),
    }
    .execute(ALICE, new_tasting(w.coffee_id, &[]))
    .await
    .unwrap();

    DeleteTastingUseCase {
        tastings: w.tastings.clone(),
    }
    .execute(created.session.id, ALICE)
    .await
    .unwrap();

    assert!(w.tastings.tastings.lock().unwrap().is_empty());
    assert!(matches!(
        GetTastingUseCase {
            tastings: w.tastings.clone(),
        }
        .execute(created.session.id, ALICE)
        .await,
        Err(CatalogError::TastingNotFound)
    ));
}
