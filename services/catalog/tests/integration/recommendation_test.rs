use uuid::Uuid;

use brewlog_catalog::domain::types::{NewTastingNote, NewTastingSession};
use brewlog_catalog::usecase::recommendation::{
    AnalyzePreferencesUseCase, GetTasteProfileUseCase,
};
use brewlog_catalog::usecase::tasting::CreateTastingUseCase;
use brewlog_catalog_schema::enums::BrewMethod;

use crate::helpers::{ALICE, MockAnalyzer, MockCoffeeRepo, MockTastingRepo};

fn tasting(
    coffee_id: Uuid,
    method: BrewMethod,
    rating: i32,
    flavors: &[&str],
) -> NewTastingSession {
    NewTastingSession {
        coffee_id,
        brew_method: method,
        grind_size: None,
        coffee_dose: None,
        water_amount: None,
        water_temperature: None,
        brew_time: None,
        grinder: None,
        brewing_device: None,
        filter_type: None,
        session_notes: None,
        overall_rating: Some(rating),
        would_buy_again: None,
        notes: flavors
            .iter()
            .map(|f| NewTastingNote {
                flavor_tag: (*f).to_owned(),
                intensity: Some(6),
                notes: None,
                aroma: false,
                flavor: true,
                aftertaste: false,
            })
            .collect(),
    }
}

/// Seed one live coffee and return its id.
async fn seed_coffee(coffees: &MockCoffeeRepo) -> Uuid {
    use crate::helpers::new_coffee;
    use brewlog_catalog::domain::repository::CoffeeRepository;
    let created = coffees
        .create_with_flavor_tags(&new_coffee("Nano Challa", Uuid::new_v4(), &[]), ALICE)
        .await
        .unwrap();
    created.coffee.id
}

async fn seeded_history() -> MockTastingRepo {
    let coffees = MockCoffeeRepo::empty();
    let tastings = MockTastingRepo::empty();
    let create = CreateTastingUseCase {
        tastings: tastings.clone(),
        coffees: coffees.clone(),
    };
    let coffee = seed_coffee(&coffees).await;
    create
        .execute(ALICE, tasting(coffee, BrewMethod::V60, 8, &["Jasmine", "Peach"]))
        .await
        .unwrap();
    create
        .execute(ALICE, tasting(coffee, BrewMethod::V60, 6, &["Jasmine"]))
        .await
        .unwrap();
    create
        .execute(ALICE, tasting(coffee, BrewMethod::Espresso, 10, &["Chocolate"]))
        .await
        .unwrap();
    tastings
}

#[tokio::test]
async fn should_aggregate_profile_from_history() {
    let tastings = seeded_history().await;
    let profile = GetTasteProfileUseCase { tastings }
        .execute(ALICE)
        .await
        .unwrap();

    assert_eq!(profile.total_tastings, 3);
    assert_eq!(profile.average_rating, Some(8.0));
    assert_eq!(profile.most_common_flavors[0], ("Jasmine".to_owned(), 2));
    assert_eq!(profile.preferred_brew_methods[0], ("v60".to_owned(), 2));
}

#[tokio::test]
async fn should_return_canned_message_without_history() {
    let usecase = AnalyzePreferencesUseCase {
        tastings: MockTastingRepo::empty(),
        analyzer: MockAnalyzer::replying("unused"),
    };
    let analysis = usecase.execute(ALICE).await.unwrap();

    assert_eq!(analysis.total_tastings, 0);
    assert!(analysis.flavor_analysis.starts_with("No tasting data available"));
    assert!(usecase.analyzer.prompt_seen.lock().unwrap().is_none());
}

#[tokio::test]
async fn should_summarize_history_into_analyzer_prompt() {
    let usecase = AnalyzePreferencesUseCase {
        tastings: seeded_history().await,
        analyzer: MockAnalyzer::replying("Seek out floral washed Ethiopians."),
    };
    let analysis = usecase.execute(ALICE).await.unwrap();

    assert_eq!(analysis.total_tastings, 3);
    assert_eq!(analysis.flavor_analysis, "Seek out floral washed Ethiopians.");

    let prompt = usecase.analyzer.prompt_seen.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("Total tastings: 3"));
    assert!(prompt.contains("Jasmine"));
    assert!(prompt.contains("v60"));
}
