use rust_decimal::Decimal;
use sea_orm::Database;
use uuid::Uuid;

use engine::{
    CategoryInput, CategoryPurpose, Engine, EngineBuilder, EngineError, EntityKind, PagingPolicy,
    Person, PersonDeletePolicy, PersonInput, TransactionInput, TransactionType,
};
use migration::MigratorTrait;

async fn engine_with(configure: impl FnOnce(EngineBuilder) -> EngineBuilder) -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    configure(Engine::builder().database(db))
        .build()
        .await
        .unwrap()
}

async fn engine() -> Engine {
    engine_with(|builder| builder).await
}

fn person_input(name: &str, age: i32) -> PersonInput {
    PersonInput {
        name: name.to_string(),
        age,
    }
}

async fn person_with_expense(engine: &Engine, name: &str) -> Person {
    let person = engine.create_person(person_input(name, 30)).await.unwrap();
    let category = engine
        .create_category(CategoryInput {
            description: "Food".to_string(),
            purpose: CategoryPurpose::Expense,
        })
        .await
        .unwrap();
    engine
        .create_transaction(TransactionInput {
            description: "Groceries".to_string(),
            amount: Decimal::new(20_00, 2),
            kind: TransactionType::Expense,
            person_id: person.id,
            category_id: category.id,
        })
        .await
        .unwrap();
    person
}

#[tokio::test]
async fn create_person_trims_name() {
    let engine = engine().await;
    let person = engine
        .create_person(person_input("  Maria  ", 42))
        .await
        .unwrap();
    assert_eq!(person.name, "Maria");
    assert_eq!(person.age, 42);
    assert_eq!(engine.person(person.id).await.unwrap(), person);
}

#[tokio::test]
async fn create_person_validates_name_and_age() {
    let engine = engine().await;
    let too_long = "x".repeat(151);
    let cases = [
        person_input("   ", 30),
        person_input(&too_long, 30),
        person_input("Maria", 0),
        person_input("Maria", 131),
    ];
    for input in cases {
        let err = engine.create_person(input).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)), "{err:?}");
    }
    assert!(engine.create_person(person_input("Ok", 1)).await.is_ok());
    assert!(engine.create_person(person_input("Old", 130)).await.is_ok());
}

#[tokio::test]
async fn duplicate_names_are_rejected_ignoring_case_and_accents() {
    let engine = engine().await;
    engine
        .create_person(person_input("José Silva", 30))
        .await
        .unwrap();

    let err = engine
        .create_person(person_input("jose  SILVA", 50))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("jose  SILVA".to_string()));
}

#[tokio::test]
async fn duplicate_names_are_accepted_when_uniqueness_is_off() {
    let engine = engine_with(|builder| builder.unique_person_names(false)).await;
    engine
        .create_person(person_input("Maria", 30))
        .await
        .unwrap();
    engine
        .create_person(person_input("Maria", 31))
        .await
        .unwrap();
    assert_eq!(engine.people(None, None).await.unwrap().total_records, 2);
}

#[tokio::test]
async fn update_person_keeps_uniqueness_against_others_only() {
    let engine = engine().await;
    let maria = engine
        .create_person(person_input("Maria", 30))
        .await
        .unwrap();
    engine
        .create_person(person_input("Pedro", 30))
        .await
        .unwrap();

    let updated = engine
        .update_person(maria.id, person_input("MARIA", 31))
        .await
        .unwrap();
    assert_eq!(updated.name, "MARIA");
    assert_eq!(updated.age, 31);

    let err = engine
        .update_person(maria.id, person_input("pedro", 31))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ExistingKey(_)));

    let err = engine
        .update_person(Uuid::new_v4(), person_input("Nobody", 20))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound(EntityKind::Person));
}

#[tokio::test]
async fn person_by_name_ignores_case() {
    let engine = engine().await;
    let ana = engine
        .create_person(person_input("Ana Lúcia", 25))
        .await
        .unwrap();

    assert_eq!(engine.person_by_name("ana lucia").await.unwrap(), ana);
    assert_eq!(
        engine.person_by_name("Bruno").await.unwrap_err(),
        EngineError::KeyNotFound(EntityKind::Person)
    );
}

#[tokio::test]
async fn restrict_policy_refuses_delete_of_referenced_person() {
    let engine = engine().await;
    let alice = person_with_expense(&engine, "Alice").await;

    let err = engine.delete_person(alice.id).await.unwrap_err();
    assert_eq!(err, EngineError::StillReferenced(EntityKind::Person, 1));
    assert_eq!(engine.person(alice.id).await.unwrap(), alice);
    assert_eq!(engine.transactions(None, None).await.unwrap().total_records, 1);
}

#[tokio::test]
async fn cascade_policy_removes_person_and_transactions() {
    let engine = engine_with(|builder| builder.person_delete(PersonDeletePolicy::Cascade)).await;
    let alice = person_with_expense(&engine, "Alice").await;

    engine.delete_person(alice.id).await.unwrap();
    assert_eq!(
        engine.person(alice.id).await.unwrap_err(),
        EngineError::KeyNotFound(EntityKind::Person)
    );
    assert_eq!(engine.transactions(None, None).await.unwrap().total_records, 0);
}

#[tokio::test]
async fn delete_unreferenced_or_missing_person() {
    let engine = engine().await;
    let bob = engine.create_person(person_input("Bob", 20)).await.unwrap();

    engine.delete_person(bob.id).await.unwrap();
    assert_eq!(
        engine.delete_person(bob.id).await.unwrap_err(),
        EngineError::KeyNotFound(EntityKind::Person)
    );
}

#[tokio::test]
async fn people_are_paged_by_name() {
    let engine = engine().await;
    for name in ["Eve", "Bob", "Dan", "Ann", "Cid"] {
        engine.create_person(person_input(name, 20)).await.unwrap();
    }

    let first = engine.people(Some(1), Some(2)).await.unwrap();
    let names: Vec<_> = first.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);
    assert_eq!(first.total_records, 5);
    assert_eq!(first.total_pages, 3);

    let last = engine.people(Some(3), Some(2)).await.unwrap();
    assert_eq!(last.data.len(), 1);
    assert_eq!(last.data[0].name, "Eve");

    assert!(engine.people(Some(9), Some(2)).await.unwrap().data.is_empty());

    let defaults = engine.people(None, None).await.unwrap();
    assert_eq!((defaults.current_page, defaults.page_size), (1, 10));
}

#[tokio::test]
async fn pages_far_past_the_end_are_empty() {
    let engine = engine().await;
    for name in ["Ann", "Bob"] {
        engine.create_person(person_input(name, 20)).await.unwrap();
    }

    for page in [i64::MAX as u64 / 10 + 2, i64::MAX as u64, u64::MAX] {
        let result = engine.people(Some(page), Some(10)).await.unwrap();
        assert!(result.data.is_empty(), "page {page}");
        assert_eq!(result.current_page, page);
        assert_eq!(result.total_records, 2);
        assert_eq!(result.total_pages, 1);
    }

    let categories = engine.categories(Some(u64::MAX), Some(100)).await.unwrap();
    assert!(categories.data.is_empty());
    let transactions = engine.transactions(Some(u64::MAX), Some(1)).await.unwrap();
    assert!(transactions.data.is_empty());
}

#[tokio::test]
async fn paging_limits_come_from_the_policy() {
    let engine = engine_with(|builder| {
        builder.paging(PagingPolicy {
            default_page_size: 3,
            max_page_size: 4,
        })
    })
    .await;

    assert_eq!(engine.people(None, None).await.unwrap().page_size, 3);
    assert!(matches!(
        engine.people(Some(1), Some(5)).await.unwrap_err(),
        EngineError::InvalidInput(_)
    ));
    assert!(matches!(
        engine.people(Some(0), None).await.unwrap_err(),
        EngineError::InvalidInput(_)
    ));
}

#[tokio::test]
async fn categories_can_be_created_updated_and_listed() {
    let engine = engine().await;
    let rent = engine
        .create_category(CategoryInput {
            description: " Rent ".to_string(),
            purpose: CategoryPurpose::Expense,
        })
        .await
        .unwrap();
    assert_eq!(rent.description, "Rent");

    let updated = engine
        .update_category(
            rent.id,
            CategoryInput {
                description: "Housing".to_string(),
                purpose: CategoryPurpose::Both,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.purpose, CategoryPurpose::Both);
    assert_eq!(engine.category(rent.id).await.unwrap(), updated);

    engine
        .create_category(CategoryInput {
            description: "Bonus".to_string(),
            purpose: CategoryPurpose::Income,
        })
        .await
        .unwrap();
    let page = engine.categories(None, None).await.unwrap();
    let descriptions: Vec<_> = page.data.iter().map(|c| c.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Bonus", "Housing"]);

    let err = engine
        .create_category(CategoryInput {
            description: String::new(),
            purpose: CategoryPurpose::Both,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    assert_eq!(
        engine.category(Uuid::new_v4()).await.unwrap_err(),
        EngineError::KeyNotFound(EntityKind::Category)
    );
}
