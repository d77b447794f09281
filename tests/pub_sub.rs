mod common;

use std::{sync::Arc, thread};

use common::{shared, Fault, Faulty, Recorder};
use newsstand::{
    Magazine, Reader, RegisterOutcome, StatusCode, Subscriber, UnregisterOutcome,
    ValidationError,
};
use rstest::rstest;

/// Тест проверяет базовый сценарий: два читателя получают первый выпуск,
/// после отписки Alice второй выпуск получает только John.
#[test]
fn test_tech_weekly_scenario() {
    let magazine = Magazine::new("Tech Weekly").unwrap();
    let john = Recorder::new("John");
    let alice = Recorder::new("Alice");

    magazine.register(shared(&john));
    magazine.register(shared(&alice));
    let first = magazine.publish("Issue 1").unwrap();
    assert_eq!(first.delivered, vec!["John", "Alice"]);

    assert_eq!(
        magazine.unregister(&*alice),
        UnregisterOutcome::Unsubscribed
    );
    let second = magazine.publish("Issue 2").unwrap();
    assert_eq!(second.delivered, vec!["John"]);

    assert_eq!(john.issues(), vec!["Issue 1", "Issue 2"]);
    assert_eq!(alice.issues(), vec!["Issue 1"]);
    assert_eq!(
        john.received()[0],
        ("Tech Weekly".to_string(), "Issue 1".to_string())
    );
    assert_eq!(magazine.count(), 1);
}

/// Тест проверяет, что всегда падающий подписчик в любой позиции не мешает
/// остальным получить тот же выпуск.
#[rstest]
#[case(0, Fault::Error)]
#[case(1, Fault::Error)]
#[case(2, Fault::Error)]
#[case(0, Fault::Panic)]
#[case(1, Fault::Panic)]
#[case(2, Fault::Panic)]
fn test_faulty_subscriber_isolated(
    #[case] position: usize,
    #[case] fault: Fault,
) {
    let magazine = Magazine::new("Cooking Today").unwrap();
    let healthy = [Recorder::new("John"), Recorder::new("Alice")];
    let faulty = Faulty::new(fault);

    let mut healthy_iter = healthy.iter();
    for slot in 0..3 {
        let outcome = if slot == position {
            magazine.register(shared(&faulty))
        } else {
            let recorder = healthy_iter.next().unwrap();
            magazine.register(shared(recorder))
        };
        assert_eq!(outcome, RegisterOutcome::Subscribed);
    }

    let report = magazine.publish("Quick Dinner Recipes").unwrap();
    assert_eq!(report.delivered, vec!["John", "Alice"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].subscriber, "Faulty");
    let expected_status = match fault {
        Fault::Error => StatusCode::DeliveryFailed,
        Fault::Panic => StatusCode::SubscriberPanicked,
    };
    assert_eq!(report.failed[0].status, expected_status);
    assert!(!report.is_complete());

    for recorder in &healthy {
        assert_eq!(recorder.issues(), vec!["Quick Dinner Recipes"]);
    }
    assert_eq!(magazine.stats().failed_deliveries, 1);
    assert_eq!(magazine.count(), 3);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_issue_rejected(#[case] title: &str) {
    let magazine = Magazine::new("Sports Monthly").unwrap();
    let john = Recorder::new("John");
    magazine.register(shared(&john));

    assert_eq!(
        magazine.publish(title).unwrap_err(),
        ValidationError::EmptyIssueTitle
    );
    assert!(john.issues().is_empty());
    assert_eq!(magazine.names(), vec!["John"]);
    assert_eq!(magazine.stats().published, 0);
}

/// Тест проверяет, что один подписчик получает выпуски нескольких изданий и
/// видит, от какого издания пришло уведомление.
#[test]
fn test_subscriber_shared_across_magazines() {
    let tech = Magazine::new("Tech Weekly").unwrap();
    let cooking = Magazine::new("Cooking Today").unwrap();
    let library = Recorder::new("City Library");

    tech.register(shared(&library));
    cooking.register(shared(&library));
    tech.publish("Best AI Tools 2024").unwrap();
    cooking.publish("Healthy Smoothies").unwrap();

    assert_eq!(
        library.received(),
        vec![
            ("Tech Weekly".to_string(), "Best AI Tools 2024".to_string()),
            ("Cooking Today".to_string(), "Healthy Smoothies".to_string()),
        ]
    );
}

#[test]
fn test_builtin_subscribers_receive_issue() {
    let magazine = Magazine::new("Tech Weekly").unwrap();
    let john = Arc::new(Reader::new("John").unwrap());
    let twin = Arc::new(Reader::new("John").unwrap());

    assert_eq!(magazine.register(john.clone()), RegisterOutcome::Subscribed);
    assert_eq!(magazine.register(twin.clone()), RegisterOutcome::Subscribed);
    assert_eq!(
        magazine.register(john.clone()),
        RegisterOutcome::AlreadySubscribed
    );
    assert_ne!(john.id(), twin.id());

    let report = magazine.publish("  Issue 1  ").unwrap();
    assert_eq!(report.issue, "Issue 1");
    assert_eq!(report.delivered, vec!["John", "John"]);
    assert!(report.is_complete());
}

/// Тест проверяет, что издание можно разделять между потоками: параллельные
/// регистрации и публикации не теряют подписчиков.
#[test]
fn test_concurrent_register_and_publish() {
    let magazine = Arc::new(Magazine::new("Tech Weekly").unwrap());
    let recorders: Vec<_> = (0..8).map(|i| Recorder::new(&format!("Reader {i}"))).collect();

    let handles: Vec<_> = recorders
        .iter()
        .map(|recorder| {
            let magazine = Arc::clone(&magazine);
            let subscriber = shared(recorder);
            thread::spawn(move || {
                magazine.register(subscriber);
                magazine.publish("Concurrent Issue").unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(magazine.count(), 8);
    assert_eq!(magazine.stats().published, 8);
    for recorder in &recorders {
        assert!(!recorder.issues().is_empty());
    }
}
