use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time;

use todo_notifications::{
    DismissReason, NotificationCenter, NotificationEvent, NotificationOptions,
    NotificationsConfig, Priority, Severity, display_order,
};

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn new_center() -> NotificationCenter {
    init_tracing();
    NotificationCenter::new(NotificationsConfig::default())
}

/// Let spawned timer tasks run after a paused-clock advance.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn advance(ms: u64) {
    // Poll freshly spawned timer tasks so they register their sleeps with
    // the paused clock before it jumps; otherwise the sleep would arm
    // relative to the already-advanced time and never elapse on schedule.
    settle().await;
    time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

fn dismiss_counter() -> (NotificationOptions, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let options = NotificationOptions {
        on_dismiss: Some(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
        ..Default::default()
    };
    (options, calls)
}

#[tokio::test(start_paused = true)]
async fn success_auto_dismisses_through_removing_phase() {
    let center = new_center();
    let id = center.success("todo saved").await;
    assert!(center.has_active_notifications().await);

    advance(2999).await;
    assert!(center.removing().await.is_empty());
    assert_eq!(center.notifications().await.len(), 1);

    // t = 3000: removing, but still rendered.
    advance(1).await;
    assert!(center.removing().await.contains(&id));
    assert_eq!(center.notifications().await.len(), 1);

    // t = 3300: gone from both structures.
    advance(300).await;
    assert!(center.notifications().await.is_empty());
    assert!(center.removing().await.is_empty());
    assert!(!center.has_active_notifications().await);
}

#[tokio::test(start_paused = true)]
async fn non_persistent_error_expires_at_its_default_duration() {
    let center = new_center();
    let id = center
        .show_notification(
            "save failed",
            Severity::Error,
            NotificationOptions {
                persistent: Some(false),
                ..Default::default()
            },
        )
        .await;

    advance(7999).await;
    assert!(center.removing().await.is_empty());

    advance(1).await;
    assert!(center.removing().await.contains(&id));
}

#[tokio::test(start_paused = true)]
async fn info_expires_at_five_seconds() {
    let center = new_center();
    let id = center.info("syncing in background").await;

    advance(4999).await;
    assert!(center.removing().await.is_empty());

    advance(1).await;
    assert!(center.removing().await.contains(&id));
}

#[tokio::test(start_paused = true)]
async fn default_error_is_persistent() {
    let center = new_center();
    center.error("save failed").await;

    advance(20_000).await;
    assert_eq!(center.notifications().await.len(), 1);
    assert!(center.removing().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn persistent_non_auto_dismiss_notification_never_leaves() {
    let center = new_center();
    center
        .show_notification(
            "offline",
            Severity::Warning,
            NotificationOptions {
                persistent: Some(true),
                auto_dismiss: Some(false),
                ..Default::default()
            },
        )
        .await;

    advance(10_000).await;
    assert_eq!(center.notifications().await.len(), 1);
    assert!(center.removing().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn animated_dismissal_is_two_phase() {
    let center = new_center();
    let (options, calls) = dismiss_counter();
    let id = center
        .show_notification("save failed", Severity::Error, options)
        .await;

    center.dismiss_notification_with_animation(&id).await;
    assert!(center.removing().await.contains(&id));
    assert_eq!(center.notifications().await.len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    advance(299).await;
    assert_eq!(center.notifications().await.len(), 1);

    advance(1).await;
    assert!(center.notifications().await.is_empty());
    assert!(center.removing().await.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn double_dismissal_never_runs_the_hook_twice() {
    let center = new_center();
    let (options, calls) = dismiss_counter();
    let id = center
        .show_notification("save failed", Severity::Error, options)
        .await;

    center.dismiss_notification_with_animation(&id).await;
    // Second animated request while removing: ignored.
    center.dismiss_notification_with_animation(&id).await;
    // Hard dismissal mid-animation wins immediately.
    center.dismiss_notification(&id).await;
    assert!(center.notifications().await.is_empty());
    assert!(center.removing().await.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // The stale purge timer finds nothing to remove.
    advance(1000).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn dismissing_an_unknown_id_is_a_no_op() {
    let center = new_center();
    let id = center.success("todo saved").await;
    center.dismiss_notification(&id).await;

    // Same id again, plus a stale animated request.
    center.dismiss_notification(&id).await;
    center.dismiss_notification_with_animation(&id).await;
    assert!(center.notifications().await.is_empty());
    assert!(center.removing().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn explicit_dismissal_cancels_the_auto_dismiss_timer() {
    let center = new_center();
    let (options, calls) = dismiss_counter();
    let id = center
        .show_notification("todo saved", Severity::Success, options)
        .await;

    center.dismiss_notification(&id).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Past the original 3000 ms deadline: no resurrection, no second hook.
    advance(5000).await;
    assert!(center.notifications().await.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn capacity_evicts_lowest_priority_oldest_first() {
    init_tracing();
    let center = NotificationCenter::new(NotificationsConfig {
        max_notifications: 2,
        ..Default::default()
    });

    let (success_options, success_calls) = dismiss_counter();
    let success_id = center
        .show_notification("todo saved", Severity::Success, success_options)
        .await;
    advance(1).await;
    let error_id = center.error("save failed").await;
    advance(1).await;
    let warning_id = center.warning("sync degraded").await;

    let live = center.notifications().await;
    assert_eq!(live.len(), 2);
    // Error outranks the newer warning; the success was evicted.
    assert_eq!(live[0].id, error_id);
    assert_eq!(live[1].id, warning_id);
    assert!(!live.iter().any(|n| n.id == success_id));
    assert_eq!(success_calls.load(Ordering::SeqCst), 1);
    assert!(center.removing().await.is_empty());

    // The evicted success timer (3000 ms) must not fire later.
    advance(4000).await;
    assert_eq!(center.notifications().await.len(), 2);
    assert_eq!(success_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn live_list_is_sorted_after_every_insertion() {
    let center = new_center();

    let priorities = [
        Some(Priority::Low),
        None,
        Some(Priority::High),
        Some(Priority::Medium),
        Some(Priority::High),
        Some(Priority::Low),
        None,
        Some(Priority::Medium),
    ];
    for (i, priority) in priorities.into_iter().enumerate() {
        center
            .show_notification(
                format!("message {i}"),
                Severity::Info,
                NotificationOptions {
                    priority,
                    auto_dismiss: Some(false),
                    ..Default::default()
                },
            )
            .await;
        advance(1).await;

        let live = center.notifications().await;
        assert!(live.len() <= 5);
        for pair in live.windows(2) {
            assert_ne!(
                display_order(&pair[0], &pair[1]),
                std::cmp::Ordering::Greater,
                "live list out of display order after insertion {i}"
            );
        }
    }
}

#[tokio::test(start_paused = true)]
async fn clear_runs_each_hook_once_and_defuses_timers() {
    let center = new_center();

    let mut counters = Vec::new();
    for message in ["one", "two", "three"] {
        let (options, calls) = dismiss_counter();
        center
            .show_notification(message, Severity::Info, options)
            .await;
        counters.push(calls);
        advance(1).await;
    }
    assert_eq!(center.notifications().await.len(), 3);

    center.clear_notifications().await;
    assert!(center.notifications().await.is_empty());
    assert!(center.removing().await.is_empty());
    assert!(!center.has_active_notifications().await);
    for calls in &counters {
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    // All three auto-dismiss deadlines pass: no count regression, no
    // second hook run.
    advance(10_000).await;
    assert!(center.notifications().await.is_empty());
    for calls in &counters {
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

#[tokio::test(start_paused = true)]
async fn clearing_an_empty_center_is_a_no_op() {
    let center = new_center();
    center.clear_notifications().await;
    assert!(!center.has_active_notifications().await);
}

#[tokio::test(start_paused = true)]
async fn ids_stay_unique_across_a_thousand_posts() {
    init_tracing();
    // Capacity 0 disables the bound, so every record stays live.
    let center = NotificationCenter::new(NotificationsConfig {
        max_notifications: 0,
        ..Default::default()
    });

    let mut ids = HashSet::new();
    for i in 0..1000 {
        let id = center
            .show_notification(
                format!("message {i}"),
                Severity::Info,
                NotificationOptions {
                    auto_dismiss: Some(false),
                    ..Default::default()
                },
            )
            .await;
        ids.insert(id);
    }
    assert_eq!(ids.len(), 1000);
    assert_eq!(center.notifications().await.len(), 1000);
}

#[tokio::test(start_paused = true)]
async fn events_follow_the_lifecycle_order() {
    let center = new_center();
    let mut events = center.subscribe();

    let id = center.success("todo saved").await;
    advance(3000).await; // removing
    advance(300).await; // purged

    assert_eq!(
        events.try_recv().unwrap(),
        NotificationEvent::Posted(id.clone())
    );
    assert_eq!(
        events.try_recv().unwrap(),
        NotificationEvent::Removing(id.clone())
    );
    assert_eq!(
        events.try_recv().unwrap(),
        NotificationEvent::Closed(id, DismissReason::Expired)
    );
    assert!(events.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn eviction_publishes_a_closed_event() {
    init_tracing();
    let center = NotificationCenter::new(NotificationsConfig {
        max_notifications: 1,
        ..Default::default()
    });
    let mut events = center.subscribe();

    let first = center.info("first").await;
    advance(1).await;
    let second = center.info("second").await;

    assert_eq!(
        events.try_recv().unwrap(),
        NotificationEvent::Posted(first.clone())
    );
    assert_eq!(
        events.try_recv().unwrap(),
        NotificationEvent::Closed(first, DismissReason::Evicted)
    );
    assert_eq!(
        events.try_recv().unwrap(),
        NotificationEvent::Posted(second)
    );
}

#[tokio::test(start_paused = true)]
async fn updated_config_applies_to_later_operations() {
    let center = new_center();
    center
        .update_config(NotificationsConfig {
            animation_window_ms: 100,
            duration_info_ms: 1000,
            ..Default::default()
        })
        .await;

    let id = center.info("short lived").await;

    advance(1000).await;
    assert!(center.removing().await.contains(&id));

    advance(100).await;
    assert!(center.notifications().await.is_empty());
    assert!(center.removing().await.is_empty());
}
