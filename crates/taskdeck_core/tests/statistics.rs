use std::collections::BTreeMap;

use taskdeck_core::{
    CategoryRepository, MemoryStore, Priority, TaskRepository, TaskService, TaskStatistics,
};

fn service_over(
    store: &MemoryStore,
) -> TaskService<TaskRepository<&MemoryStore>, CategoryRepository<&MemoryStore>> {
    TaskService::new(
        TaskRepository::new(store),
        CategoryRepository::try_new(store).unwrap(),
    )
}

#[test]
fn empty_task_set_yields_all_zero_statistics() {
    let store = MemoryStore::new();
    let service = service_over(&store);

    let stats = service.get_statistics().unwrap();
    assert_eq!(
        stats,
        TaskStatistics {
            total: 0,
            completed: 0,
            pending: 0,
            by_category: BTreeMap::new(),
        }
    );
}

#[test]
fn statistics_track_totals_completion_and_category_counts() {
    let store = MemoryStore::new();
    let service = service_over(&store);

    let t1 = service.create_task("Report", "Work", None, None).unwrap();
    service
        .create_task("Call mom", "Personal", None, Some(Priority::High))
        .unwrap();

    let stats = service.get_statistics().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.pending, 2);
    assert_eq!(
        stats.by_category,
        BTreeMap::from([("Work".to_string(), 1), ("Personal".to_string(), 1)])
    );

    service.toggle_task_completion(t1.id()).unwrap();

    let after_toggle = service.get_statistics().unwrap();
    assert_eq!(after_toggle.total, 2);
    assert_eq!(after_toggle.completed, 1);
    assert_eq!(after_toggle.pending, 1);
    assert_eq!(after_toggle.by_category, stats.by_category);
}

#[test]
fn categories_without_tasks_are_absent_from_the_mapping() {
    let store = MemoryStore::new();
    let service = service_over(&store);

    service.create_task("Report", "Work", None, None).unwrap();

    let stats = service.get_statistics().unwrap();
    // Personal/Shopping/Health exist as categories but hold no tasks.
    assert_eq!(stats.by_category.len(), 1);
    assert!(stats.by_category.contains_key("Work"));
}

#[test]
fn orphaned_category_names_still_count() {
    let store = MemoryStore::new();
    let service = service_over(&store);

    service.create_task("Report", "Work", None, None).unwrap();
    let work = service
        .get_all_categories()
        .unwrap()
        .into_iter()
        .find(|category| category.name == "Work")
        .unwrap();
    service.delete_category(work.id()).unwrap();

    let stats = service.get_statistics().unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.by_category.get("Work"), Some(&1));
}
