#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::catalog::{IconRef, NavigationItem, BUCKETS};
    use crate::domain::personalization::buckets::{
        bucket_priority, dedupe_items, ranked_buckets, visible_buckets, visible_items,
    };
    use crate::domain::profile::{AttributeProfile, JobArea, Role, Task};

    fn ids(items: &[NavigationItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn without_profile_every_bucket_is_visible_in_catalog_order() {
        let buckets = visible_buckets(None);
        let bucket_ids: Vec<_> = buckets.iter().map(|b| b.id).collect();
        let catalog_ids: Vec<_> = BUCKETS.iter().map(|b| b.id).collect();
        assert_eq!(bucket_ids, catalog_ids);
    }

    #[test]
    fn without_profile_buckets_are_still_deduplicated() {
        let buckets = visible_buckets(None);
        let systems = buckets.iter().find(|b| b.id == "system-management").unwrap();
        assert_eq!(
            ids(&systems.items),
            vec!["monitoring", "kafka-queues", "pipelines", "api-keys"]
        );
    }

    #[test]
    fn only_buckets_for_selected_jobs_are_visible() {
        let profile = AttributeProfile::new(
            Role::DevOps,
            [JobArea::ProvisionInfra, JobArea::ManageSystems],
            [Task::Clusters],
        )
        .unwrap();

        let buckets = visible_buckets(Some(&profile));
        let bucket_ids: Vec<_> = buckets.iter().map(|b| b.id).collect();
        assert_eq!(bucket_ids, vec!["system-management", "infrastructure"]);
    }

    #[test]
    fn prepare_dataset_bucket_ignores_tasks() {
        let with_job =
            AttributeProfile::new(Role::Analyst, [JobArea::PrepareDataset], [Task::AuditLogs])
                .unwrap();
        let task_only =
            AttributeProfile::new(Role::Analyst, [JobArea::GovernAccess], [Task::Raw]).unwrap();

        let has_prep = |p: &AttributeProfile| {
            visible_buckets(Some(p))
                .iter()
                .any(|b| b.job_key == JobArea::PrepareDataset)
        };
        assert!(has_prep(&with_job));
        assert!(!has_prep(&task_only));
    }

    #[test]
    fn dedupe_keeps_first_position_and_last_value() {
        let items = [
            NavigationItem::new("x", "First X", IconRef::Home),
            NavigationItem::new("y", "Y", IconRef::Table),
            NavigationItem::new("x", "Last X", IconRef::Chart),
            NavigationItem::new("z", "Z", IconRef::Key),
        ];

        let deduped = dedupe_items(&items);

        assert_eq!(ids(&deduped), vec!["x", "y", "z"]);
        assert_eq!(deduped[0].label, "Last X");
        assert_eq!(deduped[0].icon, IconRef::Chart);
    }

    #[test]
    fn catalog_duplicate_renders_once_with_last_label() {
        let buckets = visible_buckets(None);
        let systems = buckets.iter().find(|b| b.id == "system-management").unwrap();

        let monitoring: Vec<_> = systems.items.iter().filter(|i| i.id == "monitoring").collect();
        assert_eq!(monitoring.len(), 1);
        assert_eq!(systems.items[0].id, "monitoring");
        assert_eq!(systems.items[0].label, "Service Health");
    }

    #[test]
    fn dedupe_of_empty_list_is_empty() {
        assert!(dedupe_items(&[]).is_empty());
    }

    #[test]
    fn bucket_priority_is_zero_without_profile() {
        for job in JobArea::all() {
            assert_eq!(bucket_priority(*job, None), 0);
        }
    }

    #[test]
    fn bucket_priority_adds_job_weight_and_raw_item_priorities() {
        let profile =
            AttributeProfile::new(Role::DevOps, [JobArea::ManageSystems], [Task::Monitoring])
                .unwrap();

        // Raw items: monitoring, kafka-queues, pipelines, monitoring, api-keys
        // monitoring:   role 10 + job 5 + task 3 = 18, counted twice
        // kafka-queues: role 10 + job 5 + task 3 = 18
        // pipelines:    job 5
        // api-keys:     job 5
        assert_eq!(
            bucket_priority(JobArea::ManageSystems, Some(&profile)),
            20 + 18 + 18 + 18 + 5 + 5
        );
    }

    #[test]
    fn unselected_bucket_still_scores_its_items() {
        let profile =
            AttributeProfile::new(Role::DevOps, [JobArea::ManageSystems], [Task::Monitoring])
                .unwrap();
        // clusters 10 + 5, deployments 10, kafka-queues 18
        assert_eq!(
            bucket_priority(JobArea::ProvisionInfra, Some(&profile)),
            15 + 10 + 18
        );
    }

    #[test]
    fn ranked_buckets_sorts_by_priority() {
        let profile = AttributeProfile::new(
            Role::Compliance,
            [JobArea::AnalyzeInsights, JobArea::GovernAccess],
            [Task::AuditLogs],
        )
        .unwrap();

        let ranked = ranked_buckets(Some(&profile));
        let order: Vec<_> = ranked.iter().map(|(b, _)| b.id).collect();
        assert_eq!(order, vec!["governance", "insights"]);
        assert!(ranked[0].1 >= ranked[1].1);
    }

    #[test]
    fn ranked_buckets_without_profile_keeps_catalog_order() {
        let ranked = ranked_buckets(None);
        let order: Vec<_> = ranked.iter().map(|(b, _)| b.id).collect();
        let catalog: Vec<_> = BUCKETS.iter().map(|b| b.id).collect();
        assert_eq!(order, catalog);
    }

    #[test]
    fn visible_items_applies_item_rule_inside_bucket() {
        let profile =
            AttributeProfile::new(Role::DataEngineer, [JobArea::PrepareDataset], [Task::Fhir])
                .unwrap();
        let buckets = visible_buckets(Some(&profile));
        let prep = &buckets[0];

        assert_eq!(
            ids(&visible_items(prep, Some(&profile))),
            vec!["data-sources", "pipelines", "datasets", "feature-store"]
        );
    }

    proptest! {
        #[test]
        fn deduped_ids_are_unique_and_in_first_seen_order(
            raw in proptest::collection::vec(0usize..5, 0..20)
        ) {
            const IDS: [&str; 5] = ["a", "b", "c", "d", "e"];
            let items: Vec<NavigationItem> = raw
                .iter()
                .map(|i| NavigationItem::new(IDS[*i], "item", IconRef::Home))
                .collect();

            let deduped = dedupe_items(&items);

            let mut expected: Vec<&str> = Vec::new();
            for item in &items {
                if !expected.contains(&item.id) {
                    expected.push(item.id);
                }
            }
            prop_assert_eq!(ids(&deduped), expected);
        }
    }
}
