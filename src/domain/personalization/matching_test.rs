#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::catalog::{navigation_ids, HOME_ITEM_ID};
    use crate::domain::personalization::matching::{priority, ranked_items, should_show};
    use crate::domain::profile::{AttributeProfile, JobArea, Role, Task};

    fn data_engineer_preparing_fhir() -> AttributeProfile {
        AttributeProfile::new(Role::DataEngineer, [JobArea::PrepareDataset], [Task::Fhir]).unwrap()
    }

    #[test]
    fn without_profile_every_catalogued_item_is_shown() {
        for id in navigation_ids() {
            assert!(should_show(id, None), "{} should be shown", id);
        }
    }

    #[test]
    fn without_profile_priority_is_zero() {
        for id in navigation_ids() {
            assert_eq!(priority(id, None), 0);
        }
    }

    #[test]
    fn unknown_item_is_hidden_with_zero_priority() {
        let profile = data_engineer_preparing_fhir();
        assert!(!should_show("billing", Some(&profile)));
        assert!(!should_show("billing", None));
        assert_eq!(priority("billing", Some(&profile)), 0);
        assert_eq!(priority("billing", None), 0);
    }

    #[test]
    fn home_is_shown_for_every_role_with_zero_priority() {
        assert!(should_show(HOME_ITEM_ID, None));
        for role in Role::all() {
            let profile =
                AttributeProfile::new(*role, [JobArea::GovernAccess], [Task::AuditLogs]).unwrap();
            assert!(should_show(HOME_ITEM_ID, Some(&profile)));
            assert_eq!(priority(HOME_ITEM_ID, Some(&profile)), 0);
        }
    }

    #[test]
    fn data_sources_matches_role_job_and_task() {
        let profile = data_engineer_preparing_fhir();
        assert!(should_show("data-sources", Some(&profile)));
        assert_eq!(priority("data-sources", Some(&profile)), 10 + 5 + 3);
    }

    #[test]
    fn kafka_queues_role_scores_but_item_stays_hidden() {
        let profile = data_engineer_preparing_fhir();
        assert!(!should_show("kafka-queues", Some(&profile)));
        assert_eq!(priority("kafka-queues", Some(&profile)), 10);
    }

    #[test]
    fn role_mismatch_hides_item_even_when_job_and_task_match() {
        let profile =
            AttributeProfile::new(Role::Analyst, [JobArea::OnboardPractice], [Task::Fhir]).unwrap();
        assert!(!should_show("fhir-endpoints", Some(&profile)));
        assert_eq!(priority("fhir-endpoints", Some(&profile)), 5 + 3);
    }

    #[test]
    fn task_alone_satisfies_the_job_or_task_alternative() {
        let profile =
            AttributeProfile::new(Role::DevOps, [JobArea::GovernAccess], [Task::Streaming])
                .unwrap();
        assert!(should_show("kafka-queues", Some(&profile)));
    }

    #[test]
    fn unconstrained_role_lets_any_role_through() {
        let profile =
            AttributeProfile::new(Role::Analyst, [JobArea::GovernAccess], [Task::Reporting])
                .unwrap();
        assert!(should_show("api-keys", Some(&profile)));
        // no role listed, so no role points
        assert_eq!(priority("api-keys", Some(&profile)), 5);
    }

    #[test]
    fn fully_unconstrained_item_is_shown_with_zero_priority() {
        let profile = data_engineer_preparing_fhir();
        assert!(should_show("settings", Some(&profile)));
        assert_eq!(priority("settings", Some(&profile)), 0);
    }

    #[test]
    fn every_shared_job_and_task_adds_weight() {
        let profile = AttributeProfile::new(
            Role::DataEngineer,
            [JobArea::OnboardPractice, JobArea::PrepareDataset],
            [Task::Fhir, Task::Raw],
        )
        .unwrap();
        assert_eq!(priority("data-sources", Some(&profile)), 10 + 2 * 5 + 2 * 3);
    }

    #[test]
    fn ranked_items_drops_hidden_and_orders_by_priority() {
        let profile = data_engineer_preparing_fhir();
        let ranked = ranked_items(
            ["kafka-queues", "settings", "feature-store", "data-sources", "billing"],
            Some(&profile),
        );
        // data-sources 18, feature-store 15, settings 0; kafka-queues hidden
        assert_eq!(ranked, vec!["data-sources", "feature-store", "settings"]);
    }

    #[test]
    fn ranked_items_keeps_input_order_on_ties() {
        let ranked = ranked_items(["settings", "overview", "datasets"], None);
        assert_eq!(ranked, vec!["settings", "overview", "datasets"]);
    }

    fn job_strategy() -> impl Strategy<Value = JobArea> {
        proptest::sample::select(JobArea::all().to_vec())
    }

    fn task_strategy() -> impl Strategy<Value = Task> {
        proptest::sample::select(Task::all().to_vec())
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        proptest::sample::select(Role::all().to_vec())
    }

    fn id_strategy() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(navigation_ids().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn adding_a_job_never_lowers_priority(
            role in role_strategy(),
            jobs in proptest::collection::vec(job_strategy(), 1..4),
            tasks in proptest::collection::vec(task_strategy(), 1..4),
            extra in job_strategy(),
            id in id_strategy(),
        ) {
            let base = AttributeProfile::new(role, jobs.clone(), tasks.clone()).unwrap();
            let mut wider = jobs;
            wider.push(extra);
            let extended = AttributeProfile::new(role, wider, tasks).unwrap();

            prop_assert!(priority(id, Some(&extended)) >= priority(id, Some(&base)));
        }

        #[test]
        fn adding_a_task_never_lowers_priority(
            role in role_strategy(),
            jobs in proptest::collection::vec(job_strategy(), 1..4),
            tasks in proptest::collection::vec(task_strategy(), 1..4),
            extra in task_strategy(),
            id in id_strategy(),
        ) {
            let base = AttributeProfile::new(role, jobs.clone(), tasks.clone()).unwrap();
            let mut wider = tasks;
            wider.push(extra);
            let extended = AttributeProfile::new(role, jobs, wider).unwrap();

            prop_assert!(priority(id, Some(&extended)) >= priority(id, Some(&base)));
        }

        #[test]
        fn unknown_ids_are_hidden_for_any_profile(
            role in role_strategy(),
            jobs in proptest::collection::vec(job_strategy(), 1..4),
            tasks in proptest::collection::vec(task_strategy(), 1..4),
            suffix in "[a-z]{1,8}",
        ) {
            let profile = AttributeProfile::new(role, jobs, tasks).unwrap();
            let id = format!("unlisted-{}", suffix);
            prop_assert!(!should_show(&id, Some(&profile)));
            prop_assert_eq!(priority(&id, Some(&profile)), 0);
        }
    }
}
