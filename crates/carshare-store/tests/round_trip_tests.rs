// Property tests: whatever is added comes back unchanged, exactly once.

mod common;

use carshare_core::CarshareError;
use common::setup_repo;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn distinct_names() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[A-Za-z][A-Za-z0-9 '-]{0,30}", 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn added_companies_listed_once(names in distinct_names()) {
        let (_tmp, repo) = setup_repo();

        let mut ids = BTreeSet::new();
        for name in &names {
            let company = repo.add_company(name).unwrap();
            prop_assert!(ids.insert(company.id));
            prop_assert_eq!(repo.get_company_by_id(company.id).unwrap(), Some(company));
        }

        let listed: Vec<String> = repo.get_all_companies().unwrap().into_iter().map(|c| c.name).collect();
        prop_assert_eq!(listed.len(), names.len());
        for name in &names {
            prop_assert_eq!(listed.iter().filter(|n| *n == name).count(), 1);
        }
    }

    #[test]
    fn duplicate_add_leaves_set_unchanged(names in distinct_names()) {
        let (_tmp, repo) = setup_repo();
        for name in &names {
            repo.add_customer(name).unwrap();
        }
        let before = repo.get_all_customers().unwrap();

        for name in &names {
            let is_duplicate = matches!(
                repo.add_customer(name),
                Err(CarshareError::DuplicateName { .. })
            );
            prop_assert!(is_duplicate);
        }

        prop_assert_eq!(repo.get_all_customers().unwrap(), before);
    }

    #[test]
    fn cars_round_trip_under_owner(names in distinct_names()) {
        let (_tmp, repo) = setup_repo();
        let company = repo.add_company("Fleet").unwrap();

        let added: Vec<_> = names.iter().map(|n| repo.add_car(n, company.id).unwrap()).collect();

        prop_assert_eq!(repo.get_company_cars(company.id).unwrap(), added.clone());
        for car in added {
            prop_assert_eq!(repo.get_car_by_id(car.id).unwrap(), Some(car));
        }
    }
}
