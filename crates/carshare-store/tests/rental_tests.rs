// Integration tests for renting, returning and availability.

mod common;

use carshare_core::{CarshareError, RentedCar};
use common::setup_repo;

fn names(cars: &[carshare_core::Car]) -> Vec<&str> {
    cars.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_sixt_rent_and_return_scenario() {
    // Given: Sixt with one car and one customer
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let model_x = repo.add_car("Model X", sixt.id).unwrap();
    let alice = repo.add_customer("Alice").unwrap();

    assert_eq!(
        names(&repo.get_available_company_cars(sixt.id).unwrap()),
        vec!["Model X"]
    );

    // When: Alice rents the car
    repo.rent_car_to_customer(model_x.id, alice.id).unwrap();

    // Then: it is no longer available and resolves as her rental
    assert!(repo.get_available_company_cars(sixt.id).unwrap().is_empty());
    assert_eq!(
        repo.get_customer_by_id(alice.id).unwrap().unwrap().rented_car_id,
        Some(model_x.id)
    );

    let rented = repo.get_rented_car(alice.id).unwrap().unwrap();
    assert_eq!(rented.car.name, "Model X");
    assert_eq!(rented.company.name, "Sixt");

    // When: Alice returns it
    repo.return_rented_car(alice.id).unwrap();

    // Then: it is available again and she holds nothing
    assert_eq!(
        names(&repo.get_available_company_cars(sixt.id).unwrap()),
        vec!["Model X"]
    );
    assert_eq!(
        repo.get_customer_by_id(alice.id).unwrap().unwrap().rented_car_id,
        None
    );
    assert_eq!(repo.get_rented_car(alice.id).unwrap(), None);
}

#[test]
fn test_availability_only_excludes_rented_car() {
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let hertz = repo.add_company("Hertz").unwrap();
    let x = repo.add_car("Model X", sixt.id).unwrap();
    let s = repo.add_car("Model S", sixt.id).unwrap();
    let golf = repo.add_car("Golf", hertz.id).unwrap();
    let alice = repo.add_customer("Alice").unwrap();

    repo.rent_car_to_customer(x.id, alice.id).unwrap();

    assert_eq!(repo.get_available_company_cars(sixt.id).unwrap(), vec![s]);
    assert_eq!(repo.get_available_company_cars(hertz.id).unwrap(), vec![golf]);
    // Company listing is unaffected by rentals
    assert_eq!(repo.get_company_cars(sixt.id).unwrap().len(), 2);
}

#[test]
fn test_rent_unknown_car_is_foreign_key_error() {
    let (_tmp, repo) = setup_repo();
    let alice = repo.add_customer("Alice").unwrap();

    let err = repo.rent_car_to_customer(99, alice.id).unwrap_err();

    assert_eq!(
        err,
        CarshareError::ForeignKey {
            reason: "car 99 does not exist".to_string()
        }
    );
    assert_eq!(
        repo.get_customer_by_id(alice.id).unwrap().unwrap().rented_car_id,
        None
    );
}

#[test]
fn test_rent_to_unknown_customer_is_foreign_key_error() {
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let car = repo.add_car("Model X", sixt.id).unwrap();

    let err = repo.rent_car_to_customer(car.id, 7).unwrap_err();

    assert_eq!(
        err,
        CarshareError::ForeignKey {
            reason: "customer 7 does not exist".to_string()
        }
    );
}

#[test]
fn test_second_renter_of_same_car_rejected() {
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let car = repo.add_car("Model X", sixt.id).unwrap();
    let alice = repo.add_customer("Alice").unwrap();
    let bob = repo.add_customer("Bob").unwrap();

    repo.rent_car_to_customer(car.id, alice.id).unwrap();
    let err = repo.rent_car_to_customer(car.id, bob.id).unwrap_err();

    assert_eq!(err, CarshareError::CarUnavailable { car_id: car.id });
    assert_eq!(
        repo.get_customer_by_id(bob.id).unwrap().unwrap().rented_car_id,
        None
    );
}

#[test]
fn test_rent_is_unchecked_for_customer_already_renting() {
    // The repository writes what it is told; the policy lives with the caller.
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let x = repo.add_car("Model X", sixt.id).unwrap();
    let s = repo.add_car("Model S", sixt.id).unwrap();
    let alice = repo.add_customer("Alice").unwrap();

    repo.rent_car_to_customer(x.id, alice.id).unwrap();
    repo.rent_car_to_customer(s.id, alice.id).unwrap();

    assert_eq!(
        repo.get_customer_by_id(alice.id).unwrap().unwrap().rented_car_id,
        Some(s.id)
    );
    assert_eq!(repo.get_available_company_cars(sixt.id).unwrap(), vec![x]);
}

#[test]
fn test_return_for_unknown_customer_is_foreign_key_error() {
    let (_tmp, repo) = setup_repo();

    assert!(matches!(
        repo.return_rented_car(3).unwrap_err(),
        CarshareError::ForeignKey { .. }
    ));
}

#[test]
fn test_return_without_rental_is_noop() {
    let (_tmp, repo) = setup_repo();
    let alice = repo.add_customer("Alice").unwrap();

    repo.return_rented_car(alice.id).unwrap();

    assert_eq!(
        repo.get_customer_by_id(alice.id).unwrap().unwrap().rented_car_id,
        None
    );
}

// ---------------------------------------------------------------------------
// Conditional rental
// ---------------------------------------------------------------------------

#[test]
fn test_conditional_rent_succeeds_once_per_car() {
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let car = repo.add_car("Model X", sixt.id).unwrap();
    let alice = repo.add_customer("Alice").unwrap();
    let bob = repo.add_customer("Bob").unwrap();

    assert!(repo.rent_car_if_available(car.id, alice.id).unwrap());
    assert!(!repo.rent_car_if_available(car.id, bob.id).unwrap());

    assert_eq!(
        repo.get_rented_car(alice.id).unwrap(),
        Some(RentedCar {
            car: car.clone(),
            company: sixt
        })
    );
    assert_eq!(repo.get_rented_car(bob.id).unwrap(), None);
}

#[test]
fn test_conditional_rent_refuses_customer_already_renting() {
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let x = repo.add_car("Model X", sixt.id).unwrap();
    let s = repo.add_car("Model S", sixt.id).unwrap();
    let alice = repo.add_customer("Alice").unwrap();

    assert!(repo.rent_car_if_available(x.id, alice.id).unwrap());
    assert!(!repo.rent_car_if_available(s.id, alice.id).unwrap());

    assert_eq!(
        repo.get_customer_by_id(alice.id).unwrap().unwrap().rented_car_id,
        Some(x.id)
    );
}

#[test]
fn test_conditional_rent_unknown_ids() {
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let car = repo.add_car("Model X", sixt.id).unwrap();
    let alice = repo.add_customer("Alice").unwrap();

    assert!(matches!(
        repo.rent_car_if_available(car.id, 50).unwrap_err(),
        CarshareError::ForeignKey { .. }
    ));
    assert!(matches!(
        repo.rent_car_if_available(50, alice.id).unwrap_err(),
        CarshareError::ForeignKey { .. }
    ));
}

#[test]
fn test_concurrent_conditional_rents_yield_one_winner() {
    let (_tmp, repo) = setup_repo();
    let sixt = repo.add_company("Sixt").unwrap();
    let car = repo.add_car("Model X", sixt.id).unwrap();
    let renters: Vec<_> = (0..4)
        .map(|i| repo.add_customer(&format!("Renter {}", i)).unwrap())
        .collect();

    let outcomes: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = renters
            .iter()
            .map(|customer| {
                let repo = repo.clone();
                let customer_id = customer.id;
                scope.spawn(move || repo.rent_car_if_available(car.id, customer_id))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let errors: Vec<_> = outcomes.iter().filter_map(|o| o.as_ref().err()).collect();
    assert!(errors.is_empty(), "rent attempts failed: {:?}", errors);
    let winners = outcomes
        .iter()
        .filter(|o| matches!(o, Ok(true)))
        .count();
    assert_eq!(winners, 1);

    let holders = repo
        .get_all_customers()
        .unwrap()
        .into_iter()
        .filter(|c| c.is_renting(car.id))
        .count();
    assert_eq!(holders, winners);
}
