pub mod car;
pub mod company;
pub mod customer;
pub mod entity;
pub mod rented_car;

pub use car::Car;
pub use company::Company;
pub use customer::Customer;
pub use entity::EntityKind;
pub use rented_car::RentedCar;
