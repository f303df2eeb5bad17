//! Menu definitions
//!
//! Each menu is an enum; its text is rendered from the variants so the
//! numbering and the dispatch in the session cannot drift apart.

/// A fixed menu whose options are chosen by number
pub trait Menu: Sized + Copy + 'static {
    /// Options in display order
    const OPTIONS: &'static [Self];

    fn number(self) -> u32;

    fn label(self) -> &'static str;

    /// Menu text, one `N. label` line per option
    fn render() -> String {
        Self::OPTIONS
            .iter()
            .map(|option| format!("{}. {}\n", option.number(), option.label()))
            .collect()
    }

    /// Option selected by `token`, if it names one
    fn parse(token: &str) -> Option<Self> {
        let number: u32 = token.trim().parse().ok()?;
        Self::OPTIONS
            .iter()
            .copied()
            .find(|option| option.number() == number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOption {
    Manager,
    Customer,
    CreateCustomer,
    Exit,
}

impl Menu for StartOption {
    const OPTIONS: &'static [Self] = &[
        StartOption::Manager,
        StartOption::Customer,
        StartOption::CreateCustomer,
        StartOption::Exit,
    ];

    fn number(self) -> u32 {
        match self {
            StartOption::Manager => 1,
            StartOption::Customer => 2,
            StartOption::CreateCustomer => 3,
            StartOption::Exit => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            StartOption::Manager => "Log in as a manager",
            StartOption::Customer => "Log in as a customer",
            StartOption::CreateCustomer => "Create a customer",
            StartOption::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerOption {
    CompanyList,
    CreateCompany,
    Back,
}

impl Menu for ManagerOption {
    const OPTIONS: &'static [Self] = &[
        ManagerOption::CompanyList,
        ManagerOption::CreateCompany,
        ManagerOption::Back,
    ];

    fn number(self) -> u32 {
        match self {
            ManagerOption::CompanyList => 1,
            ManagerOption::CreateCompany => 2,
            ManagerOption::Back => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ManagerOption::CompanyList => "Company list",
            ManagerOption::CreateCompany => "Create a company",
            ManagerOption::Back => "Back",
        }
    }
}

/// Actions on one company's fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyOption {
    CarList,
    CreateCar,
    Back,
}

impl Menu for CompanyOption {
    const OPTIONS: &'static [Self] = &[
        CompanyOption::CarList,
        CompanyOption::CreateCar,
        CompanyOption::Back,
    ];

    fn number(self) -> u32 {
        match self {
            CompanyOption::CarList => 1,
            CompanyOption::CreateCar => 2,
            CompanyOption::Back => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CompanyOption::CarList => "Car list",
            CompanyOption::CreateCar => "Create a car",
            CompanyOption::Back => "Back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerOption {
    RentCar,
    ReturnCar,
    MyRentedCar,
    Back,
}

impl Menu for CustomerOption {
    const OPTIONS: &'static [Self] = &[
        CustomerOption::RentCar,
        CustomerOption::ReturnCar,
        CustomerOption::MyRentedCar,
        CustomerOption::Back,
    ];

    fn number(self) -> u32 {
        match self {
            CustomerOption::RentCar => 1,
            CustomerOption::ReturnCar => 2,
            CustomerOption::MyRentedCar => 3,
            CustomerOption::Back => 0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CustomerOption::RentCar => "Rent a car",
            CustomerOption::ReturnCar => "Return a rented car",
            CustomerOption::MyRentedCar => "My rented car",
            CustomerOption::Back => "Back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_menu_text() {
        assert_eq!(
            StartOption::render(),
            "1. Log in as a manager\n2. Log in as a customer\n3. Create a customer\n0. Exit\n"
        );
    }

    #[test]
    fn test_customer_menu_text() {
        assert_eq!(
            CustomerOption::render(),
            "1. Rent a car\n2. Return a rented car\n3. My rented car\n0. Back\n"
        );
    }

    #[test]
    fn test_parse_accepts_listed_numbers_only() {
        assert_eq!(ManagerOption::parse(" 2 "), Some(ManagerOption::CreateCompany));
        assert_eq!(ManagerOption::parse("0"), Some(ManagerOption::Back));
        assert_eq!(ManagerOption::parse("3"), None);
        assert_eq!(ManagerOption::parse("-1"), None);
        assert_eq!(ManagerOption::parse("two"), None);
    }

    #[test]
    fn test_numbers_are_unique_per_menu() {
        fn assert_unique<M: Menu>() {
            let mut numbers: Vec<u32> = M::OPTIONS.iter().map(|o| o.number()).collect();
            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), M::OPTIONS.len());
        }

        assert_unique::<StartOption>();
        assert_unique::<ManagerOption>();
        assert_unique::<CompanyOption>();
        assert_unique::<CustomerOption>();
    }
}
