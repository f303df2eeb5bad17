//! Interactive menu session
//!
//! Reads one choice per line from `input` and writes menus and messages to
//! `out`. Recoverable errors are printed and the current menu is shown again;
//! storage errors end the session. End of input ends the session from any
//! depth.

use std::io::{BufRead, Write};

use carshare_core::{CarshareError, Company, Result};
use carshare_engine::commands::{car, company, customer, rental};
use carshare_store::CarshareRepo;

use crate::error::CliResult;
use crate::menu::{CompanyOption, CustomerOption, ManagerOption, Menu, StartOption};

/// Whether to keep going after a submenu or action returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Outcome of choosing from a numbered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    Item(usize),
    Back,
    Quit,
}

pub struct Session<R, W> {
    repo: CarshareRepo,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(repo: CarshareRepo, input: R, out: W) -> Self {
        Self { repo, input, out }
    }

    /// Run the start menu until the user exits or input ends
    ///
    /// # Errors
    /// Storage failures and terminal I/O failures.
    pub fn run(&mut self) -> CliResult<()> {
        tracing::debug!(path = %self.repo.store().path().display(), "session started");

        loop {
            let Some(option) = self.choose::<StartOption>()? else {
                return Ok(());
            };
            let flow = match option {
                StartOption::Manager => self.manager_menu()?,
                StartOption::Customer => self.customer_login()?,
                StartOption::CreateCustomer => self.create_customer()?,
                StartOption::Exit => Flow::Quit,
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    // ===== Manager =====

    fn manager_menu(&mut self) -> CliResult<Flow> {
        loop {
            let Some(option) = self.choose::<ManagerOption>()? else {
                return Ok(Flow::Quit);
            };
            let flow = match option {
                ManagerOption::CompanyList => self.company_list()?,
                ManagerOption::CreateCompany => self.create_company()?,
                ManagerOption::Back => return Ok(Flow::Continue),
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn company_list(&mut self) -> CliResult<Flow> {
        let companies = company::company_list(&self.repo)?;
        if companies.is_empty() {
            self.say("The company list is empty!")?;
            return Ok(Flow::Continue);
        }

        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        match self.pick("Choose the company:", &names)? {
            Pick::Item(i) => self.company_menu(&companies[i]),
            Pick::Back => Ok(Flow::Continue),
            Pick::Quit => Ok(Flow::Quit),
        }
    }

    fn create_company(&mut self) -> CliResult<Flow> {
        let Some(name) = self.prompt("Enter the company name:")? else {
            return Ok(Flow::Quit);
        };
        let created = company::company_create(&self.repo, &name);
        if self.recover(created)?.is_some() {
            self.say("The company was created!")?;
        }
        Ok(Flow::Continue)
    }

    fn company_menu(&mut self, company: &Company) -> CliResult<Flow> {
        loop {
            let Some(option) = self.choose::<CompanyOption>()? else {
                return Ok(Flow::Quit);
            };
            let flow = match option {
                CompanyOption::CarList => {
                    self.car_list(company)?;
                    Flow::Continue
                }
                CompanyOption::CreateCar => self.create_car(company)?,
                CompanyOption::Back => return Ok(Flow::Continue),
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn car_list(&mut self, company: &Company) -> CliResult<()> {
        let cars = car::company_cars(&self.repo, company.id)?;
        if cars.is_empty() {
            return self.say("The car list is empty!");
        }

        let mut text = String::from("Car list:\n");
        for (i, car) in cars.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, car.name));
        }
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn create_car(&mut self, company: &Company) -> CliResult<Flow> {
        let Some(name) = self.prompt("Enter the car name:")? else {
            return Ok(Flow::Quit);
        };
        let created = car::car_create(&self.repo, company.id, &name);
        if self.recover(created)?.is_some() {
            self.say("The car was added!")?;
        }
        Ok(Flow::Continue)
    }

    // ===== Customer =====

    fn create_customer(&mut self) -> CliResult<Flow> {
        let Some(name) = self.prompt("Enter the customer name:")? else {
            return Ok(Flow::Quit);
        };
        let created = customer::customer_create(&self.repo, &name);
        if self.recover(created)?.is_some() {
            self.say("The customer was created!")?;
        }
        Ok(Flow::Continue)
    }

    fn customer_login(&mut self) -> CliResult<Flow> {
        let customers = customer::customer_list(&self.repo)?;
        if customers.is_empty() {
            self.say("The customer list is empty!")?;
            return Ok(Flow::Continue);
        }

        let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
        match self.pick("Choose a customer:", &names)? {
            Pick::Item(i) => self.customer_menu(customers[i].id),
            Pick::Back => Ok(Flow::Continue),
            Pick::Quit => Ok(Flow::Quit),
        }
    }

    fn customer_menu(&mut self, customer_id: i64) -> CliResult<Flow> {
        loop {
            let Some(option) = self.choose::<CustomerOption>()? else {
                return Ok(Flow::Quit);
            };
            let flow = match option {
                CustomerOption::RentCar => self.rent_car(customer_id)?,
                CustomerOption::ReturnCar => {
                    let returned = rental::car_return(&self.repo, customer_id);
                    if self.recover(returned)?.is_some() {
                        self.say("You've returned a rented car!")?;
                    }
                    Flow::Continue
                }
                CustomerOption::MyRentedCar => {
                    let info = rental::rented_car_info(&self.repo, customer_id);
                    if let Some(info) = self.recover(info)? {
                        self.say(&info.to_string())?;
                    }
                    Flow::Continue
                }
                CustomerOption::Back => return Ok(Flow::Continue),
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn rent_car(&mut self, customer_id: i64) -> CliResult<Flow> {
        let current = customer::customer_get(&self.repo, customer_id);
        let Some(current) = self.recover(current)? else {
            return Ok(Flow::Continue);
        };
        if current.has_rental() {
            self.say("You've already rented a car!")?;
            return Ok(Flow::Continue);
        }

        let companies = company::company_list(&self.repo)?;
        if companies.is_empty() {
            self.say("The company list is empty!")?;
            return Ok(Flow::Continue);
        }
        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        let company = match self.pick("Choose a company:", &names)? {
            Pick::Item(i) => &companies[i],
            Pick::Back => return Ok(Flow::Continue),
            Pick::Quit => return Ok(Flow::Quit),
        };

        let cars = car::available_cars(&self.repo, company.id)?;
        if cars.is_empty() {
            self.say(&format!("No available cars in the '{}' company", company.name))?;
            return Ok(Flow::Continue);
        }
        let names: Vec<&str> = cars.iter().map(|c| c.name.as_str()).collect();
        let chosen = match self.pick("Choose a car:", &names)? {
            Pick::Item(i) => &cars[i],
            Pick::Back => return Ok(Flow::Continue),
            Pick::Quit => return Ok(Flow::Quit),
        };

        let rented = rental::car_rent(&self.repo, customer_id, chosen.id);
        if let Some(car) = self.recover(rented)? {
            self.say(&format!("You rented '{}'", car.name))?;
        }
        Ok(Flow::Continue)
    }

    // ===== Input and output =====

    /// Show menu `M` until a listed option is entered; `None` at end of input
    fn choose<M: Menu>(&mut self) -> CliResult<Option<M>> {
        loop {
            writeln!(self.out, "{}", M::render())?;
            let Some(token) = self.next_token()? else {
                return Ok(None);
            };
            match M::parse(&token) {
                Some(option) => return Ok(Some(option)),
                None => self.say("Invalid option!")?,
            }
        }
    }

    /// Show `names` numbered from 1 under `title` and read a choice
    fn pick(&mut self, title: &str, names: &[&str]) -> CliResult<Pick> {
        let mut text = format!("{}\n", title);
        for (i, name) in names.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, name));
        }
        text.push_str("0. Back\n");

        loop {
            writeln!(self.out, "{}", text)?;
            let Some(token) = self.next_token()? else {
                return Ok(Pick::Quit);
            };
            match token.parse::<usize>() {
                Ok(0) => return Ok(Pick::Back),
                Ok(n) if n <= names.len() => return Ok(Pick::Item(n - 1)),
                _ => self.say("Invalid option!")?,
            }
        }
    }

    /// Print `question` and read the answer line as entered
    fn prompt(&mut self, question: &str) -> CliResult<Option<String>> {
        writeln!(self.out, "{}", question)?;
        self.read_line()
    }

    // Blank lines are skipped when a menu choice is expected.
    fn next_token(&mut self) -> CliResult<Option<String>> {
        while let Some(line) = self.read_line()? {
            let token = line.trim();
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }

    fn read_line(&mut self) -> CliResult<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }

    /// Print a message followed by a blank line
    fn say(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.out, "{}\n", message)?;
        Ok(())
    }

    /// Print a recoverable error and yield `None`; storage errors propagate
    fn recover<T>(&mut self, result: Result<T>) -> CliResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_recoverable() => {
                self.say(&user_message(&err))?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Text shown to the user for a recoverable error
fn user_message(err: &CarshareError) -> String {
    match err {
        CarshareError::AlreadyRenting { .. } => "You've already rented a car!".to_string(),
        CarshareError::NoActiveRental { .. } => "You didn't rent a car!".to_string(),
        CarshareError::CarUnavailable { .. } => "This car is no longer available!".to_string(),
        other => other.to_string(),
    }
}
