//! Prints a tour of the directory's reports against the sample data.
//!
//! Pass a configuration directory as the first argument to override the
//! built-in payroll and organization settings.

use std::env;
use std::time::Instant;

use employee_directory::config::{ConfigLoader, DirectoryConfig};
use employee_directory::error::DirectoryResult;
use employee_directory::logging;
use employee_directory::models::DataInput;
use employee_directory::system::EmployeeSystem;
use employee_directory::util::{format_date, format_whole_dollars};

const BANNER: &str = "=================================================";

#[tokio::main]
async fn main() -> DirectoryResult<()> {
    logging::init();

    let config = match env::args().nth(1) {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => DirectoryConfig::default(),
    };
    let system = EmployeeSystem::from_config(config)?;
    let directory = system.directory();
    let query = system.query();

    println!("{}", BANNER);
    println!("   Employee Directory & Reporting Engine");
    println!("{}\n", BANNER);

    println!("Demo 1: Processing various data types");
    println!("  {}", query.process_employee_data(&"E001".into()));
    println!(
        "  {}",
        query.process_employee_data(&DataInput::from(directory.find_all()))
    );

    let alice = directory.find_by_id("E001")?;
    println!("\nDemo 2: Employee Status");
    println!(
        "  {} is: {}",
        alice.full_name(),
        query.get_employee_status(alice)
    );

    println!("\nDemo 3: Payroll Generation");
    println!("{}", system.payroll().generate_paystub("E001")?);

    println!("\nDemo 4: Department Report");
    println!(
        "{}",
        system.reporting().generate_department_report("Engineering")
    );

    println!("\nDemo 5: Top 3 Performers");
    for employee in query.get_top_performers(3) {
        println!(
            "  {}: {}",
            employee.full_name(),
            format_whole_dollars(employee.salary)
        );
    }

    println!("\nDemo 6: Getting Employee City");
    println!("  E001 city: {}", query.get_employee_city("E001"));

    println!("\nDemo 7: Newest Employee");
    if let Some(newest) = directory.get_newest_employee() {
        println!(
            "  {} (hired {})",
            newest.full_name(),
            format_date(Some(newest.hire_date))
        );
    }

    println!("\nDemo 8: Sending Payroll Notifications");
    let started = Instant::now();
    let summary = system
        .notifications()
        .send_payroll_notifications(&directory.find_all())
        .await;
    println!(
        "  Sent {} of {} ({} failed)",
        summary.sent, summary.attempted, summary.failed
    );
    println!("  Time taken: {}ms", started.elapsed().as_millis());

    println!("\nDemo 9: Company Overview");
    println!("{}", system.generate_report());
    println!("{}", system.reporting().generate_bonus_summary());

    println!("\n{}", BANNER);
    println!("   Application Complete");
    println!("{}", BANNER);

    Ok(())
}
