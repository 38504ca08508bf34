use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::application::{
    AppError, Customer, DeliveryCustomer, DeliveryService, RecordService, Restaurant,
};
use crate::domain::{
    EmailPolicy, FoodItem, Product, Statistics, Student, StudentId, StudentLookup, StudentUpdate,
    calculate_statistics, format_cents, parse_cents,
};
use crate::storage::DEFAULT_RECORDS_PATH;

/// Practica - student records, cart ledgers and validation drills
#[derive(Parser)]
#[command(name = "practica")]
#[command(about = "Student record store, cart quantity ledgers, email and statistics checks")]
#[command(version)]
pub struct Cli {
    /// Student record file path
    #[arg(
        short,
        long,
        global = true,
        env = "PRACTICA_RECORDS",
        default_value = DEFAULT_RECORDS_PATH
    )]
    pub records: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Student record commands
    #[command(subcommand)]
    Student(StudentCommands),

    /// Validate one or more email addresses
    Email {
        /// Addresses to check
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Extra provider domain to accept (repeatable)
        #[arg(long)]
        allow: Vec<String>,

        /// Extra disposable provider domain to reject (repeatable)
        #[arg(long)]
        deny: Vec<String>,
    },

    /// Mean, median and sample standard deviation of a list of numbers
    Stats {
        /// Numbers to summarise
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay the cart simulations
    #[command(subcommand)]
    Demo(DemoCommands),
}

#[derive(Subcommand)]
pub enum StudentCommands {
    /// Add a new student
    Add {
        /// Unique student id
        id: StudentId,

        /// Student name
        name: String,

        /// Age in years
        age: u32,

        /// Grade (e.g., "A", "B+")
        grade: String,
    },

    /// Find a student by id or name
    Find {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a student's age and/or grade
    Update {
        #[command(flatten)]
        lookup: LookupArgs,

        /// New age
        #[arg(long)]
        age: Option<u32>,

        /// New grade
        #[arg(long)]
        grade: Option<String>,
    },

    /// List all students
    List {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export students to CSV or JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },

    /// Import students from CSV
    Import {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Preview without importing
        #[arg(long)]
        dry_run: bool,

        /// Skip rows whose id already exists
        #[arg(long)]
        skip_duplicates: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct LookupArgs {
    /// Student id
    #[arg(long)]
    pub id: Option<StudentId>,

    /// Student name (exact match)
    #[arg(long)]
    pub name: Option<String>,
}

impl LookupArgs {
    fn into_lookup(self) -> Result<StudentLookup> {
        match (self.id, self.name) {
            (Some(id), _) => Ok(StudentLookup::Id(id)),
            (None, Some(name)) => Ok(StudentLookup::Name(name)),
            (None, None) => anyhow::bail!("Provide --id or --name"),
        }
    }
}

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Shopping cart scenario
    Shop,

    /// Food delivery scenario
    Delivery,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        crate::logging::init(self.verbose, self.log_json);

        match self.command {
            Commands::Student(student_cmd) => {
                let service = RecordService::open(&self.records);
                run_student_command(&service, student_cmd)?;
            }

            Commands::Email {
                addresses,
                allow,
                deny,
            } => {
                let policy = allow
                    .into_iter()
                    .fold(EmailPolicy::default(), |policy, domain| policy.with_allowed(domain));
                let policy = deny
                    .into_iter()
                    .fold(policy, |policy, domain| policy.with_disposable(domain));
                run_email_command(&policy, &addresses)?;
            }

            Commands::Stats { values, json } => {
                let stats = calculate_statistics(&values)?;
                print_statistics(&stats, json)?;
            }

            Commands::Demo(DemoCommands::Shop) => run_shop_demo()?,
            Commands::Demo(DemoCommands::Delivery) => run_delivery_demo()?,
        }

        Ok(())
    }
}

fn run_student_command(service: &RecordService, cmd: StudentCommands) -> Result<()> {
    match cmd {
        StudentCommands::Add {
            id,
            name,
            age,
            grade,
        } => {
            let student = service.add_student(id, name, age, grade)?;
            println!("Added student: {} ({})", student.name, student.student_id);
        }

        StudentCommands::Find { lookup, json } => {
            let lookup = lookup.into_lookup()?;
            match service.find_student(&lookup)? {
                Some(student) if json => println!("{}", serde_json::to_string_pretty(&student)?),
                Some(student) => print_student(&student),
                None => println!("Student not found."),
            }
        }

        StudentCommands::Update { lookup, age, grade } => {
            let update = StudentUpdate { age, grade };
            if update.is_empty() {
                anyhow::bail!("Nothing to update. Pass --age and/or --grade");
            }
            let student = service.update_student(&lookup.into_lookup()?, &update)?;
            println!("Updated student:");
            print_student(&student);
        }

        StudentCommands::List { json } => {
            let students = service.list_students()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&students)?);
            } else if students.is_empty() {
                println!("No students found.");
            } else {
                println!("{:<6} {:<20} {:<5} {:<6}", "ID", "NAME", "AGE", "GRADE");
                println!("{}", "-".repeat(40));
                for student in students {
                    println!(
                        "{:<6} {:<20} {:<5} {:<6}",
                        student.student_id, student.name, student.age, student.grade
                    );
                }
            }
        }

        StudentCommands::Export { output, format } => {
            run_export_command(service, output.as_deref(), &format)?;
        }

        StudentCommands::Import {
            input,
            dry_run,
            skip_duplicates,
        } => {
            run_import_command(service, input.as_deref(), dry_run, skip_duplicates)?;
        }
    }
    Ok(())
}

fn print_student(student: &Student) {
    println!("  ID:    {}", student.student_id);
    println!("  Name:  {}", student.name);
    println!("  Age:   {}", student.age);
    println!("  Grade: {}", student.grade);
}

fn run_export_command(service: &RecordService, output: Option<&str>, format: &str) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{Write, stdout};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let count = match format {
        "csv" => exporter.export_students_csv(writer)?,
        "json" => exporter.export_students_json(writer)?.students.len(),
        _ => anyhow::bail!("Invalid export format '{}'. Valid formats: csv, json", format),
    };

    if output.is_some() {
        eprintln!("Exported {} students", count);
    }
    Ok(())
}

fn run_import_command(
    service: &RecordService,
    input: Option<&str>,
    dry_run: bool,
    skip_duplicates: bool,
) -> Result<()> {
    use crate::io::{ImportOptions, Importer};
    use std::fs::File;
    use std::io::{Read, stdin};

    let importer = Importer::new(service);

    let reader: Box<dyn Read> = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdin()),
    };

    let options = ImportOptions {
        dry_run,
        skip_duplicates,
    };
    let result = importer.import_students_csv(reader, &options)?;

    if dry_run {
        println!("Dry run: {} students would be imported", result.imported);
    } else {
        println!("Imported {} students", result.imported);
    }
    if result.skipped > 0 {
        println!("Skipped {} duplicates", result.skipped);
    }
    for error in &result.errors {
        eprintln!("  line {}: {}", error.line, error.error);
    }
    if !result.errors.is_empty() {
        anyhow::bail!("{} rows could not be imported", result.errors.len());
    }
    Ok(())
}

fn run_email_command(policy: &EmailPolicy, addresses: &[String]) -> Result<()> {
    let mut invalid = 0;
    for address in addresses {
        match policy.check(address) {
            Ok(()) => println!("valid    {}", address),
            Err(e) => {
                invalid += 1;
                println!("invalid  {} ({})", address, e);
            }
        }
    }
    if invalid > 0 {
        anyhow::bail!("{} of {} addresses are invalid", invalid, addresses.len());
    }
    Ok(())
}

fn print_statistics(stats: &Statistics, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    let show =
        |value: Option<f64>| value.map_or_else(|| "n/a".to_string(), |v| format!("{:.4}", v));
    println!("Mean:    {}", show(stats.mean));
    println!("Median:  {}", show(stats.median));
    println!("Std dev: {}", show(stats.std_dev));
    Ok(())
}

/// Print the outcome of an operation that is allowed to fail.
fn report(action: &str, result: Result<(), AppError>) {
    match result {
        Ok(()) => println!("{}: ok", action),
        Err(e) => println!("{}: {}", action, e),
    }
}

fn run_shop_demo() -> Result<()> {
    let keyboard = Product::new("Keyboard", parse_cents("50")?)?;
    let mouse = Product::new("Mouse", parse_cents("30")?)?;

    let mut customer = Customer::new("John Doe", "john.doe@example.com");

    report("Add 1 Keyboard", customer.add_to_cart(&keyboard, 1));
    report("Add 2 Mouse", customer.add_to_cart(&mouse, 2));
    match customer.checkout() {
        Ok(receipt) => println!(
            "Checking out... Your total is ${}.",
            format_cents(receipt.total_cents)
        ),
        Err(e) => println!("Checkout: {}", e),
    }

    report("Add -1 Keyboard", customer.add_to_cart(&keyboard, -1));
    report("Remove 3 Mouse", customer.remove_from_cart(&mouse, 3));
    report("Remove 1 Mouse", customer.remove_from_cart(&mouse, 1));

    match customer.checkout() {
        Ok(receipt) => println!(
            "Checking out... Your total is ${}.",
            format_cents(receipt.total_cents)
        ),
        Err(AppError::EmptyCart) => println!("Your cart is empty. Nothing to checkout."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn run_delivery_demo() -> Result<()> {
    let burger = FoodItem::new("Burger", parse_cents("8")?)?;
    let pizza = FoodItem::new("Pizza", parse_cents("12")?)?;
    let pasta = FoodItem::new("Pasta", parse_cents("10")?)?;

    let mut tasty_bites = Restaurant::new("Tasty Bites");
    tasty_bites.add_to_menu(&burger, 10)?;
    tasty_bites.add_to_menu(&pizza, 5)?;

    let mut spice_delight = Restaurant::new("Spice Delight");
    spice_delight.add_to_menu(&pizza, 8)?;
    spice_delight.add_to_menu(&pasta, 12)?;

    let mut customer = DeliveryCustomer::new("Alice", "123 Main St.");
    report("Alice adds 2 Burger", customer.add_to_cart(&burger, 2));
    report("Alice adds 3 Pizza", customer.add_to_cart(&pizza, 3));
    report("Alice adds -2 Pasta", customer.add_to_cart(&pasta, -2));

    let mut service = DeliveryService::new();
    service.add_restaurant(tasty_bites)?;
    service.add_restaurant(spice_delight)?;

    report(
        "Tasty Bites removes 6 Pizza",
        service
            .find_restaurant_mut("Tasty Bites")
            .and_then(|r| r.remove_from_menu(&pizza, 6)),
    );
    report(
        "Spice Delight removes 1 Burger",
        service
            .find_restaurant_mut("Spice Delight")
            .and_then(|r| r.remove_from_menu(&burger, 1)),
    );

    println!(
        "Cart total for {}: {}",
        customer.name,
        format_cents(customer.cart_total())
    );
    for restaurant in service.restaurants() {
        println!(
            "Total revenue for {}: {}",
            restaurant.name(),
            format_cents(restaurant.total_revenue())
        );
    }
    Ok(())
}
