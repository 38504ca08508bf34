use anyhow::Result;
use clap::Parser;
use practica::application::RecordService;
use practica::cli::{Cli, Commands, StudentCommands};
use practica::domain::StudentLookup;
use tempfile::TempDir;

/// Parse and run one command line against the record file at `records`.
fn run_with_records(records: &str, args: &[&str]) -> Result<()> {
    let argv = ["practica", "--records", records].into_iter().chain(args.iter().copied());
    Cli::try_parse_from(argv)?.run()
}

#[test]
fn test_parse_student_add() {
    let cli =
        Cli::try_parse_from(["practica", "student", "add", "1", "Armaan", "20", "A"]).unwrap();

    assert_eq!(cli.records, "student_records.json");
    match cli.command {
        Commands::Student(StudentCommands::Add {
            id,
            name,
            age,
            grade,
        }) => {
            assert_eq!(id, 1);
            assert_eq!(name, "Armaan");
            assert_eq!(age, 20);
            assert_eq!(grade, "A");
        }
        _ => panic!("expected student add"),
    }
}

#[test]
fn test_records_path_is_global() {
    let cli = Cli::try_parse_from([
        "practica",
        "student",
        "list",
        "--records",
        "/tmp/other.json",
    ])
    .unwrap();
    assert_eq!(cli.records, "/tmp/other.json");
}

#[test]
fn test_find_requires_exactly_one_lookup() {
    assert!(Cli::try_parse_from(["practica", "student", "find"]).is_err());
    assert!(
        Cli::try_parse_from(["practica", "student", "find", "--id", "1", "--name", "Bob"]).is_err()
    );
    assert!(Cli::try_parse_from(["practica", "student", "find", "--name", "Bob"]).is_ok());
}

#[test]
fn test_stats_accepts_negative_numbers() {
    let cli = Cli::try_parse_from(["practica", "stats", "-1", "-2.5", "3"]).unwrap();
    match cli.command {
        Commands::Stats { values, json } => {
            assert_eq!(values, vec![-1.0, -2.5, 3.0]);
            assert!(!json);
        }
        _ => panic!("expected stats"),
    }
}

#[test]
fn test_stats_rejects_non_numbers() {
    assert!(Cli::try_parse_from(["practica", "stats", "1", "two"]).is_err());
}

#[test]
fn test_run_student_add_then_update() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("student_records.json");
    let records = path.to_str().unwrap();

    run_with_records(records, &["student", "add", "1", "Armaan", "20", "A"])?;
    run_with_records(records, &["student", "update", "--id", "1", "--age", "21"])?;

    let student = RecordService::open(&path).get_student(&StudentLookup::Id(1))?;
    assert_eq!(student.name, "Armaan");
    assert_eq!(student.age, 21);
    assert_eq!(student.grade, "A");
    Ok(())
}

#[test]
fn test_run_student_commands_report_failures() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("student_records.json");
    let records = path.to_str().unwrap();

    run_with_records(records, &["student", "add", "1", "Armaan", "20", "A"])?;
    assert!(run_with_records(records, &["student", "add", "1", "Bob", "21", "B"]).is_err());
    assert!(run_with_records(records, &["student", "update", "--id", "9", "--age", "30"]).is_err());
    assert!(run_with_records(records, &["student", "update", "--id", "1"]).is_err());

    assert_eq!(RecordService::open(&path).list_students()?.len(), 1);
    Ok(())
}

#[test]
fn test_run_export_then_import_into_new_file() -> Result<()> {
    let temp = TempDir::new()?;
    let source = temp.path().join("source.json");
    let target = temp.path().join("target.json");
    let csv = temp.path().join("students.csv");
    let (source, target, csv) = (
        source.to_str().unwrap(),
        target.to_str().unwrap(),
        csv.to_str().unwrap(),
    );

    run_with_records(source, &["student", "add", "1", "Armaan", "20", "A"])?;
    run_with_records(source, &["student", "add", "2", "Bob", "21", "B"])?;
    run_with_records(source, &["student", "export", "-o", csv])?;

    run_with_records(target, &["student", "import", "-i", csv, "--dry-run"])?;
    assert!(RecordService::open(target).list_students()?.is_empty());

    run_with_records(target, &["student", "import", "-i", csv])?;
    let names: Vec<_> =
        RecordService::open(target).list_students()?.into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Armaan", "Bob"]);
    Ok(())
}

#[test]
fn test_run_email_fails_on_rejected_address() -> Result<()> {
    let temp = TempDir::new()?;
    let records = temp.path().join("unused.json");
    let records = records.to_str().unwrap();

    assert!(run_with_records(records, &["email", "user@yopmail.com"]).is_err());
    assert!(run_with_records(records, &["email", "user@gmail.com", "user@yopmail.com"]).is_err());
    run_with_records(records, &["email", "user@gmail.com"])?;
    run_with_records(records, &["email", "user@school.edu", "--allow", "school.edu"])?;
    Ok(())
}

#[test]
fn test_run_stats() -> Result<()> {
    let temp = TempDir::new()?;
    let records = temp.path().join("unused.json");
    let records = records.to_str().unwrap();

    run_with_records(records, &["stats", "1", "2", "3", "4"])?;
    run_with_records(records, &["stats", "5", "--json"])?;
    Ok(())
}

#[test]
fn test_run_demos() -> Result<()> {
    let temp = TempDir::new()?;
    let records = temp.path().join("unused.json");
    let records = records.to_str().unwrap();

    run_with_records(records, &["demo", "shop"])?;
    run_with_records(records, &["demo", "delivery"])?;
    assert!(!temp.path().join("unused.json").exists());
    Ok(())
}
