//! Grade Book - Main Entry Point
//!
//! Interactive console front end for the grade book. The menu loop only
//! collects input and delegates to the `gradebook` library; the book is
//! saved after every successful mutation and again on exit.

use anyhow::Result;
use clap::Parser;
use gradebook::{GradeBook, Storage, formatting, validation};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Grade Book - track students, courses, grades, and GPA rankings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the grade book data file
    #[arg(default_value = "gradebook.toml")]
    file: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradebook=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let storage = Storage::new(&args.file);
    let mut book = storage.load()?;

    loop {
        print_menu();
        let choice = prompt("Choose an action: ")?;

        match choice.as_str() {
            "1" => report(add_student(&mut book, &storage)),
            "2" => report(add_course(&mut book, &storage)),
            "3" => report(register(&mut book, &storage)),
            "4" => report(calculate_gpa(&mut book, &storage)),
            "5" => print!("{}", formatting::format_ranking(&book.rank())),
            "6" => report(search_by_grade(&book)),
            "7" => report(show_transcript(&book)),
            "8" => report(storage.save(&book).map_err(Into::into)),
            "9" => {
                storage.save(&book)?;
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Grade Book Application");
    println!("1. Add Student");
    println!("2. Add Course");
    println!("3. Register Student for Course");
    println!("4. Calculate GPA");
    println!("5. Calculate Ranking");
    println!("6. Search by Grade");
    println!("7. Generate Transcript");
    println!("8. Save Data");
    println!("9. Exit");
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print an action's failure without aborting the menu loop
fn report(outcome: Result<()>) {
    if let Err(e) = outcome {
        println!("Error: {e}");
    }
}

fn add_student(book: &mut GradeBook, storage: &Storage) -> Result<()> {
    let email = validation::normalize_key(&prompt("Enter student email: ")?);
    let names = prompt("Enter student names: ")?;
    let student = book.add_student(&email, &names)?;
    println!("Student {} added successfully!", student.names);
    storage.save(book)?;
    Ok(())
}

fn add_course(book: &mut GradeBook, storage: &Storage) -> Result<()> {
    let name = validation::normalize_key(&prompt("Enter course name: ")?);
    let trimester = prompt("Enter course trimester: ")?;
    let credits = validation::parse_credits(&prompt("Enter course credits: ")?)?;
    let course = book.add_course(&name, &trimester, credits)?;
    println!("Course {} added successfully!", course.name);
    storage.save(book)?;
    Ok(())
}

fn register(book: &mut GradeBook, storage: &Storage) -> Result<()> {
    let email = validation::normalize_key(&prompt("Enter student email: ")?);
    let course = validation::normalize_key(&prompt("Enter course name: ")?);
    let grade = validation::parse_grade(&prompt("Enter grade: ")?)?;
    book.register(&email, &course, grade)?;
    println!("Student {email} registered for course {course} successfully!");
    storage.save(book)?;
    Ok(())
}

fn calculate_gpa(book: &mut GradeBook, storage: &Storage) -> Result<()> {
    let email = validation::normalize_key(&prompt("Enter student email: ")?);
    let gpa = book.compute_gpa(&email)?;
    println!("GPA for {email}: {gpa}");
    storage.save(book)?;
    Ok(())
}

fn search_by_grade(book: &GradeBook) -> Result<()> {
    let course = validation::normalize_key(&prompt("Enter course name: ")?);
    let grade = validation::parse_grade(&prompt("Enter grade: ")?)?;
    let students = book.search_by_grade(&course, grade);
    print!("{}", formatting::format_search_results(&course, grade, &students));
    Ok(())
}

fn show_transcript(book: &GradeBook) -> Result<()> {
    let email = validation::normalize_key(&prompt("Enter student email: ")?);
    print!("{}", book.transcript(&email)?);
    Ok(())
}
