use clap::{Parser, Subcommand, ValueEnum};
use courseledger::application::auth::AuthGate;
use courseledger::application::engine::EnrollmentEngine;
use courseledger::domain::account::Registration;
use courseledger::domain::catalog::{Catalog, Course, CourseTier};
use courseledger::domain::payment::PaymentDetails;
use courseledger::domain::ports::KvStoreBox;
use courseledger::infrastructure::in_memory::InMemoryKvStore;
use courseledger::infrastructure::rocksdb::RocksDbKvStore;
use courseledger::interfaces::csv::fee_writer::FeeWriter;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB;
    /// otherwise state lives only for this invocation.
    #[arg(long)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the device account, replacing any existing one
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Log in with the stored account
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// List the course catalog
    Courses {
        /// Restrict the listing to one tier
        #[arg(long)]
        tier: Option<TierArg>,
    },
    /// Show the details of one course
    Show { course: String },
    /// Enroll in a course, or unenroll if already enrolled
    Toggle { course: String },
    /// Remove a course from the current selection
    Remove { course: String },
    /// Show the fee summary for the current selection
    Fees {
        /// Write the summary as CSV instead of plain text
        #[arg(long)]
        csv: bool,
    },
    /// Pay for the selected courses (simulated)
    Pay {
        #[command(subcommand)]
        method: PayMethod,
    },
}

#[derive(Subcommand)]
enum PayMethod {
    /// Pay by card
    Card {
        #[arg(long)]
        number: String,
        #[arg(long)]
        expiry: String,
        #[arg(long)]
        cvc: String,
    },
    /// Pay by e-wallet
    EWallet {
        #[arg(long)]
        wallet_id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TierArg {
    SixMonth,
    SixWeek,
}

impl From<TierArg> for CourseTier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::SixMonth => CourseTier::SixMonth,
            TierArg::SixWeek => CourseTier::SixWeek,
        }
    }
}

fn print_course_line(course: &Course) {
    println!(
        "{} ({}) - R{}",
        course.name,
        course.tier.label(),
        course.price()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // One store backs both services; clones share the same state.
    let (auth_store, engine_store): (KvStoreBox, KvStoreBox) =
        if let Some(db_path) = &cli.db_path {
            let store = RocksDbKvStore::open(db_path).into_diagnostic()?;
            (Box::new(store.clone()), Box::new(store))
        } else {
            let store = InMemoryKvStore::new();
            (Box::new(store.clone()), Box::new(store))
        };

    let auth = AuthGate::new(auth_store);
    let engine = EnrollmentEngine::new(engine_store, Catalog::new());

    match cli.command {
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let registration = Registration {
                username,
                email,
                password,
                confirm_password,
            };
            let account = auth.register(registration).await.into_diagnostic()?;
            println!("Account created successfully for {}!", account.username);
        }
        Command::Login { username, password } => {
            let account = auth.login(&username, &password).await.into_diagnostic()?;
            println!("Logged in successfully as {}!", account.username);
        }
        Command::Courses { tier } => match tier {
            Some(tier) => {
                for course in engine.catalog().by_tier(tier.into()) {
                    print_course_line(course);
                }
            }
            None => {
                for course in engine.catalog().courses() {
                    print_course_line(course);
                }
            }
        },
        Command::Show { course } => {
            let entry = engine
                .catalog()
                .course(&course)
                .ok_or_else(|| miette::miette!("unknown course: {}", course))?;
            print_course_line(entry);
            println!("Purpose: {}", entry.purpose);
            println!("Course Content:");
            for topic in entry.topics {
                println!("  - {}", topic);
            }
            if engine.is_enrolled(entry.name).await.into_diagnostic()? {
                println!("You are enrolled in this course.");
            }
        }
        Command::Toggle { course } => {
            let enrolled = engine.toggle_enrollment(&course).await.into_diagnostic()?;
            if enrolled {
                println!("Enrolled in {}.", course);
            } else {
                println!("Removed {} from your selection.", course);
            }
        }
        Command::Remove { course } => {
            engine.remove_course(&course).await.into_diagnostic()?;
            println!("Removed {} from your selection.", course);
        }
        Command::Fees { csv } => {
            let summary = engine.fee_summary().await.into_diagnostic()?;
            if csv {
                let stdout = io::stdout();
                let mut writer = FeeWriter::new(stdout.lock());
                writer.write_summary(&summary).into_diagnostic()?;
            } else {
                for line in &summary.lines {
                    println!("{}: R{}", line.course, line.price);
                }
                println!("Total: R{}", summary.total);
            }
        }
        Command::Pay { method } => {
            let details = match method {
                PayMethod::Card {
                    number,
                    expiry,
                    cvc,
                } => PaymentDetails::Card {
                    number,
                    expiry,
                    cvc,
                },
                PayMethod::EWallet { wallet_id } => PaymentDetails::EWallet { wallet_id },
            };
            let receipt = engine.checkout(&details).await.into_diagnostic()?;
            println!(
                "Payment successful! You have paid for {} with {}. Total: {} Rand",
                receipt.courses.join(", "),
                receipt.method,
                receipt.total
            );
        }
    }

    Ok(())
}
