use clap::{Parser, Subcommand, ValueEnum};
use hospital_core::{
    Hospital, HospitalConfig, Patient, Person, PersonDetails, Physician, RegistryResult, Roster,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod binary;

#[derive(Parser)]
#[command(name = "hospital")]
#[command(about = "Hospital registry CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the demo scenario against the bundled roster
    Demo,
    /// Print registry statistics for the bundled roster
    Report {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List physicians with their assigned patients
    Physicians,
    /// List patients
    Patients,
    /// Print the bundled roster as YAML
    Export,
    /// Convert a decimal number to binary
    ToBinary {
        /// Non-negative decimal value
        value: u64,
    },
    /// Convert a binary number to decimal
    FromBinary {
        /// Digits 0 and 1, most significant first
        bits: String,
    },
}

/// Entry point for the hospital CLI.
///
/// # Environment Variables
/// - `HOSPITAL_NAME`, `HOSPITAL_TAX_ID`: hospital identity
/// - `HOSPITAL_STREET`, `HOSPITAL_NUMBER`, `HOSPITAL_NEIGHBORHOOD`, `HOSPITAL_CITY`,
///   `HOSPITAL_POSTAL_CODE`: hospital address
/// - `RUST_LOG`: log filter (logs go to stderr)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hospital=info".parse()?)
                .add_directive("hospital_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => run_demo(load_demo_hospital()?)?,
        Some(Commands::Report { format }) => {
            let report = load_demo_hospital()?.report();
            match format {
                Format::Text => println!("{report}"),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                Format::Yaml => print!("{}", serde_yaml::to_string(&report)?),
            }
        }
        Some(Commands::Physicians) => {
            let hospital = load_demo_hospital()?;
            for physician in hospital.physicians() {
                print_physician(physician);
            }
        }
        Some(Commands::Patients) => {
            let hospital = load_demo_hospital()?;
            for patient in hospital.patients() {
                println!(
                    "ID: {}, Name: {}, Gender: {}, Phone: {}, Address: {}",
                    patient.identification(),
                    patient.full_name(),
                    patient.gender(),
                    patient.phone(),
                    patient.address()
                );
            }
        }
        Some(Commands::Export) => {
            let hospital = load_demo_hospital()?;
            print!("{}", Roster::from_hospital(&hospital).render()?);
        }
        Some(Commands::ToBinary { value }) => {
            println!("{} in binary is {}", value, binary::decimal_to_binary(value));
        }
        Some(Commands::FromBinary { bits }) => match binary::binary_to_decimal(&bits) {
            Ok(value) => println!("{} in decimal is {}", bits.trim(), value),
            Err(e) => eprintln!("Error converting {}: {}", bits, e),
        },
        None => {
            println!("Use 'hospital --help' for commands");
        }
    }

    Ok(())
}

fn load_demo_hospital() -> anyhow::Result<Hospital> {
    let cfg = HospitalConfig::from_env_values(|key| std::env::var(key).ok())?;
    let mut hospital = Hospital::from_config(&cfg);
    Roster::demo()?.load_into(&mut hospital)?;
    Ok(hospital)
}

/// Walks the registry through its business rules: a rejected duplicate, a patient update
/// and removal that cascade into assignment lists, and physician removal down to the
/// last-physician guard.
fn run_demo(mut hospital: Hospital) -> anyhow::Result<()> {
    println!("{} ({})", hospital.name(), hospital.tax_id());
    println!("Physicians by specialty:");
    for (specialty, count) in hospital.physician_count_by_specialty() {
        println!("  {specialty}: {count}");
    }

    let impostor = Physician::new(
        PersonDetails::new("Impostor", "1999", "Masculino", "impostor@hospital.com"),
        "MED-001",
        "Pediatría",
        2021,
        8_000_000.0,
    );
    print_outcome(
        "add physician 1999 with license MED-001",
        hospital.add_physician(impostor),
    );

    let current = hospital
        .get_patient("P2001")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("demo roster has no patient P2001"))?;
    let updated = Patient::new(
        current.details().clone(),
        "3209998877",
        current.address().clone(),
    );
    print_outcome(
        "update patient P2001",
        hospital.update_patient("P2001", updated),
    );
    print_assignments(&hospital, "1001");

    print_outcome("remove patient P2002", hospital.remove_patient("P2002"));
    print_assignments(&hospital, "1001");

    let ids: Vec<String> = hospital
        .physicians()
        .iter()
        .map(|p| p.identification().to_string())
        .collect();
    for id in ids {
        print_outcome(
            &format!("remove physician {id}"),
            hospital.remove_physician(&id),
        );
    }
    println!("Physicians remaining: {}", hospital.physician_count());

    println!();
    println!("{}", hospital.report());

    Ok(())
}

fn outcome_line(action: &str, result: &RegistryResult<()>) -> String {
    match result {
        Ok(()) => format!("{action}: ok"),
        Err(e) => format!("{action}: rejected ({e})"),
    }
}

fn print_outcome(action: &str, result: RegistryResult<()>) {
    if let Err(e) = &result {
        tracing::info!("{} rejected: {:?}", action, e);
    }
    println!("{}", outcome_line(action, &result));
}

fn print_assignments(hospital: &Hospital, physician_id: &str) {
    match hospital.get_physician(physician_id) {
        Some(physician) => print_physician(physician),
        None => println!("No physician with ID {physician_id}"),
    }
}

fn print_physician(physician: &Physician) {
    println!(
        "ID: {}, Name: {}, License: {}, Specialty: {}, Hired: {}, Salary: {:.2}",
        physician.identification(),
        physician.full_name(),
        physician.license(),
        physician.specialty(),
        physician.hire_year(),
        physician.salary()
    );
    for patient in physician.assigned_patients() {
        println!(
            "    - {} {} (phone {})",
            patient.identification(),
            patient.full_name(),
            patient.phone()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_core::{EntityKind, RegistryError};

    #[test]
    fn test_report_format_defaults_to_text() {
        let cli = Cli::try_parse_from(["hospital", "report"]).expect("should parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Report {
                format: Format::Text
            })
        ));
    }

    #[test]
    fn test_report_format_accepts_json() {
        let cli =
            Cli::try_parse_from(["hospital", "report", "--format", "json"]).expect("should parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Report {
                format: Format::Json
            })
        ));
    }

    #[test]
    fn test_to_binary_rejects_negative_values() {
        assert!(Cli::try_parse_from(["hospital", "to-binary", "-3"]).is_err());
    }

    #[test]
    fn test_outcome_line() {
        assert_eq!(outcome_line("remove physician 1", &Ok(())), "remove physician 1: ok");

        let err = RegistryError::NotFound {
            entity: EntityKind::Patient,
            identification: "P9".into(),
        };
        assert_eq!(
            outcome_line("remove patient P9", &Err(err)),
            "remove patient P9: rejected (no patient with identification P9)"
        );
    }

    #[test]
    fn test_run_demo_completes() {
        let cfg = HospitalConfig::from_env_values(|_| None).unwrap();
        let mut hospital = Hospital::from_config(&cfg);
        Roster::demo().unwrap().load_into(&mut hospital).unwrap();

        run_demo(hospital).expect("demo should run to completion");
    }
}
