use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use gradeview::{
    AcademicYearResult, AuthService, Credentials, PortalClient, PortalError, ReportService,
    StudentService, render_results,
};
use gradeview_cli::messages;
use gradeview_config::PortalConfig;
use gradeview_models::StudentProfile;
use gradeview_observability::init_tracing;
use validator::Validate;

#[derive(Parser)]
#[command(name = "gradeview-cli")]
#[command(about = "Gradeview CLI - Fetch and render student results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the full results report
    Results {
        /// National ID (14 digits)
        #[arg(short = 'n', long)]
        national_id: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Log in and print the student profile only
    Profile {
        /// National ID (14 digits)
        #[arg(short = 'n', long)]
        national_id: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Render a saved results JSON array without contacting the portal
    Render {
        /// Path to a file holding the `GetAllResults` response body
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Results {
            national_id,
            password,
        } => handle_results(national_id, password).await,
        Commands::Profile {
            national_id,
            password,
        } => handle_profile(national_id, password).await,
        Commands::Render { file } => handle_render(file),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PortalError>() {
                Some(portal_error) => {
                    tracing::error!(error = %portal_error, kind = ?portal_error.kind(), "Request failed");
                    eprintln!("\n❌ {}", messages::for_error(portal_error));
                }
                None => eprintln!("\n❌ {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn handle_results(national_id: Option<String>, password: Option<String>) -> anyhow::Result<()> {
    let credentials = read_credentials(national_id, password)?;
    let client = PortalClient::new(PortalConfig::from_env())?;

    eprintln!("{}", messages::LOGGING_IN);
    let report = ReportService::generate_report(&client, &credentials).await?;

    if let Some(name) = report.student_name() {
        println!("{}", messages::greeting(name));
    }
    if let Some(url) = client.profile_image_url(&report.profile) {
        println!("{url}");
    }
    println!("\n{}", report.text);

    Ok(())
}

async fn handle_profile(national_id: Option<String>, password: Option<String>) -> anyhow::Result<()> {
    let credentials = read_credentials(national_id, password)?;
    let client = PortalClient::new(PortalConfig::from_env())?;

    eprintln!("{}", messages::LOGGING_IN);
    let token = AuthService::login(&client, &credentials).await?;
    let profile = StudentService::fetch_profile(&client, &token).await?;

    print_profile(&client, &profile);
    Ok(())
}

fn handle_render(file: PathBuf) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let results: Vec<AcademicYearResult> =
        serde_json::from_str(&body).map_err(|e| PortalError::decode("saved results", e))?;

    println!("{}", render_results(&results)?);
    Ok(())
}

fn print_profile(client: &PortalClient, profile: &StudentProfile) {
    let or_dash = |value: Option<&str>| value.unwrap_or("-").to_string();

    println!("\n✅ Profile fetched");
    println!("   Name: {}", or_dash(profile.display_name().ok()));
    println!("   Student UUID: {}", profile.uuid);
    println!("   College: {}", or_dash(profile.college.primary().ok()));
    println!("   Year: {}", profile.year);
    println!("   Study year: {}", profile.study_year);
    if let Some(url) = client.profile_image_url(profile) {
        println!("   Photo: {url}");
    }
}

fn read_credentials(
    national_id: Option<String>,
    password: Option<String>,
) -> anyhow::Result<Credentials> {
    let national_id = match national_id {
        Some(value) => value,
        None => Input::new()
            .with_prompt("National ID")
            .interact_text()
            .context("Failed to read national ID")?,
    };

    let password = match password {
        Some(value) => value,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };

    let credentials = Credentials::new(national_id, password);
    if let Err(errors) = credentials.validate() {
        anyhow::bail!(messages::for_validation(&errors));
    }

    Ok(credentials)
}
