// Contractor registration form, command-line front end

use clap::{Parser, Subcommand, ValueEnum};
use contractor_form::{
    models::{ContractorForm, ContractorType, FormField, FormValidationResult},
    processing::ImageAttachment,
    submission::{config::parse_endpoint, ContractorClient, SubmitConfig},
    utils::ContractorError,
    validation::{is_valid_nip_value, is_valid_pesel_value, Nip, Pesel, Sex},
    ContractorRegistration, SubmissionOutcome,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "contractor-form", version, about = "Register a contractor with PESEL/NIP validation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a PESEL
    Pesel {
        value: String,
        /// Parse VALUE as JSON first; anything but a JSON string is invalid
        #[arg(long)]
        json: bool,
    },
    /// Check a NIP (spaces and hyphens are ignored)
    Nip {
        value: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the preview for a .jpg/.jpeg image
    Preview { image: PathBuf },
    /// Validate the form and submit it
    Submit(SubmitArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Person,
    Business,
}

impl From<TypeArg> for ContractorType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Person => ContractorType::Person,
            TypeArg::Business => ContractorType::Business,
        }
    }
}

#[derive(clap::Args)]
struct SubmitArgs {
    /// JSON file with initial form values; flags override it
    #[arg(long)]
    form: Option<PathBuf>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long = "type", value_enum)]
    contractor_type: Option<TypeArg>,
    /// PESEL, used when the type is person
    #[arg(long)]
    id: Option<String>,
    /// NIP, used when the type is business
    #[arg(long)]
    nip: Option<String>,
    #[arg(long)]
    image: Option<PathBuf>,
    /// Overrides CONTRACTOR_ENDPOINT
    #[arg(long)]
    endpoint: Option<String>,
    /// Print the request body instead of sending it
    #[arg(long)]
    dry_run: bool,
}

fn parse_input(value: &str, json: bool) -> Result<Value, ContractorError> {
    if json {
        Ok(serde_json::from_str(value)?)
    } else {
        Ok(Value::String(value.to_string()))
    }
}

fn check_pesel(value: &str, json: bool) -> Result<ExitCode, ContractorError> {
    let input = parse_input(value, json)?;
    if !is_valid_pesel_value(&input) {
        println!("PESEL {}: INVALID", value);
        if let Some(Err(e)) = input.as_str().map(Pesel::parse) {
            println!("  {}", e);
        }
        return Ok(ExitCode::from(2));
    }

    println!("PESEL {}: VALID", value);
    if let Some(Ok(pesel)) = input.as_str().map(Pesel::parse) {
        match pesel.birth_date() {
            Some(date) => println!("  Date of birth: {}", date),
            None => println!("  Date of birth: not a calendar date"),
        }
        let sex = match pesel.sex() {
            Sex::Female => "female",
            Sex::Male => "male",
        };
        println!("  Sex: {}", sex);
    }
    Ok(ExitCode::SUCCESS)
}

fn check_nip(value: &str, json: bool) -> Result<ExitCode, ContractorError> {
    let input = parse_input(value, json)?;
    if !is_valid_nip_value(&input) {
        println!("NIP {}: INVALID", value);
        if let Some(Err(e)) = input.as_str().map(Nip::parse) {
            println!("  {}", e);
        }
        return Ok(ExitCode::from(2));
    }

    println!("NIP {}: VALID", value);
    if let Some(Ok(nip)) = input.as_str().map(Nip::parse) {
        println!("  Formatted: {}", nip.formatted());
    }
    Ok(ExitCode::SUCCESS)
}

fn show_preview(path: &Path) -> Result<ExitCode, ContractorError> {
    let attachment = ImageAttachment::open(path)?;
    let preview = attachment.preview();

    println!("Image: {}", attachment.path().display());
    println!("  Size: {} bytes", attachment.len());
    match preview.dimensions {
        Some((width, height)) => println!("  Dimensions: {}x{}", width, height),
        None => println!("  Dimensions: unknown (not decodable)"),
    }
    println!("  Data URL: {} characters", preview.data_url.len());
    Ok(ExitCode::SUCCESS)
}

fn load_form(args: &SubmitArgs) -> Result<ContractorForm, ContractorError> {
    let mut form = match &args.form {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str::<ContractorForm>(&text)
                .map_err(|e| ContractorError::Form(format!("{}: {}", path.display(), e)))?
        }
        None => ContractorForm::new(),
    };

    if let Some(first_name) = &args.first_name {
        form.first_name = first_name.clone();
    }
    if let Some(last_name) = &args.last_name {
        form.last_name = last_name.clone();
    }
    if let Some(contractor_type) = args.contractor_type {
        form.contractor_type = contractor_type.into();
    }
    if let Some(id) = &args.id {
        form.id = id.clone();
    }
    if let Some(nip) = &args.nip {
        form.nip = nip.clone();
    }
    Ok(form)
}

fn print_issues(result: &FormValidationResult) {
    println!("The form has errors:");
    let fields = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Id,
        FormField::Nip,
    ];
    for field in fields {
        if let Some(message) = result.error_for(field) {
            println!("  {:<10} {}", field.name(), message);
        }
    }
}

async fn submit(args: SubmitArgs) -> Result<ExitCode, ContractorError> {
    let mut config = SubmitConfig::from_env()?;
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = parse_endpoint(endpoint)?;
    }

    let mut form = load_form(&args)?;
    let mut registration = ContractorRegistration::new(ContractorClient::new(config.clone())?);
    if let Some(image) = &args.image {
        let preview = registration.select_image(image)?;
        if let Some((width, height)) = preview.dimensions {
            println!("Image selected: {}x{}", width, height);
        }
    }

    if args.dry_run {
        return match registration.prepare(&mut form) {
            Ok(payload) => {
                println!("POST {}", config.endpoint);
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(validation) => {
                print_issues(&validation);
                Ok(ExitCode::from(2))
            }
        };
    }

    match registration.submit(&mut form).await {
        SubmissionOutcome::Submitted(receipt) => {
            println!("Contractor saved (HTTP {})", receipt.status);
            Ok(ExitCode::SUCCESS)
        }
        SubmissionOutcome::Invalid(validation) => {
            print_issues(&validation);
            Ok(ExitCode::from(2))
        }
        SubmissionOutcome::Failed(e) => {
            eprintln!("Submission failed: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Pesel { value, json } => check_pesel(&value, json),
        Command::Nip { value, json } => check_nip(&value, json),
        Command::Preview { image } => show_preview(&image),
        Command::Submit(args) => submit(args).await,
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
