use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;

use arehab_cli::access::{check_access, AccessCredentials};
use arehab_cli::commands::Attach;
use arehab_cli::{commands, config, mail};
use arehab_core::models::exercise::Category;
use arehab_rules::{derive_suggestions, select_exercise_plan};
use arehab_rules::suggestions::matched_rule_ids;

/// Podiatric/postural assessment: suggestions, exercise plans and printable documents.
#[derive(Parser)]
#[command(name = "arehab", version, about)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, env = "AREHAB_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Username for the access gate. The password is read from AREHAB_PASSWORD.
    #[arg(long, env = "AREHAB_USER", global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the exercise catalog by category.
    Catalog,
    /// Print the automatic suggestions for a record.
    Suggest { record: PathBuf },
    /// Print the exercise plan for a record.
    Plan {
        record: PathBuf,
        #[command(flatten)]
        selection: Selection,
    },
    /// Write the clinical record and exercise sheet documents.
    Export {
        record: PathBuf,
        #[command(flatten)]
        selection: Selection,
        /// Output directory (defaults to the configured one, then the current directory).
        #[arg(long)]
        out: Option<PathBuf>,
        /// JSON list of per-exercise dosage/progression/link adjustments.
        #[arg(long)]
        adjustments: Option<PathBuf>,
    },
    /// E-mail the exercise sheet, or the clinical record, as an attachment.
    Send {
        record: PathBuf,
        #[command(flatten)]
        selection: Selection,
        /// Recipient (defaults to the patient's e-mail).
        #[arg(long)]
        to: Option<String>,
        /// Attach the clinical record instead of the exercise sheet.
        #[arg(long)]
        clinical_record: bool,
        /// JSON list of per-exercise dosage/progression/link adjustments.
        #[arg(long)]
        adjustments: Option<PathBuf>,
    },
    /// Manage the access gate.
    Credentials {
        #[command(subcommand)]
        action: CredentialsAction,
    },
    /// Show the active configuration (password redacted).
    Config,
}

#[derive(Args)]
struct Selection {
    /// Pick exercises from these categories instead of deriving them.
    #[arg(long = "category")]
    categories: Vec<Category>,
    /// Manual selection; without --category this takes the whole catalog.
    #[arg(long)]
    manual: bool,
}

#[derive(Subcommand)]
enum CredentialsAction {
    /// Require USER and the password in AREHAB_NEW_PASSWORD.
    Set { username: String },
    /// Remove the access gate.
    Clear,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let mut cfg = config::load_or_default(&config_path)?;

    let password = std::env::var("AREHAB_PASSWORD").ok();
    check_access(cfg.access.as_ref(), cli.user.as_deref(), password.as_deref())?;

    match cli.command {
        Command::Catalog => {
            let catalog = commands::load_catalog(cfg.catalog_path.as_deref())?;
            print!("{}", commands::format_catalog(&catalog));
        }
        Command::Suggest { record } => {
            let record = commands::read_record(&record)?;
            tracing::debug!(rules = ?matched_rule_ids(&record), "suggestion rules matched");
            print!("{}", commands::format_suggestions(&derive_suggestions(&record)));
        }
        Command::Plan { record, selection } => {
            let record = commands::read_record(&record)?;
            let catalog = commands::load_catalog(cfg.catalog_path.as_deref())?;
            let mode = commands::plan_mode(selection.manual, &selection.categories);
            let plan = select_exercise_plan(&record, &catalog, &mode);
            print!("{}", commands::format_plan(&plan));
        }
        Command::Export {
            record,
            selection,
            out,
            adjustments,
        } => {
            let record = commands::read_record(&record)?;
            let catalog = commands::load_catalog(cfg.catalog_path.as_deref())?;
            let mode = commands::plan_mode(selection.manual, &selection.categories);
            let adjustments = match adjustments {
                Some(path) => commands::read_adjustments(&path)?,
                None => Vec::new(),
            };
            let out_dir = out
                .or_else(|| cfg.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));

            let summary = commands::export(&record, &catalog, &mode, &adjustments, &cfg, &out_dir)?;
            println!("Clinical record: {}", summary.clinical_record.display());
            println!("Exercise sheet:  {}", summary.exercise_sheet.display());
            println!("E-mail:   {}", summary.mailto);
            println!("WhatsApp: {}", summary.whatsapp);
        }
        Command::Send {
            record,
            selection,
            to,
            clinical_record,
            adjustments,
        } => {
            let record = commands::read_record(&record)?;
            let (smtp, recipient) = commands::mail_route(&record, &cfg, to.as_deref())?;
            let smtp_password = std::env::var("AREHAB_SMTP_PASSWORD")
                .map_err(|_| eyre::eyre!("set AREHAB_SMTP_PASSWORD to the mail account password"))?;

            let catalog = commands::load_catalog(cfg.catalog_path.as_deref())?;
            let mode = commands::plan_mode(selection.manual, &selection.categories);
            let adjustments = match adjustments {
                Some(path) => commands::read_adjustments(&path)?,
                None => Vec::new(),
            };
            let attach = if clinical_record {
                Attach::ClinicalRecord
            } else {
                Attach::ExerciseSheet
            };

            let documents = commands::build_documents(&record, &catalog, &mode, &adjustments, &cfg)?;
            let message = commands::compose_mail(&record, &documents, attach, smtp, recipient)?;
            mail::send(smtp, &smtp_password, &message)?;
            println!("Sent to {recipient}");
        }
        Command::Credentials { action } => {
            match action {
                CredentialsAction::Set { username } => {
                    let new_password = std::env::var("AREHAB_NEW_PASSWORD")
                        .map_err(|_| eyre::eyre!("set AREHAB_NEW_PASSWORD to the new password"))?;
                    if new_password.is_empty() {
                        return Err(eyre::eyre!("AREHAB_NEW_PASSWORD is empty"));
                    }
                    cfg.access = Some(AccessCredentials::new(username, &new_password));
                }
                CredentialsAction::Clear => cfg.access = None,
            }
            config::save_config(&config_path, &cfg)?;
        }
        Command::Config => {
            let info = config::config_info(&config_path, &cfg);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
