use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use church_management::config::AppConfig;
use church_management::db;
use church_management::error::AppError;
use church_management::logging;
use church_management::models::enums::Role;
use church_management::models::users;
use church_management::services::account_service::{AccountService, ExtraFields};
use church_management::utils::password::PasswordHasher;

#[derive(Parser, Debug)]
#[command(name = "church_management", version, about = "Administration de la base de l'église")]
struct Cli {
    /// Logs détaillés (ignoré si RUST_LOG est défini)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Crée les tables manquantes
    Migrate,
    /// Crée un compte
    Createuser(AccountArgs),
    /// Crée un superuser (is_staff, is_superuser, is_active)
    Createsuperuser(AccountArgs),
}

#[derive(Args, Debug)]
struct AccountArgs {
    #[arg(long)]
    username: String,

    /// Sans mot de passe, le compte ne peut pas se connecter
    #[arg(long, env = "CHURCH_ACCOUNT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    /// admin | client
    #[arg(long)]
    role: Option<Role>,

    /// Identifiants de professions (répétable)
    #[arg(long = "profession")]
    professions: Vec<i32>,

    /// Affiche le compte créé en JSON (sans le mot de passe)
    #[arg(long)]
    json: bool,
}

impl AccountArgs {
    fn extra_fields(&self) -> ExtraFields {
        ExtraFields {
            role: self.role,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            professions: self.professions.clone(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("{}", e);
    }

    if let Err(e) = run(cli.command).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    info!("Connecting to database...");
    let db = db::establish_connection(&config).await?;

    let service = AccountService::new(PasswordHasher::new(config.password_iterations));

    match command {
        Commands::Migrate => {
            db::create_schema(&db).await?;
        }
        Commands::Createuser(args) => {
            let user = service
                .create_user(&db, &args.username, args.password.as_deref(), args.extra_fields())
                .await?;
            print_account(&user, args.json)?;
        }
        Commands::Createsuperuser(args) => {
            let user = service
                .create_superuser(&db, &args.username, args.password.as_deref(), args.extra_fields())
                .await?;
            print_account(&user, args.json)?;
        }
    }

    Ok(())
}

fn print_account(user: &users::Model, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        println!(
            "Account '{}' created (id={}, role={}, staff={}, superuser={})",
            user, user.id, user.role, user.is_staff, user.is_superuser
        );
    }
    Ok(())
}
